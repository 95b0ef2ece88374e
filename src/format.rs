use clap::ValueEnum;
use std::fmt;

/// Target document format of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Docx,
    Odt,
}

impl OutputFormat {
    /// Canonical file extension, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => ".html",
            OutputFormat::Docx => ".docx",
            OutputFormat::Odt => ".odt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Html => "HTML",
            OutputFormat::Docx => "DOCX",
            OutputFormat::Odt => "ODT",
        }
    }

    /// Whether pandoc is asked for a standalone (`-s`) document.
    pub fn standalone(self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::Odt)
    }

    pub fn supports_toc(self) -> bool {
        self == OutputFormat::Html
    }

    pub fn supports_reference_doc(self) -> bool {
        self == OutputFormat::Odt
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
