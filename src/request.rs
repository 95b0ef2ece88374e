use crate::error::ConvertError;
use crate::format::OutputFormat;
use std::path::{Path, PathBuf};

/// File name suffixes accepted as Markdown input.
pub const MARKDOWN_EXTENSIONS: &[&str] = &[".md", ".markdown"];

/// A single Markdown conversion, fixed at construction.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    input: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    toc: bool,
    template: Option<PathBuf>,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            input: input.into(),
            format,
            output: None,
            toc: false,
            template: None,
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_toc(mut self, toc: bool) -> Self {
        self.toc = toc;
        self
    }

    pub fn with_template(mut self, template: Option<PathBuf>) -> Self {
        self.template = template;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Table of contents is only honoured for HTML output.
    pub fn toc(&self) -> bool {
        self.toc && self.format.supports_toc()
    }

    /// Explicit reference document; ignored for anything but ODT.
    pub fn template(&self) -> Option<&Path> {
        if self.format.supports_reference_doc() {
            self.template.as_deref()
        } else {
            None
        }
    }

    /// Checks the input exists and carries a Markdown extension, in that order.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !self.input.exists() {
            return Err(ConvertError::InputNotFound(self.input.clone()));
        }
        if !has_markdown_extension(&self.input) {
            return Err(ConvertError::UnsupportedExtension(self.input.clone()));
        }
        Ok(())
    }

    /// The explicit output path verbatim, or one derived from the input.
    pub fn output_path(&self) -> PathBuf {
        match self.output {
            Some(ref path) => path.clone(),
            None => derive_output_path(&self.input, self.format),
        }
    }
}

pub fn has_markdown_extension(path: &Path) -> bool {
    let name = path.to_string_lossy();
    MARKDOWN_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Replaces every `.md`, then every `.markdown`, in the path with the
/// format's extension. Occurrences outside the suffix are replaced too,
/// so `a.md.d/notes.md` becomes `a.html.d/notes.html`.
pub fn derive_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let ext = format.extension();
    replace_in_path(&replace_in_path(input, ".md", ext), ".markdown", ext)
}

// Works on the raw bytes so non UTF-8 file names survive untouched.
#[cfg(unix)]
fn replace_in_path(path: &Path, from: &str, to: &str) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let replaced = replace_bytes(path.as_os_str().as_bytes(), from.as_bytes(), to.as_bytes());
    PathBuf::from(OsStr::from_bytes(&replaced))
}

#[cfg(not(unix))]
fn replace_in_path(path: &Path, from: &str, to: &str) -> PathBuf {
    PathBuf::from(path.to_string_lossy().replace(from, to))
}

#[cfg(unix)]
fn replace_bytes(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while !rest.is_empty() {
        if rest.starts_with(from) {
            out.extend_from_slice(to);
            rest = &rest[from.len()..];
        } else {
            out.push(rest[0]);
            rest = &rest[1..];
        }
    }
    out
}
