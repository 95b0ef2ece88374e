use crate::format::OutputFormat;
use crate::request::ConversionRequest;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONVERTER: &str = "pandoc";
/// Reference document picked up from the working directory for ODT output.
pub const DEFAULT_TEMPLATE: &str = "template.odt";
pub const STYLESHEET: &str = "styles.css";
pub const TOC_DEPTH: u8 = 2;

/// A fully formed converter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: OsString,
    args: Vec<OsString>,
    output: PathBuf,
}

impl CommandSpec {
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program name followed by its arguments.
    pub fn tokens(&self) -> impl Iterator<Item = &OsStr> {
        std::iter::once(self.program.as_os_str()).chain(self.args.iter().map(OsString::as_os_str))
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn into_output(self) -> PathBuf {
        self.output
    }
}

/// Turns a [`ConversionRequest`] into a [`CommandSpec`].
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    converter: OsString,
    default_template: PathBuf,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl CommandBuilder {
    pub fn new(converter: impl Into<OsString>) -> Self {
        Self {
            converter: converter.into(),
            default_template: PathBuf::from(DEFAULT_TEMPLATE),
        }
    }

    pub fn with_default_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_template = path.into();
        self
    }

    pub fn build(&self, request: &ConversionRequest) -> CommandSpec {
        let output = request.output_path();

        let mut args = vec![request.input().as_os_str().to_os_string()];
        args.extend(self.format_flags(request));
        args.push("-o".into());
        args.push(output.as_os_str().to_os_string());

        let spec = CommandSpec {
            program: self.converter.clone(),
            args,
            output,
        };
        debug!(command = ?spec.tokens().collect::<Vec<_>>(), "built converter command");
        spec
    }

    fn format_flags(&self, request: &ConversionRequest) -> Vec<OsString> {
        let mut flags: Vec<OsString> = Vec::new();
        if request.format().standalone() {
            flags.push("-s".into());
        }

        match request.format() {
            OutputFormat::Html => {
                flags.push(format!("--css={}", STYLESHEET).into());
                if request.toc() {
                    flags.push("--toc".into());
                    flags.push(format!("--toc-depth={}", TOC_DEPTH).into());
                }
            }
            OutputFormat::Docx => {}
            OutputFormat::Odt => {
                if let Some(reference) = self.resolve_reference_doc(request.template()) {
                    flags.push("--reference-doc".into());
                    flags.push(reference.into_os_string());
                }
            }
        }

        flags
    }

    /// Explicit template if it exists, else the default template if it
    /// exists, else nothing.
    pub fn resolve_reference_doc(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit.filter(|p| p.exists()) {
            debug!(template = %path.display(), "using explicit reference document");
            return Some(path.to_path_buf());
        }
        if self.default_template.exists() {
            debug!(template = %self.default_template.display(), "using default reference document");
            return Some(self.default_template.clone());
        }
        None
    }
}
