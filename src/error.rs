use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Missing dependencies: {}", .0.join(", "))]
    MissingDependencies(Vec<String>),

    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("{} must have a .md or .markdown extension", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("Conversion failed: {program} exited with {status}")]
    ConversionFailed { program: String, status: ExitStatus },

    #[error("Conversion failed: could not run {program}")]
    ConverterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open {program}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write template {}", path.display())]
    TemplateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
