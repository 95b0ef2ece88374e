use crate::command::DEFAULT_CONVERTER;
use crate::format::OutputFormat;
use crate::launcher::DEFAULT_VIEWER;
use clap::Parser;
use std::path::PathBuf;

/// Convert Markdown documents with pandoc and open the result in LibreOffice
#[derive(Parser, Debug)]
#[command(name = "md2lo", version, about)]
pub struct Cli {
    /// Path to the input Markdown file (.md or .markdown)
    #[arg(required_unless_present = "create_template")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Odt)]
    pub format: OutputFormat,

    /// Output file. Defaults to the input path with the format's extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Add a table of contents (HTML only)
    #[arg(long, default_value_t = false)]
    pub toc: bool,

    /// Reference document whose styles are applied (ODT only).
    /// Falls back to ./template.odt when missing.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Do not open the converted file in the viewer
    #[arg(long, default_value_t = false)]
    pub no_open: bool,

    /// Write a starter template.html into the current directory and exit
    #[arg(long, default_value_t = false)]
    pub create_template: bool,

    /// Conversion engine to invoke
    #[arg(long, env = "MD2LO_CONVERTER", default_value = DEFAULT_CONVERTER)]
    pub converter: String,

    /// Application used to open the converted file
    #[arg(long, env = "MD2LO_VIEWER", default_value = DEFAULT_VIEWER)]
    pub viewer: String,

    /// Print debug logs to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
