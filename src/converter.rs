use crate::cli::Cli;
use crate::command::{CommandBuilder, CommandSpec};
use crate::deps;
use crate::error::ConvertError;
use crate::launcher;
use crate::request::ConversionRequest;
use crate::styling;
use crate::template;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

pub fn run(cli: &Cli) -> Result<()> {
    // Template generation needs neither an input file nor the external tools
    if cli.create_template {
        let cwd = std::env::current_dir().context("failed to resolve current directory")?;
        let path = template::create_template(&cwd)?;
        styling::print_success(&format!("Created template: {}", template::TEMPLATE_FILE));
        debug!(path = %path.display(), "template written");
        return Ok(());
    }

    let input = cli
        .input
        .clone()
        .context("an input Markdown file is required")?;
    let request = request_from_cli(cli, input);
    request.validate()?;

    // The viewer is required even with --no-open
    let missing = deps::missing_programs(&[cli.converter.as_str(), cli.viewer.as_str()]);
    if !missing.is_empty() {
        return Err(ConvertError::MissingDependencies(missing).into());
    }

    let output = convert(&CommandBuilder::new(cli.converter.as_str()), &request)?;
    styling::print_success(&format!(
        "Converted to {}: {}",
        request.format(),
        output.display()
    ));

    // A viewer that fails to start does not undo a finished conversion
    if !cli.no_open {
        match launcher::open_in_viewer(&cli.viewer, &output) {
            Ok(()) => styling::print_success(&format!(
                "Opened in {}: {}",
                cli.viewer,
                output.display()
            )),
            Err(err) => styling::print_warning(&format!("{:#}", anyhow::Error::from(err))),
        }
    }

    Ok(())
}

pub fn request_from_cli(cli: &Cli, input: PathBuf) -> ConversionRequest {
    ConversionRequest::new(input, cli.format)
        .with_output(cli.output.clone())
        .with_toc(cli.toc)
        .with_template(cli.template.clone())
}

/// Builds the converter command for `request` and runs it to completion.
/// Returns the output path when the converter exits successfully.
pub fn convert(builder: &CommandBuilder, request: &ConversionRequest) -> Result<PathBuf, ConvertError> {
    let spec = builder.build(request);
    execute(&spec)?;
    Ok(spec.into_output())
}

fn execute(spec: &CommandSpec) -> Result<(), ConvertError> {
    let program = spec.program().to_string_lossy().into_owned();
    info!(%program, output = %spec.output().display(), "running converter");

    let status = Command::new(spec.program())
        .args(spec.args())
        .status()
        .map_err(|source| ConvertError::ConverterSpawn {
            program: program.clone(),
            source,
        })?;

    debug!(%status, "converter exited");
    if !status.success() {
        return Err(ConvertError::ConversionFailed { program, status });
    }
    Ok(())
}
