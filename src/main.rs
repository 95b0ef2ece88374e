use clap::Parser;
use md2lo::cli::Cli;
use md2lo::error::ConvertError;
use md2lo::{converter, deps, styling};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = converter::run(&cli) {
        styling::print_error(&format!("{:#}", err));
        if let Some(ConvertError::MissingDependencies(missing)) = err.downcast_ref::<ConvertError>() {
            styling::print_hint("Install them with:");
            for hint in deps::install_hints(missing) {
                styling::print_hint(&format!("  {}", hint));
            }
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "md2lo=debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
