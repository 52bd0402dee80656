use clap::{ArgAction, Parser};
use pattern_catalog::{
    CatalogConfig, CatalogError, OutputSink, application::Showcase, sinks::StdoutSink,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "pattern-catalog")]
#[command(about = "Runs the design pattern catalog demonstrations", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if verbose {
        EnvFilter::new("pattern_catalog=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pattern_catalog=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Loads the configuration named on the command line, or the defaults.
fn load_config(cli: &Cli) -> Result<CatalogConfig, CatalogError> {
    match &cli.config {
        Some(path) => CatalogConfig::load(path),
        None => Ok(CatalogConfig::default()),
    }
}

fn build_showcase(cli: &Cli, output: Arc<dyn OutputSink>) -> Result<Showcase, CatalogError> {
    let config = load_config(cli)?;
    Ok(Showcase::new(config, output))
}

fn run(cli: Cli) -> Result<(), CatalogError> {
    let showcase = build_showcase(&cli, Arc::new(StdoutSink))?;

    init_logging(cli.verbose > 0 || showcase.is_verbose());
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    showcase.run()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
