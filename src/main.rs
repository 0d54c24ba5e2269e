use anyhow::Context;
use clap::Parser;
use log::error;
use pipeline_integrator::integrator::Integrator;
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Pulls data from the configured sources, pushes it to the configured targets and
/// reports completion by email.
#[derive(Parser)]
#[command(name = "pipeline-integrator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (.json, .yaml, .toml or .ron)
    #[arg(default_value = "config.json")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: PathBuf) -> anyhow::Result<()> {
    let mut integrator = Integrator::try_from(config_path.clone())
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    let mut out = io::stdout().lock();
    integrator.run(&mut out).context("Integration failed")?;
    out.flush().context("Could not flush stdout")?;
    Ok(())
}

// Logs go to stderr so stdout only carries integration data.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
