//! MaxArea CLI - Main Entry Point
//!
//! Computes the container with most water for a list of heights, or runs
//! the web form.

use clap::{Parser, Subcommand};

use maxarea_cli::commands::{compute, serve, LimitArgs};
use maxarea_cli::output;
use maxarea_common::Limits;

/// MaxArea - container with most water
#[derive(Parser)]
#[command(name = "maxarea")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, default_value = "plain", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    limits: LimitArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the max area for a list of heights
    Compute(compute::ComputeArgs),

    /// Run the web form
    Serve(serve::ServeArgs),

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Compute(args) => {
            let limits = cli.limits.apply(Limits::default());
            if !compute::execute(args, limits, cli.format).await? {
                std::process::exit(1);
            }
        }
        Commands::Serve(args) => serve::execute(args, cli.limits).await?,
        Commands::Version => {
            println!("MaxArea CLI v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
