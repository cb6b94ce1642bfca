//! feddocs CLI — the main entry point.
//!
//! Commands:
//! - `serve`    — Bootstrap the model server, then start the HTTP API
//! - `pipeline` — Create and seed the federal documents table
//! - `doctor`   — Diagnose config, model server, and store connectivity

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "feddocs",
    about = "feddocs — federal documents query service",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Override the gateway port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create and seed the federal documents table
    Pipeline,

    /// Diagnose system health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Pipeline => commands::pipeline::run().await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
