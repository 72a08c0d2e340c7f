use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

use smartdo::config::ServerConfig;
use smartdo::{rest, AppContext};

#[derive(Parser)]
#[command(
    name = "smartdo",
    about = "Smart To-Do — single-user task manager with activity history",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port
    #[arg(long, env = "SMARTDO_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "SMARTDO_BIND")]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SMARTDO_LOG")]
    log: Option<String>,

    /// Path to a TOML config file (default: smartdo.toml in the working dir)
    #[arg(long, env = "SMARTDO_CONFIG")]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the server (default when no subcommand given).
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Arc::new(ServerConfig::new(args.port, args.bind, args.log, args.config));
    setup_logging(&config.log);

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => run_serve(config).await,
    }
}

async fn run_serve(config: Arc<ServerConfig>) -> Result<()> {
    let ctx = Arc::new(AppContext::new(config));
    info!("task store and history initialized, all lists empty");
    rest::start_rest_server(ctx).await
}

/// Stdout-only logging. `RUST_LOG` wins over the configured level so a
/// one-off `RUST_LOG=debug smartdo` works without touching config.
fn setup_logging(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
}
