use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mergington::{config, ActivityRegistry, AppState, Config};

#[derive(Parser, Debug)]
#[command(
    name = "mergington",
    version,
    about = "Mergington High School activities API",
    long_about = None,
)]
struct Cli {
    /// Host address to bind to.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on.
    #[arg(long)]
    port: Option<u16>,

    /// Directory to serve the landing page from.
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::default();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }

    let registry = ActivityRegistry::with_activities(config::default_activities());
    let state = AppState::new(registry);

    mergington::run_server(state, config).await
}
