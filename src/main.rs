// ABOUTME: Entry point for the dockman CLI application.
// ABOUTME: Parses arguments, wires up the client, and runs one session.

mod cli;

use clap::Parser;
use cli::Cli;
use dockman::daemon::HttpDocker;
use dockman::error::Result;
use dockman::manager::{SessionConfig, run_session};
use dockman::transport::HyperTransport;
use dockman::types::ImageRef;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let endpoint = cli.resolved_endpoint();
    println!("daemon endpoint set to {endpoint}");

    let image = ImageRef::with_tag(&cli.image, &cli.tag)?;
    let docker = HttpDocker::new(&endpoint, HyperTransport::new());

    let mut config = SessionConfig::new(image);
    config.platform = cli.platform;
    config.container_name = cli.name;
    config.ready_timeout = Duration::from_secs(cli.ready_timeout);

    run_session(Arc::new(docker), config, tokio::io::stdin()).await
}
