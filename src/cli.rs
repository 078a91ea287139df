// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines flags, their defaults, and the endpoint environment override.

use clap::Parser;

/// Built-in daemon endpoint, matching a dockerd with the TCP socket enabled.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:2375";

/// When set, overrides the `-e` flag.
pub const ENDPOINT_ENV_VAR: &str = "DOCKER_MANAGER_ENDPOINT";

#[derive(Debug, Parser)]
#[command(name = "dockman")]
#[command(about = "Run a throwaway container and watch a command inside it live")]
#[command(version)]
pub struct Cli {
    /// Daemon endpoint to connect to
    #[arg(short = 'e', long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Image to run
    #[arg(long, default_value = "ubuntu")]
    pub image: String,

    /// Image tag
    #[arg(long, default_value = "20.04")]
    pub tag: String,

    /// Platform the image is pulled for
    #[arg(long, default_value = "x86-64")]
    pub platform: String,

    /// Name for the created container
    #[arg(long, default_value = "ubuntu2004")]
    pub name: String,

    /// Seconds to wait for the container to reach running state
    #[arg(long, default_value_t = 180)]
    pub ready_timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Endpoint with the environment override applied (env beats flag).
    pub fn resolved_endpoint(&self) -> String {
        std::env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| self.endpoint.clone())
    }
}
