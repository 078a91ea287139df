// ABOUTME: Sequences the whole container session from image check to removal.
// ABOUTME: Teardown always attempts stop-then-remove, whatever the loop outcome.

use super::interactive::run_interactive;
use super::wait::wait_until_running;
use crate::daemon::DockerApi;
use crate::error::{Error, Result};
use crate::types::{ContainerId, ImageRef};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncRead;
use tracing::warn;

/// Everything a session needs beyond the daemon client itself.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Image to run.
    pub image: ImageRef,
    /// Platform passed to the registry pull.
    pub platform: String,
    /// Name for the created container.
    pub container_name: String,
    /// Command the container runs for its lifetime.
    pub container_cmd: Vec<String>,
    /// Command the display loop probes with.
    pub probe_cmd: Vec<String>,
    /// Total window for the container to reach running state.
    pub ready_timeout: Duration,
    /// Interval between readiness polls.
    pub poll_interval: Duration,
    /// Interval between display probes.
    pub display_interval: Duration,
}

impl SessionConfig {
    pub fn new(image: ImageRef) -> Self {
        Self {
            image,
            platform: "x86-64".to_string(),
            container_name: "ubuntu2004".to_string(),
            container_cmd: vec!["sleep".to_string(), "infinity".to_string()],
            probe_cmd: vec![
                "/bin/sh".to_string(),
                "-c".to_string(),
                "top -b -n 1 | head -4 | tail -2".to_string(),
            ],
            ready_timeout: Duration::from_secs(180),
            poll_interval: Duration::from_secs(1),
            display_interval: Duration::from_millis(800),
        }
    }
}

/// Run one full session: ensure image, create, start, wait, interact, tear down.
///
/// `input` is the stream watched for the finish sentinel, stdin in
/// production.
pub async fn run_session<D, R>(docker: Arc<D>, config: SessionConfig, input: R) -> Result<()>
where
    D: DockerApi + 'static,
    R: AsyncRead + Send + Unpin + 'static,
{
    if !docker.image_exists(&config.image).await? {
        println!(
            "couldn't find image {} locally, downloading...",
            config.image
        );
        docker.pull_image(&config.image, &config.platform).await?;
    }

    println!(
        "initiating container {} from image {}",
        config.container_name, config.image
    );
    let id = docker
        .create_container(&config.container_name, &config.image, &config.container_cmd)
        .await?;

    docker.start_container(&id).await?;

    println!("waiting for container to be in running state...");
    wait_until_running(
        docker.as_ref(),
        &id,
        config.ready_timeout,
        config.poll_interval,
    )
    .await?;

    let loop_result = run_interactive(
        Arc::clone(&docker),
        id.clone(),
        config.probe_cmd.clone(),
        config.display_interval,
        input,
    )
    .await;

    let teardown_result = teardown(docker.as_ref(), &id).await;

    // The interactive failure is the more useful report; teardown problems
    // surface once the loop outcome is accounted for.
    loop_result?;
    teardown_result
}

/// Stop and remove the container. Both steps are attempted even when the
/// interactive loop failed; the first teardown error wins.
async fn teardown<D: DockerApi + ?Sized>(docker: &D, id: &ContainerId) -> Result<()> {
    println!("Stopping the container, please wait...");
    let stop_result = docker.stop_container(id).await;
    if let Ok(false) = &stop_result {
        warn!(container = %id, "container had already stopped");
    }

    println!("Removing the container, please wait...");
    let remove_result = docker.remove_container(id).await;

    stop_result.map_err(Error::from)?;
    remove_result?;
    Ok(())
}
