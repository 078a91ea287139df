// ABOUTME: The interactive display/input pair joined by a one-shot shutdown signal.
// ABOUTME: One task probes the container on a timer, the other watches stdin for the sentinel.

use crate::daemon::{DockerApi, ExecError};
use crate::output::LiveRegion;
use crate::types::ContainerId;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Typing this on a line of its own ends the interactive loop.
pub const SENTINEL: &str = "e";

#[derive(Debug, Error)]
pub enum InteractiveError {
    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Run the display and input tasks until the user types the sentinel.
///
/// `input` is the line source watched for the sentinel, stdin in production.
/// Both tasks are joined before this returns, so teardown never races a
/// probe still in flight. A daemon error in the display task is returned to
/// the caller rather than aborting the process; the caller is expected to
/// tear the container down regardless.
pub async fn run_interactive<D, R>(
    docker: Arc<D>,
    id: ContainerId,
    probe_cmd: Vec<String>,
    interval: Duration,
    input: R,
) -> Result<(), InteractiveError>
where
    D: DockerApi + 'static,
    R: AsyncRead + Send + Unpin + 'static,
{
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let mut display = tokio::spawn(display_loop(docker, id, probe_cmd, interval, shutdown_rx));
    let mut input = tokio::spawn(input_loop(input, shutdown_tx));

    tokio::select! {
        input_result = &mut input => {
            // Sentinel typed or stdin closed; the display task drains on the
            // fired (or dropped) signal.
            let display_result = display.await;
            input_result??;
            display_result??;
            Ok(())
        }
        display_result = &mut display => {
            // The display task only finishes first on error. Nothing will
            // unblock the stdin read, so cut the input task loose.
            input.abort();
            let _ = input.await;
            display_result??;
            Ok(())
        }
    }
}

/// Probe the container every `interval` and redraw the output region.
async fn display_loop<D: DockerApi>(
    docker: Arc<D>,
    id: ContainerId,
    probe_cmd: Vec<String>,
    interval: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> Result<(), InteractiveError> {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut region = LiveRegion::new();

    loop {
        tokio::select! {
            // A dropped sender (stdin closed) also ends the loop.
            _ = &mut shutdown => {
                region.finish();
                return Ok(());
            }
            _ = ticker.tick() => {
                let exec_id = docker.create_exec(&id, &probe_cmd).await?;
                let output = docker.start_exec(&exec_id).await?;
                region.render(&format!(
                    "Type \"{SENTINEL}\" and press ENTER to finish\n{output}"
                ))?;
            }
        }
    }
}

/// Read input lines and fire the shutdown signal on the sentinel.
async fn input_loop<R>(input: R, shutdown: oneshot::Sender<()>) -> Result<(), InteractiveError>
where
    R: AsyncRead + Send + Unpin + 'static,
{
    let mut lines = BufReader::new(input).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim() == SENTINEL {
            // The receiver only disappears if the display task already
            // failed, in which case there is nobody left to signal.
            let _ = shutdown.send(());
            return Ok(());
        }
    }

    debug!("input closed before sentinel; shutting down");
    Ok(())
}
