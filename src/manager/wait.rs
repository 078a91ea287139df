// ABOUTME: Readiness polling for freshly started containers.
// ABOUTME: Polls the daemon on an interval until running, bounded by a total timeout.

use crate::daemon::{ContainerError, DockerApi};
use crate::types::ContainerId;
use std::time::Duration;
use thiserror::Error;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Error)]
pub enum WaitError {
    #[error("container did not reach running state within {}s", timeout.as_secs())]
    Timeout { timeout: Duration },

    #[error(transparent)]
    Container(#[from] ContainerError),
}

/// Poll the container state until the daemon reports `running`.
///
/// The first poll happens immediately, so a container that is already
/// running returns without waiting a full interval. Daemon errors during
/// polling propagate; if `timeout` elapses first the whole wait fails.
pub async fn wait_until_running<D: DockerApi + ?Sized>(
    docker: &D,
    id: &ContainerId,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<(), WaitError> {
    let poll = async {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if docker.container_running(id).await? {
                return Ok(());
            }
        }
    };

    match tokio::time::timeout(timeout, poll).await {
        Ok(result) => result,
        Err(_) => Err(WaitError::Timeout { timeout }),
    }
}
