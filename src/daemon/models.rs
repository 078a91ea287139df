// ABOUTME: Wire-format request and response records for the daemon API.
// ABOUTME: Stateless serde shapes that live for a single call.

use crate::types::{ContainerId, ExecId};
use serde::{Deserialize, Serialize};

/// Body for `POST /containers/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateContainerRequest {
    /// Command to run when the container starts.
    pub cmd: Vec<String>,
    /// Image reference in `name:tag` form.
    pub image: String,
}

/// Response from `POST /containers/create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateContainerResponse {
    pub id: ContainerId,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// The slice of `GET /containers/{id}/json` this client reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerStatus {
    pub state: ContainerState,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerState {
    /// Current lifecycle state (created, running, paused, exited, ...).
    pub status: String,
    #[serde(default)]
    pub running: bool,
}

/// Body for `POST /containers/{id}/exec`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateExecRequest {
    pub attach_stdin: bool,
    pub attach_stdout: bool,
    pub attach_stderr: bool,
    pub tty: bool,
    pub cmd: Vec<String>,
}

impl CreateExecRequest {
    /// The configuration the display loop uses: capture stdout and stderr
    /// through a tty, nothing attached to stdin.
    pub fn output_capture(cmd: Vec<String>) -> Self {
        Self {
            attach_stdin: false,
            attach_stdout: true,
            attach_stderr: true,
            tty: true,
            cmd,
        }
    }
}

/// Response from `POST /containers/{id}/exec`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateExecResponse {
    pub id: ExecId,
}

/// Body for `POST /exec/{id}/start`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartExecRequest {
    pub detach: bool,
    pub tty: bool,
}
