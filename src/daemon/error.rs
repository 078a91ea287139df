// ABOUTME: Per-concern error enums for daemon operations.
// ABOUTME: Status codes the daemon documents map to named variants; the rest collapse.

use crate::transport::TransportError;

/// Errors from image operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("daemon returned status {status}: {message}")]
    Daemon { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid daemon response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors from container lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("container not found: {0}")]
    NotFound(String),

    #[error("container already exists: {0}")]
    AlreadyExists(String),

    #[error("image not found: {0}")]
    ImageNotFound(String),

    #[error("container is running: {0}")]
    Running(String),

    #[error("daemon returned status {status}: {message}")]
    Daemon { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid daemon response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors from exec-instance operations.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("container not found: {0}")]
    ContainerNotFound(String),

    #[error("container not running: {0}")]
    ContainerNotRunning(String),

    #[error("exec instance not found: {0}")]
    NotFound(String),

    #[error("daemon returned status {status}: {message}")]
    Daemon { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid daemon response: {0}")]
    Decode(#[from] serde_json::Error),
}
