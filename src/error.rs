// ABOUTME: Application-wide error types for dockman.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::daemon::{ContainerError, ExecError, ImageError};
use crate::manager::{InteractiveError, WaitError};
use crate::types::ParseImageRefError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid image reference: {0}")]
    InvalidImage(#[from] ParseImageRefError),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Wait(#[from] WaitError),

    #[error(transparent)]
    Interactive(#[from] InteractiveError),
}

pub type Result<T> = std::result::Result<T, Error>;
