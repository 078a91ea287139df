// ABOUTME: Daemon client for the fixed Docker Engine API slice this tool uses.
// ABOUTME: Exposes the DockerApi trait, the HTTP implementation, and wire models.

mod client;
mod error;
pub mod models;

pub use client::{DockerApi, HttpDocker};
pub use error::{ContainerError, ExecError, ImageError};
