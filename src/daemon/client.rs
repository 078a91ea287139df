// ABOUTME: Daemon client: one method per REST endpoint the manager exercises.
// ABOUTME: Builds URLs and JSON bodies, classifies status codes into typed errors.

use super::error::{ContainerError, ExecError, ImageError};
use super::models::{
    ContainerStatus, CreateContainerRequest, CreateContainerResponse, CreateExecRequest,
    CreateExecResponse, StartExecRequest,
};
use crate::transport::{HttpResponse, HttpTransport};
use crate::types::{ContainerId, ExecId, ImageRef};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// The fixed slice of the daemon API this tool drives.
///
/// Each method is a direct mapping to one REST endpoint; implementations do
/// no retries and keep no state beyond the endpoint they talk to.
#[async_trait]
pub trait DockerApi: Send + Sync {
    /// Whether the image is already in the local store.
    async fn image_exists(&self, image: &ImageRef) -> Result<bool, ImageError>;

    /// Pull an image from the registry for the given platform.
    async fn pull_image(&self, image: &ImageRef, platform: &str) -> Result<(), ImageError>;

    /// Create a named container from an image, returning its ID.
    async fn create_container(
        &self,
        name: &str,
        image: &ImageRef,
        cmd: &[String],
    ) -> Result<ContainerId, ContainerError>;

    /// Start a created container.
    async fn start_container(&self, id: &ContainerId) -> Result<(), ContainerError>;

    /// Whether the container currently reports the `running` state.
    async fn container_running(&self, id: &ContainerId) -> Result<bool, ContainerError>;

    /// Create an exec instance inside a running container.
    async fn create_exec(&self, id: &ContainerId, cmd: &[String]) -> Result<ExecId, ExecError>;

    /// Run a created exec instance synchronously and return its output.
    async fn start_exec(&self, id: &ExecId) -> Result<String, ExecError>;

    /// Stop a container. Returns `true` if it was running, `false` if it had
    /// already stopped.
    async fn stop_container(&self, id: &ContainerId) -> Result<bool, ContainerError>;

    /// Remove a stopped container.
    async fn remove_container(&self, id: &ContainerId) -> Result<(), ContainerError>;
}

/// Daemon client over a plain HTTP transport.
pub struct HttpDocker<T> {
    endpoint: String,
    transport: T,
}

impl<T: HttpTransport> HttpDocker<T> {
    pub fn new(endpoint: &str, transport: T) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Best-effort extraction of the daemon's `{"message": ...}` error body.
fn daemon_message(response: &HttpResponse) -> String {
    #[derive(Deserialize)]
    struct DaemonMessage {
        message: String,
    }

    serde_json::from_slice::<DaemonMessage>(&response.body)
        .map(|m| m.message)
        .unwrap_or_else(|_| response.body_string())
}

#[async_trait]
impl<T: HttpTransport> DockerApi for HttpDocker<T> {
    async fn image_exists(&self, image: &ImageRef) -> Result<bool, ImageError> {
        let url = format!("{}/images/{}/json", self.endpoint, image);
        let response = self.transport.get(&url).await?;
        debug!(status = response.status, %image, "inspected image");

        match response.status {
            200 => Ok(true),
            404 => Ok(false),
            status => Err(ImageError::Daemon {
                status,
                message: daemon_message(&response),
            }),
        }
    }

    async fn pull_image(&self, image: &ImageRef, platform: &str) -> Result<(), ImageError> {
        let url = format!(
            "{}/images/create?fromImage={}&tag={}&platform={}",
            self.endpoint,
            urlencoding::encode(image.name()),
            urlencoding::encode(image.tag()),
            urlencoding::encode(platform),
        );
        let response = self.transport.post(&url, None).await?;
        debug!(status = response.status, %image, platform, "pulled image");

        match response.status {
            200 => Ok(()),
            404 => Err(ImageError::NotFound(image.to_string())),
            status => Err(ImageError::Daemon {
                status,
                message: daemon_message(&response),
            }),
        }
    }

    async fn create_container(
        &self,
        name: &str,
        image: &ImageRef,
        cmd: &[String],
    ) -> Result<ContainerId, ContainerError> {
        let url = format!(
            "{}/containers/create?name={}",
            self.endpoint,
            urlencoding::encode(name),
        );
        let body = serde_json::to_string(&CreateContainerRequest {
            cmd: cmd.to_vec(),
            image: image.to_string(),
        })?;

        let response = self.transport.post(&url, Some(body)).await?;
        debug!(status = response.status, name, %image, "created container");

        match response.status {
            201 => {
                let created: CreateContainerResponse = serde_json::from_slice(&response.body)?;
                for warning in &created.warnings {
                    tracing::warn!(container = %created.id, "daemon warning: {warning}");
                }
                Ok(created.id)
            }
            404 => Err(ContainerError::ImageNotFound(image.to_string())),
            409 => Err(ContainerError::AlreadyExists(name.to_string())),
            status => Err(ContainerError::Daemon {
                status,
                message: daemon_message(&response),
            }),
        }
    }

    async fn start_container(&self, id: &ContainerId) -> Result<(), ContainerError> {
        let url = format!("{}/containers/{}/start", self.endpoint, id);
        let response = self.transport.post(&url, None).await?;
        debug!(status = response.status, container = %id, "started container");

        match response.status {
            // 304 means the container was already started.
            204 | 304 => Ok(()),
            404 => Err(ContainerError::NotFound(id.to_string())),
            status => Err(ContainerError::Daemon {
                status,
                message: daemon_message(&response),
            }),
        }
    }

    async fn container_running(&self, id: &ContainerId) -> Result<bool, ContainerError> {
        let url = format!("{}/containers/{}/json", self.endpoint, id);
        let response = self.transport.get(&url).await?;

        match response.status {
            200 => {
                let status: ContainerStatus = serde_json::from_slice(&response.body)?;
                debug!(container = %id, state = %status.state.status, "inspected container");
                Ok(status.state.status == "running")
            }
            404 => Err(ContainerError::NotFound(id.to_string())),
            status => Err(ContainerError::Daemon {
                status,
                message: daemon_message(&response),
            }),
        }
    }

    async fn create_exec(&self, id: &ContainerId, cmd: &[String]) -> Result<ExecId, ExecError> {
        let url = format!("{}/containers/{}/exec", self.endpoint, id);
        let body = serde_json::to_string(&CreateExecRequest::output_capture(cmd.to_vec()))?;

        let response = self.transport.post(&url, Some(body)).await?;

        match response.status {
            201 => {
                let created: CreateExecResponse = serde_json::from_slice(&response.body)?;
                Ok(created.id)
            }
            404 => Err(ExecError::ContainerNotFound(id.to_string())),
            409 => Err(ExecError::ContainerNotRunning(id.to_string())),
            status => Err(ExecError::Daemon {
                status,
                message: daemon_message(&response),
            }),
        }
    }

    async fn start_exec(&self, id: &ExecId) -> Result<String, ExecError> {
        let url = format!("{}/exec/{}/start", self.endpoint, id);
        let body = serde_json::to_string(&StartExecRequest {
            detach: false,
            tty: true,
        })?;

        let response = self.transport.post(&url, Some(body)).await?;

        match response.status {
            // With tty=true the daemon does not frame the stream, so the
            // body is the command's combined stdout and stderr.
            200 => Ok(response.body_string()),
            404 => Err(ExecError::NotFound(id.to_string())),
            409 => Err(ExecError::ContainerNotRunning(id.to_string())),
            status => Err(ExecError::Daemon {
                status,
                message: daemon_message(&response),
            }),
        }
    }

    async fn stop_container(&self, id: &ContainerId) -> Result<bool, ContainerError> {
        let url = format!("{}/containers/{}/stop", self.endpoint, id);
        let response = self.transport.post(&url, None).await?;
        debug!(status = response.status, container = %id, "stopped container");

        match response.status {
            204 => Ok(true),
            // 304: the container had already stopped.
            304 => Ok(false),
            404 => Err(ContainerError::NotFound(id.to_string())),
            status => Err(ContainerError::Daemon {
                status,
                message: daemon_message(&response),
            }),
        }
    }

    async fn remove_container(&self, id: &ContainerId) -> Result<(), ContainerError> {
        let url = format!("{}/containers/{}", self.endpoint, id);
        let response = self.transport.delete(&url).await?;
        debug!(status = response.status, container = %id, "removed container");

        match response.status {
            204 => Ok(()),
            404 => Err(ContainerError::NotFound(id.to_string())),
            409 => Err(ContainerError::Running(id.to_string())),
            status => Err(ContainerError::Daemon {
                status,
                message: daemon_message(&response),
            }),
        }
    }
}
