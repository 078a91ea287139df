// ABOUTME: Shared test doubles: a canned-response transport and a scripted daemon.
// ABOUTME: Lets tests drive status-code mapping and orchestration without a daemon.

// Each test binary only uses some of these helpers, so allow dead_code.
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use dockman::daemon::{ContainerError, DockerApi, ExecError, ImageError};
use dockman::transport::{HttpResponse, HttpTransport, TransportError};
use dockman::types::{ContainerId, ExecId, ImageRef};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A request the stub transport saw.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

/// Transport double that replays canned responses and records requests.
pub struct StubTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn single(status: u16, body: &str) -> Self {
        Self::new(vec![HttpResponse {
            status,
            body: Bytes::from(body.to_string()),
        }])
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn reply(&self, method: &'static str, url: &str, body: Option<String>) -> HttpResponse {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("stub transport ran out of canned responses")
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        Ok(self.reply("GET", url, None))
    }

    async fn post(
        &self,
        url: &str,
        json_body: Option<String>,
    ) -> Result<HttpResponse, TransportError> {
        Ok(self.reply("POST", url, json_body))
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse, TransportError> {
        Ok(self.reply("DELETE", url, None))
    }
}

/// Scripted daemon double for orchestration tests.
///
/// Every call is recorded by name so tests can assert ordering; a handful of
/// switches inject failures at specific steps.
pub struct ScriptedDocker {
    /// Report running from the nth poll onward (0-based); `None` means never.
    pub running_after: Option<usize>,
    /// Fail `container_running` with a generic daemon error.
    pub fail_poll: bool,
    /// Fail `create_exec` with a generic daemon error.
    pub fail_exec: bool,
    /// Fail `stop_container` with a not-found error.
    pub fail_stop: bool,
    polls: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl ScriptedDocker {
    pub fn new() -> Self {
        Self {
            running_after: Some(0),
            fail_poll: false,
            fail_exec: false,
            fail_stop: false,
            polls: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn never_running(mut self) -> Self {
        self.running_after = None;
        self
    }

    pub fn with_fail_exec(mut self) -> Self {
        self.fail_exec = true;
        self
    }

    pub fn with_fail_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn poll_count(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

impl Default for ScriptedDocker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DockerApi for ScriptedDocker {
    async fn image_exists(&self, _image: &ImageRef) -> Result<bool, ImageError> {
        self.record("image_exists");
        Ok(true)
    }

    async fn pull_image(&self, _image: &ImageRef, _platform: &str) -> Result<(), ImageError> {
        self.record("pull_image");
        Ok(())
    }

    async fn create_container(
        &self,
        _name: &str,
        _image: &ImageRef,
        _cmd: &[String],
    ) -> Result<ContainerId, ContainerError> {
        self.record("create_container");
        Ok(ContainerId::new("c1".to_string()))
    }

    async fn start_container(&self, _id: &ContainerId) -> Result<(), ContainerError> {
        self.record("start_container");
        Ok(())
    }

    async fn container_running(&self, _id: &ContainerId) -> Result<bool, ContainerError> {
        self.record("container_running");
        let poll = self.polls.fetch_add(1, Ordering::SeqCst);
        if self.fail_poll {
            return Err(ContainerError::Daemon {
                status: 500,
                message: "scripted poll failure".to_string(),
            });
        }
        Ok(self.running_after.is_some_and(|n| poll >= n))
    }

    async fn create_exec(
        &self,
        _id: &ContainerId,
        _cmd: &[String],
    ) -> Result<ExecId, ExecError> {
        self.record("create_exec");
        if self.fail_exec {
            return Err(ExecError::Daemon {
                status: 500,
                message: "scripted exec failure".to_string(),
            });
        }
        Ok(ExecId::new("e1".to_string()))
    }

    async fn start_exec(&self, _id: &ExecId) -> Result<String, ExecError> {
        self.record("start_exec");
        Ok("probe output\n".to_string())
    }

    async fn stop_container(&self, _id: &ContainerId) -> Result<bool, ContainerError> {
        self.record("stop_container");
        if self.fail_stop {
            return Err(ContainerError::NotFound("c1".to_string()));
        }
        Ok(true)
    }

    async fn remove_container(&self, _id: &ContainerId) -> Result<(), ContainerError> {
        self.record("remove_container");
        Ok(())
    }
}
