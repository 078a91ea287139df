// ABOUTME: HTTP transport trait and hyper-based implementation.
// ABOUTME: Issues GET/POST/DELETE and returns raw status plus body.

use super::error::{BodySnafu, RequestSnafu, SendSnafu, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Method, Request};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use snafu::ResultExt;

/// A raw daemon response: the status code and the unparsed body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    /// Response body as a lossy UTF-8 string.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Minimal HTTP verbs the daemon client needs.
///
/// A `Some` body on [`HttpTransport::post`] is JSON and carries the
/// `Content-Type: application/json` header.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    async fn post(
        &self,
        url: &str,
        json_body: Option<String>,
    ) -> Result<HttpResponse, TransportError>;

    async fn delete(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Production transport: a pooled hyper HTTP/1 client over TCP.
pub struct HyperTransport {
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HyperTransport {
    pub fn new() -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    async fn run_request(
        &self,
        method: Method,
        url: &str,
        json_body: Option<String>,
    ) -> Result<HttpResponse, TransportError> {
        let mut builder = Request::builder().method(method).uri(url);
        if json_body.is_some() {
            builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let body = Full::new(json_body.map(Bytes::from).unwrap_or_default());
        let request = builder.body(body).context(RequestSnafu { url })?;

        let response = self
            .client
            .request(request)
            .await
            .context(SendSnafu { url })?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .collect()
            .await
            .context(BodySnafu { url })?
            .to_bytes();

        Ok(HttpResponse { status, body })
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for HyperTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.run_request(Method::GET, url, None).await
    }

    async fn post(
        &self,
        url: &str,
        json_body: Option<String>,
    ) -> Result<HttpResponse, TransportError> {
        self.run_request(Method::POST, url, json_body).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.run_request(Method::DELETE, url, None).await
    }
}
