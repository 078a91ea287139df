// ABOUTME: Transport error types with SNAFU pattern.
// ABOUTME: Covers connection-level failures; HTTP status codes are not errors here.

use snafu::Snafu;

/// Errors from the HTTP transport.
///
/// Any response from the daemon, whatever its status code, is a successful
/// round-trip at this layer. Only failures to build, send, or read the
/// exchange surface as `TransportError`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TransportError {
    #[snafu(display("failed to build request for {url}: {source}"))]
    Request {
        url: String,
        source: hyper::http::Error,
    },

    #[snafu(display("request to {url} failed: {source}"))]
    Send {
        url: String,
        source: hyper_util::client::legacy::Error,
    },

    #[snafu(display("failed to read response body from {url}: {source}"))]
    Body { url: String, source: hyper::Error },
}
