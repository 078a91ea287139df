// ABOUTME: HTTP transport layer for talking to the daemon.
// ABOUTME: Exposes the HttpTransport trait and the hyper implementation.

mod error;
mod http;

pub use error::TransportError;
pub use http::{HttpResponse, HttpTransport, HyperTransport};
