//! HTTP transport types and the blocking transport.
//!
//! # Design
//! Requests and responses are plain data. `ScoreClient` builds an
//! `HttpRequest`, hands it to a `Transport`, and interprets the returned
//! `HttpResponse` itself. The transport never judges status codes: a 500 is
//! a successful round-trip as far as it is concerned. Bodies stay raw bytes
//! so that a non-UTF-8 error page still reaches the status fallback.

use tracing::debug;

use crate::error::ScoreError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes one `HttpRequest` and returns the raw response.
///
/// Implementations must return non-2xx responses as `Ok` and reserve `Err`
/// for failures where no response was obtained.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ScoreError>;
}

/// Blocking transport backed by a `ureq::Agent`.
///
/// No timeout, custom headers, retries, or body size limit are configured.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ScoreError> {
        let mut response = self.agent.get(&request.url).call()?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;
        debug!(url = %request.url, status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}
