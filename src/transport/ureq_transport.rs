//! Real HTTP transport using ureq
//!
//! Synchronous blocking HTTP client.

use std::io::Read;

use tracing::debug;

use crate::transport::types::{HttpResponse, SyncTransport, TransportError};

/// Real HTTP transport using ureq
#[derive(Debug, Clone)]
pub struct UreqTransport {
    /// Timeout in seconds for requests
    timeout: u64,
}

impl UreqTransport {
    /// Create new transport with default timeout (30s)
    pub fn new() -> Self {
        Self { timeout: 30 }
    }

    /// Create transport with custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            timeout: timeout_secs,
        }
    }

    fn send(
        &self,
        request: ureq::Request,
        body: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        let result = match body {
            Some(payload) => request.send_string(payload),
            None => request.call(),
        };

        // ureq reports 4xx/5xx as Error::Status; fold those back into
        // a plain response so callers see the status and body.
        match result {
            Ok(response) => read_response(response),
            Err(ureq::Error::Status(_, response)) => read_response(response),
            Err(ureq::Error::Transport(err)) => Err(TransportError::Network(err.to_string())),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncTransport for UreqTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        debug!(%url, "GET");
        let mut request =
            ureq::request("GET", url).timeout(std::time::Duration::from_secs(self.timeout));

        for (key, value) in headers {
            request = request.set(key, value);
        }

        self.send(request, None)
    }

    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, TransportError> {
        debug!(%url, body_len = body.len(), "POST");
        let mut request =
            ureq::request("POST", url).timeout(std::time::Duration::from_secs(self.timeout));

        for (key, value) in headers {
            request = request.set(key, value);
        }

        self.send(request, Some(body))
    }
}

fn read_response(response: ureq::Response) -> Result<HttpResponse, TransportError> {
    let status = response.status();
    let mut body = String::new();
    response.into_reader().read_to_string(&mut body)?;
    Ok(HttpResponse { status, body })
}
