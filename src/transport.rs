//! The HTTP collaborator seam.
//!
//! The client talks to the network through the [`Transport`] trait so tests
//! can substitute a spy and callers can bring their own HTTP stack.
//! [`HttpTransport`] is the default implementation on top of
//! `reqwest::blocking`.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A blocking HTTP POST collaborator.
///
/// Implementations send `body` as JSON to `url` with the given
/// `Authorization` header value and return the raw response body. Non-success
/// responses and connection failures are reported as
/// [`Error::Transport`](crate::Error::Transport); the client performs no
/// retries on top.
pub trait Transport {
    /// POST `body` to `url` and return the response body verbatim.
    fn post(&self, url: &str, auth_header: &str, body: &Value) -> Result<String>;
}

/// Default transport backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build the transport with a default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, auth_header: &str, body: &Value) -> Result<String> {
        debug!(%url, "sending POST request");
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, auth_header)
            .json(body)
            .send()?
            .error_for_status()?;
        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_builds() {
        assert!(HttpTransport::new().is_ok());
    }
}
