//! HTTP transport.
//!
//! The single outbound capability of this crate: one authenticated GET
//! against the configured controller, returning the raw response body.
//! The client issues requests strictly in sequence and never retries; a
//! network error or non-2xx status is surfaced unchanged to the caller.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised at the transport boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or its body could not be read.
    #[error("request to {url} failed: {source}")]
    Request {
        /// The full request URL.
        url: String,
        /// The underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The controller answered with a non-success status.
    #[error("controller returned {status} for {url}")]
    Status {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The full request URL.
        url: String,
    },
}

/// One authenticated GET against the controller.
pub trait Transport {
    /// Performs `GET <base>/<path>?<query>` and returns the raw body.
    fn get(
        &self,
        path: &str,
        query: &str,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// `reqwest`-backed transport with HTTP basic authentication.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpTransport {
    /// Creates a transport for the given controller base URL and credentials.
    ///
    /// A trailing slash on `base_url` is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TransportError::Build)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            http,
            base_url,
            username: username.into(),
            password: password.into(),
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &str) -> Result<String, TransportError> {
        let url = format!("{}{path}?{query}", self.base_url);
        debug!(%url, "controller GET");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { status, url });
        }

        response
            .text()
            .await
            .map_err(|source| TransportError::Request { url, source })
    }
}
