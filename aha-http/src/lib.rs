//! Blocking HTTP transport for the AHA home-automation client
//!
//! This crate provides the minimal piece of HTTP plumbing the command layer
//! needs: issue a GET with an ordered list of query parameters and hand back
//! the status code together with the full response body. Status handling is
//! left to the caller so that every non-2xx answer can be mapped onto the
//! caller's own error type.

mod error;

pub use error::TransportError;

use std::time::Duration;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform a blocking GET request
///
/// The session layer is generic over this trait so tests can substitute an
/// in-memory transport and applications can plug in their own timeouts or
/// TLS setup.
pub trait HttpTransport {
    /// Send a GET to `url` with the given query parameters, in order.
    ///
    /// A response with a non-2xx status is still `Ok`; only failures to
    /// obtain a response at all are errors.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        (**self).get(url, query)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        (**self).get(url, query)
    }
}

/// Default transport backed by a `ureq` agent
#[derive(Debug, Clone)]
pub struct AhaHttpClient {
    agent: ureq::Agent,
}

impl AhaHttpClient {
    /// Create a client with a 5 second connect and 10 second read timeout
    pub fn new() -> Self {
        Self::with_timeouts(Duration::from_secs(5), Duration::from_secs(10))
    }

    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .build(),
        }
    }

    /// Wrap an agent that was configured elsewhere (proxy, custom TLS, ...)
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for AhaHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for AhaHttpClient {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let mut request = self.agent.get(url);
        for (name, value) in query {
            request = request.query(name, value);
        }

        let response = match request.call() {
            Ok(response) => response,
            // ureq reports 4xx/5xx as errors; the caller decides what they mean
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(e)) => {
                tracing::debug!(url, error = %e, "HTTP transport failure");
                return Err(TransportError::Network(e.to_string()));
            }
        };

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
