pub mod http;

use crate::error::TransportError;

pub use http::HttpTransport;

/// Default HTTP method for a fetch
pub const DEFAULT_METHOD: &str = "GET";

/// A completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code exactly as reported by the transport
    pub status: i32,

    /// Response body decoded as text
    pub body: String,
}

impl Response {
    pub fn new(status: i32, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

// Base trait for anything that can perform a single request
pub trait Transport {
    /// Perform one request and return the status code and body.
    ///
    /// Connection, DNS, TLS and URL errors are reported as [`TransportError`]
    /// rather than as a response.
    fn request(&self, method: &str, url: &str) -> Result<Response, TransportError>;
}
