use crate::error::TransportError;
use crate::transport::{Response, Transport};
use reqwest::Method;
use reqwest::blocking::Client;
use url::Url;

/// Blocking HTTP transport backed by `reqwest`
///
/// Makes a single attempt per request, with no retry.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    fn request(&self, method: &str, url: &str) -> Result<Response, TransportError> {
        let parsed_url = Url::parse(url).map_err(|e| TransportError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| TransportError::InvalidMethod(method.to_string()))?;

        ::log::debug!("Sending {} request to {}", method, parsed_url);

        let response = self
            .client
            .request(method, parsed_url)
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = i32::from(response.status().as_u16());
        let body = response
            .text()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        ::log::debug!("Received status {} with {} bytes", status, body.len());

        Ok(Response::new(status, body))
    }
}
