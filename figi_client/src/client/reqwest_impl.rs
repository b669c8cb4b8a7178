use std::time::Duration;

use reqwest::blocking::Client;
use snafu::ResultExt;

use super::transport::{HttpResponse, PreparedRequest, Transport};
use crate::errors::{BodySnafu, ClientBuildSnafu, InitError, RequestSnafu, TransportError};

/// Blocking HTTPS transport backed by `reqwest::blocking`.
///
/// Must not be used from inside an async runtime; the blocking client spins up
/// its own.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport. `None` disables the request timeout entirely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, InitError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context(ClientBuildSnafu)?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &PreparedRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .post(request.url.clone())
            .body(request.body.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().context(RequestSnafu)?;
        let status = response.status().as_u16();
        let body = response.text().context(BodySnafu)?;

        Ok(HttpResponse { status, body })
    }
}
