use std::fmt;

use url::Url;

use crate::errors::TransportError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-OPENFIGI-APIKEY";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// A fully composed POST request, ready to hand to a [`Transport`].
#[derive(Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PreparedRequest {
    /// First value of the named header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case(API_KEY_HEADER) {
                    (key.as_str(), "[REDACTED]")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("PreparedRequest")
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// Status and full body of a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP transport used by [`ApiClient`](super::ApiClient).
///
/// Implementations send the request as-is and return whatever the server
/// answered, whatever the status. Only failures to talk to the server at all
/// are errors.
pub trait Transport {
    fn send(&self, request: &PreparedRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &PreparedRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

/// Reason phrases for the statuses the service documents.
pub fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "request body is not an array",
        401 => "invalid API key",
        404 => "invalid URL path",
        405 => "invalid HTTP method",
        406 => "unsupported Content-Type",
        413 => "too many mapping jobs in request",
        429 => "too many requests",
        500 => "internal server error",
        _ => "unexpected status",
    }
}
