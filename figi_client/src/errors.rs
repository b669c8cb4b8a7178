use snafu::{Backtrace, Snafu};

/// Failures inside a [`Transport`](crate::client::Transport) implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TransportError {
    /// The request could not be sent (DNS, connect, TLS, reset, timeout).
    #[snafu(display("HTTP POST request failed: {source}"))]
    Request { source: reqwest::Error },

    /// The response started but its body could not be read to the end.
    #[snafu(display("Failed to read response body: {source}"))]
    Body { source: reqwest::Error },

    /// Any other transport failure, for custom transports.
    #[snafu(display("{message}"))]
    Other { message: String },
}

/// The response text doesn't have the shape the mapping or search endpoint promises.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ParseError {
    #[snafu(display("Response is not valid JSON: {source}"))]
    InvalidJson {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Expected a JSON array of results, found {found}"))]
    NotAnArray {
        found: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Result {index} matches no known result shape: {message}"))]
    UnexpectedElement {
        index: usize,
        message: String,
        backtrace: Backtrace,
    },

    #[snafu(display("Sent {expected} mapping jobs but received {actual} results"))]
    LengthMismatch {
        expected: usize,
        actual: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Search response has an unexpected shape: {message}"))]
    UnexpectedSearchShape {
        message: String,
        backtrace: Backtrace,
    },
}

/// Errors that can occur during the creation of a client instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum InitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// API key contains invalid characters.
    #[snafu(display("Invalid API key format: {source}"))]
    InvalidApiKey {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// The unified error type for calls made through [`ApiClient`](crate::client::ApiClient).
///
/// Every variant aborts the whole call. A job the service rejects is not an
/// error at this level; it comes back as
/// [`QueryResult::Error`](crate::models::QueryResult::Error) in its slot.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ClientError {
    /// The connection could not be established or the transfer was interrupted.
    #[snafu(display("Network error: {source}"))]
    Network {
        source: TransportError,
        backtrace: Backtrace,
    },

    /// Base URL and path don't compose into a valid URI.
    #[snafu(display("Invalid URI {uri:?}: {source}"))]
    InvalidUri {
        uri: String,
        source: url::ParseError,
        backtrace: Backtrace,
    },

    /// The queries could not be serialized.
    #[snafu(display("Failed to serialize request: {source}"))]
    MalformedRequest {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// The body could not be interpreted; nothing in it is trusted.
    #[snafu(display("Malformed response: {source}"))]
    MalformedResponse { source: ParseError },

    /// A non-2xx status whose body isn't a result payload.
    #[snafu(display("HTTP {status} ({reason}): {body}"))]
    UnexpectedStatus {
        status: u16,
        reason: &'static str,
        body: String,
    },

    /// The service answered a search with an error message.
    #[snafu(display("API error: {message}"))]
    Api { message: String },

    /// An error during client configuration or initialization.
    #[snafu(display("Client initialization error: {source}"))]
    Init {
        #[snafu(backtrace)]
        source: InitError,
    },
}
