//! Blocking client for the OpenFIGI identifier-mapping API.
//!
//! - [`models`]: queries, result records and search types.
//! - [`request`] / [`response`]: JSON bodies in and out.
//! - [`client`]: [`ApiClient`](client::ApiClient) and the [`Transport`](client::Transport) seam.
//! - [`config`]: API key, base URL and endpoint paths.
//! - [`printer`]: text rendering used by the `figi` binary.

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod printer;
pub mod request;
pub mod response;
