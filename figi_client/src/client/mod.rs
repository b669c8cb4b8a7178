//! Blocking client for the mapping and search endpoints.
//!
//! [`ApiClient`] owns the resolved configuration and a [`Transport`]. The
//! low-level [`ApiClient::post`] sends arbitrary JSON text and hands back the
//! raw body; [`ApiClient::map`] and [`ApiClient::search_page`] add request
//! serialization and response parsing on top.
//!
//! ```no_run
//! use figi_client::{client::ApiClient, config::ClientConfig, models::{IdType, Query}};
//!
//! let client = ApiClient::new(ClientConfig::from_env())?;
//! let results = client.map(&[Query::new(IdType::Isin, "US4592001014")])?;
//! for result in &results {
//!     println!("{}", figi_client::printer::render_result(result));
//! }
//! # Ok::<(), figi_client::errors::ClientError>(())
//! ```

mod reqwest_impl;
mod transport;

pub use reqwest_impl::ReqwestTransport;
pub use transport::{
    API_KEY_HEADER, CONTENT_TYPE_HEADER, HttpResponse, PreparedRequest, Transport, status_reason,
};

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::ClientConfig,
    errors::{
        ApiSnafu, ClientError, InitSnafu, InvalidApiKeySnafu, InvalidUriSnafu,
        MalformedRequestSnafu, MalformedResponseSnafu, NetworkSnafu, UnexpectedStatusSnafu,
    },
    models::{Query, QueryResult, SearchRequest, SearchResponse},
    request,
    response::{self, SearchOutcome},
};

/// Client for the OpenFIGI API, generic over how requests are sent.
#[derive(Debug)]
pub struct ApiClient<T = ReqwestTransport> {
    base_url: Url,
    mapping_path: String,
    search_path: String,
    api_key: Option<SecretString>,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Builds a client that talks HTTPS through `reqwest`.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.timeout).context(InitSnafu)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Builds a client around any transport, e.g. a recording fake in tests.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).context(InvalidUriSnafu {
            uri: config.base_url.as_str(),
        })?;

        let api_key = config
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty());
        if let Some(key) = &api_key {
            HeaderValue::from_str(key.expose_secret())
                .context(InvalidApiKeySnafu)
                .context(InitSnafu)?;
        }

        Ok(Self {
            base_url,
            mapping_path: config.mapping_path,
            search_path: config.search_path,
            api_key,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Composes the request `post` would send, without sending it.
    pub fn prepare(&self, path: &str, json_body: &str) -> Result<PreparedRequest, ClientError> {
        let url = self
            .base_url
            .join(path)
            .context(InvalidUriSnafu { uri: path })?;

        let mut headers = vec![(
            CONTENT_TYPE_HEADER.to_string(),
            "application/json".to_string(),
        )];
        if let Some(key) = &self.api_key {
            headers.push((API_KEY_HEADER.to_string(), key.expose_secret().to_string()));
        }

        Ok(PreparedRequest {
            url,
            headers,
            body: json_body.to_string(),
        })
    }

    /// POSTs `json_body` to `path` and returns status and body.
    pub fn post_raw(&self, path: &str, json_body: &str) -> Result<HttpResponse, ClientError> {
        let request = self.prepare(path, json_body)?;
        debug!(
            url = %request.url,
            bytes = request.body.len(),
            authenticated = self.api_key.is_some(),
            "sending POST"
        );

        let response = self.transport.send(&request).context(NetworkSnafu)?;
        if !response.is_success() {
            warn!(
                url = %request.url,
                status = response.status,
                reason = status_reason(response.status),
                "non-success status"
            );
        }
        Ok(response)
    }

    /// POSTs `json_body` to `path` and returns the body, whatever the status.
    pub fn post(&self, path: &str, json_body: &str) -> Result<String, ClientError> {
        self.post_raw(path, json_body).map(|response| response.body)
    }

    /// Sends `{"query": query_text}` to the search endpoint and returns the raw body.
    pub fn search(&self, query_text: &str) -> Result<String, ClientError> {
        let body = request::serialize_search(&SearchRequest::new(query_text))
            .context(MalformedRequestSnafu)?;
        self.post(&self.search_path, &body)
    }

    /// Runs one search page and parses the result.
    pub fn search_page(&self, search: &SearchRequest) -> Result<SearchResponse, ClientError> {
        let body = request::serialize_search(search).context(MalformedRequestSnafu)?;
        let http_response = self.post_raw(&self.search_path, &body)?;

        match response::parse_search(&http_response.body) {
            Ok(SearchOutcome::Page(page)) => Ok(page),
            Ok(SearchOutcome::Error(message)) => ApiSnafu { message }.fail(),
            Err(_) if !http_response.is_success() => unexpected_status(http_response),
            Err(source) => Err(source).context(MalformedResponseSnafu),
        }
    }

    /// Maps a batch of queries in a single request.
    ///
    /// The returned results line up with `queries` index for index. Jobs the
    /// service rejects come back as [`QueryResult::Error`] without failing the
    /// batch; a response that can't be read as exactly one result per job fails
    /// the whole call.
    pub fn map(&self, queries: &[Query]) -> Result<Vec<QueryResult>, ClientError> {
        if queries.is_empty() {
            return Ok(Vec::new());
        }

        let body = request::serialize(queries).context(MalformedRequestSnafu)?;
        debug!(jobs = queries.len(), path = %self.mapping_path, "mapping batch");
        let http_response = self.post_raw(&self.mapping_path, &body)?;

        let results = match response::parse_aligned(&http_response.body, queries.len()) {
            Ok(results) => results,
            Err(_) if !http_response.is_success() => return unexpected_status(http_response),
            Err(source) => return Err(source).context(MalformedResponseSnafu),
        };

        for (index, result) in results.iter().enumerate() {
            if let QueryResult::Error(message) = result {
                warn!(index, id_value = %queries[index].id_value, error = %message, "mapping job rejected");
            }
        }
        Ok(results)
    }
}

fn unexpected_status<R>(response: HttpResponse) -> Result<R, ClientError> {
    UnexpectedStatusSnafu {
        status: response.status,
        reason: status_reason(response.status),
        body: response.body,
    }
    .fail()
}
