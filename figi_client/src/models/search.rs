use serde::{Deserialize, Serialize};

use crate::models::ResultRecord;

/// Body of a `/v3/search` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text search, e.g. `"APPLE"`.
    pub query: String,

    /// Pagination cursor taken from a previous response's `next`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            start: None,
        }
    }

    /// The request for the page after `response`, if there is one.
    pub fn next_page(&self, response: &SearchResponse) -> Option<Self> {
        response.next.as_ref().map(|cursor| Self {
            query: self.query.clone(),
            start: Some(cursor.clone()),
        })
    }
}

/// Parsed `/v3/search` response: one page of matches plus an optional cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub data: Vec<ResultRecord>,
    pub next: Option<String>,
}
