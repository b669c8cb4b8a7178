//! Parsing of mapping and search response bodies.
//!
//! A mapping response is a JSON array with one element per submitted job, in
//! submission order. Each element is exactly one of
//!
//! - `{"data": [ {...}, ... ]}` with zero or more matched instruments,
//! - `{"warning": "..."}` when the job was valid but matched nothing,
//! - `{"error": "..."}` when the service rejected the job.
//!
//! Anything else fails the whole parse. A partially understood response is
//! never returned.

use serde::Deserialize;
use serde_json::Value;
use snafu::{ResultExt, ensure};

use crate::{
    errors::{
        InvalidJsonSnafu, LengthMismatchSnafu, NotAnArraySnafu, ParseError,
        UnexpectedElementSnafu, UnexpectedSearchShapeSnafu,
    },
    models::{QueryResult, ResultRecord, SearchResponse},
};

#[derive(Deserialize)]
struct RawQueryResult {
    error: Option<String>,
    warning: Option<String>,
    data: Option<Vec<ResultRecord>>,
}

#[derive(Deserialize)]
struct RawSearchResponse {
    error: Option<String>,
    data: Option<Vec<ResultRecord>>,
    next: Option<String>,
}

/// What a search call came back with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Page(SearchResponse),
    Error(String),
}

/// Parses a mapping response body into per-job results.
pub fn parse(json_text: &str) -> Result<Vec<QueryResult>, ParseError> {
    let value: Value = serde_json::from_str(json_text).context(InvalidJsonSnafu)?;
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return NotAnArraySnafu {
                found: json_kind(&other),
            }
            .fail();
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| parse_element(index, element))
        .collect()
}

/// Like [`parse`], but also fails when the number of results differs from the
/// number of jobs sent.
pub fn parse_aligned(json_text: &str, expected: usize) -> Result<Vec<QueryResult>, ParseError> {
    let results = parse(json_text)?;
    ensure!(
        results.len() == expected,
        LengthMismatchSnafu {
            expected,
            actual: results.len(),
        }
    );
    Ok(results)
}

/// Parses a search response body.
pub fn parse_search(json_text: &str) -> Result<SearchOutcome, ParseError> {
    let raw: RawSearchResponse = serde_json::from_str(json_text).map_err(|err| {
        UnexpectedSearchShapeSnafu {
            message: err.to_string(),
        }
        .build()
    })?;

    match raw {
        RawSearchResponse {
            error: Some(message),
            data: None,
            ..
        } => Ok(SearchOutcome::Error(message)),
        RawSearchResponse {
            error: None,
            data: Some(data),
            next,
        } => Ok(SearchOutcome::Page(SearchResponse { data, next })),
        RawSearchResponse { error: Some(_), .. } => UnexpectedSearchShapeSnafu {
            message: "both \"error\" and \"data\" are present",
        }
        .fail(),
        RawSearchResponse { error: None, .. } => UnexpectedSearchShapeSnafu {
            message: "neither \"error\" nor \"data\" is present",
        }
        .fail(),
    }
}

fn parse_element(index: usize, element: Value) -> Result<QueryResult, ParseError> {
    let raw: RawQueryResult = serde_json::from_value(element).map_err(|err| {
        UnexpectedElementSnafu {
            index,
            message: err.to_string(),
        }
        .build()
    })?;

    match (raw.error, raw.warning, raw.data) {
        (Some(error), None, None) => Ok(QueryResult::Error(error)),
        (None, Some(warning), None) => Ok(QueryResult::Warning(warning)),
        (None, None, Some(data)) => Ok(QueryResult::Data(data)),
        (None, None, None) => UnexpectedElementSnafu {
            index,
            message: "expected one of \"data\", \"warning\" or \"error\"",
        }
        .fail(),
        _ => UnexpectedElementSnafu {
            index,
            message: "more than one of \"data\", \"warning\" and \"error\" is present",
        }
        .fail(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
