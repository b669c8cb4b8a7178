//! Mapping results as returned by the service.

use serde::{Deserialize, Serialize};

/// A single instrument matched by the service.
///
/// Every field is optional: the service omits keys it has no value for, and
/// unknown keys are ignored so newer responses still parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_type2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "uniqueID", default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exch_code: Option<String>,
    #[serde(rename = "shareClassFIGI", default, skip_serializing_if = "Option::is_none")]
    pub share_class_figi: Option<String>,
    #[serde(rename = "compositeFIGI", default, skip_serializing_if = "Option::is_none")]
    pub composite_figi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_description: Option<String>,
    #[serde(rename = "uniqueIDFutOpt", default, skip_serializing_if = "Option::is_none")]
    pub unique_id_fut_opt: Option<String>,
}

impl ResultRecord {
    /// Populated fields as `(wire key, value)` pairs, in a fixed order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("figi", &self.figi),
            ("securityType", &self.security_type),
            ("marketSector", &self.market_sector),
            ("ticker", &self.ticker),
            ("name", &self.name),
            ("uniqueID", &self.unique_id),
            ("exchCode", &self.exch_code),
            ("shareClassFIGI", &self.share_class_figi),
            ("compositeFIGI", &self.composite_figi),
            ("securityType2", &self.security_type2),
            ("securityDescription", &self.security_description),
            ("uniqueIDFutOpt", &self.unique_id_fut_opt),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

/// Outcome of one mapping job, index-aligned with the submitted queries.
///
/// Exactly one variant is ever present, so a result can't carry both an
/// error and data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryResult {
    /// The service rejected this job (bad identifier type, malformed value, ...).
    Error(String),
    /// The job was well-formed but matched nothing.
    Warning(String),
    /// Zero or more matching instruments.
    Data(Vec<ResultRecord>),
}

impl QueryResult {
    pub fn records(&self) -> &[ResultRecord] {
        match self {
            QueryResult::Data(records) => records,
            QueryResult::Error(_) | QueryResult::Warning(_) => &[],
        }
    }

    /// The error or warning text, if this job didn't produce data.
    pub fn message(&self) -> Option<&str> {
        match self {
            QueryResult::Error(message) | QueryResult::Warning(message) => Some(message),
            QueryResult::Data(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryResult::Error(_))
    }
}
