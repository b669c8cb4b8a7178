use serde::{Deserialize, Serialize};

use crate::models::IdType;

/// One mapping job: an identifier plus optional qualifiers that narrow the match.
///
/// Only `id_type` and `id_value` are required. Unset qualifiers are left out of
/// the serialized object entirely, and field order on the wire follows the
/// declaration order below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Kind of identifier in `id_value` (e.g. `ID_ISIN`).
    pub id_type: IdType,

    /// The identifier itself (e.g. `"US4592001014"`).
    pub id_value: String,

    /// Exchange code such as `"US"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exch_code: Option<String>,

    /// ISO 10383 market identifier code such as `"XNYS"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mic_code: Option<String>,

    /// Currency of the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Market sector description (e.g. `"Equity"`, `"Govt"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_sec_des: Option<String>,
}

impl Query {
    pub fn new(id_type: impl Into<IdType>, id_value: impl Into<String>) -> Self {
        Self {
            id_type: id_type.into(),
            id_value: id_value.into(),
            exch_code: None,
            mic_code: None,
            currency: None,
            market_sec_des: None,
        }
    }

    pub fn with_exch_code(self, exch_code: impl Into<String>) -> Self {
        Self {
            exch_code: Some(exch_code.into()),
            ..self
        }
    }

    pub fn with_mic_code(self, mic_code: impl Into<String>) -> Self {
        Self {
            mic_code: Some(mic_code.into()),
            ..self
        }
    }

    pub fn with_currency(self, currency: impl Into<String>) -> Self {
        Self {
            currency: Some(currency.into()),
            ..self
        }
    }

    pub fn with_market_sec_des(self, market_sec_des: impl Into<String>) -> Self {
        Self {
            market_sec_des: Some(market_sec_des.into()),
            ..self
        }
    }
}
