//! Identifier-type codes accepted by the mapping endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_types {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// The kind of security identifier carried by a [`Query`](crate::models::Query).
        ///
        /// Known codes get their own variant; anything else is kept verbatim in
        /// [`IdType::Other`] and forwarded untouched. Rejecting unknown codes is
        /// left to the service.
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum IdType {
            $($variant,)+
            Other(String),
        }

        impl IdType {
            /// Every known identifier type, in the service's documented order.
            pub const KNOWN: &'static [IdType] = &[$(IdType::$variant),+];

            /// The wire code for this identifier type (e.g. `"ID_ISIN"`).
            pub fn as_str(&self) -> &str {
                match self {
                    $(IdType::$variant => $code,)+
                    IdType::Other(code) => code,
                }
            }
        }

        impl From<&str> for IdType {
            fn from(code: &str) -> Self {
                match code {
                    $($code => IdType::$variant,)+
                    other => IdType::Other(other.to_string()),
                }
            }
        }
    };
}

id_types! {
    Isin => "ID_ISIN",
    BbUnique => "ID_BB_UNIQUE",
    Sedol => "ID_SEDOL",
    Common => "ID_COMMON",
    Wertpapier => "ID_WERTPAPIER",
    Cusip => "ID_CUSIP",
    Cins => "ID_CINS",
    Bb => "ID_BB",
    Italy => "ID_ITALY",
    ExchSymbol => "ID_EXCH_SYMBOL",
    FullExchangeSymbol => "ID_FULL_EXCHANGE_SYMBOL",
    CompositeBbGlobal => "COMPOSITE_ID_BB_GLOBAL",
    BbGlobalShareClassLevel => "ID_BB_GLOBAL_SHARE_CLASS_LEVEL",
    BbGlobal => "ID_BB_GLOBAL",
    BbSecNumDes => "ID_BB_SEC_NUM_DES",
    Ticker => "TICKER",
    Cusip8Chr => "ID_CUSIP_8_CHR",
    OccSymbol => "OCC_SYMBOL",
    UniqueIdFutOpt => "UNIQUE_ID_FUT_OPT",
    OpraSymbol => "OPRA_SYMBOL",
    TradingSystemIdentifier => "TRADING_SYSTEM_IDENTIFIER",
}

impl From<String> for IdType {
    fn from(code: String) -> Self {
        IdType::from(code.as_str())
    }
}

impl From<IdType> for String {
    fn from(id_type: IdType) -> Self {
        match id_type {
            IdType::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
