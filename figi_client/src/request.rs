//! Request bodies for the mapping and search endpoints.

use crate::models::{Query, SearchRequest};

/// Serializes a batch of mapping jobs into the JSON array the mapping endpoint expects.
///
/// Each element carries only the populated fields of its query, keyed
/// `idType`, `idValue`, `exchCode`, `micCode`, `currency`, `marketSecDes` in that
/// order. Nothing is validated here; the service rejects bad jobs individually.
pub fn serialize(queries: &[Query]) -> Result<String, serde_json::Error> {
    serde_json::to_string(queries)
}

/// Serializes a search request, e.g. `{"query":"APPLE"}`.
pub fn serialize_search(request: &SearchRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdType;
    use proptest::prelude::*;
    use serde_json::{Map, Value, json};

    fn populated_fields(query: &Query) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("idType".into(), json!(query.id_type.as_str()));
        fields.insert("idValue".into(), json!(query.id_value));
        for (key, value) in [
            ("exchCode", &query.exch_code),
            ("micCode", &query.mic_code),
            ("currency", &query.currency),
            ("marketSecDes", &query.market_sec_des),
        ] {
            if let Some(value) = value {
                fields.insert(key.into(), json!(value));
            }
        }
        fields
    }

    #[test]
    fn bare_query_has_exactly_type_and_value() {
        let body = serialize(&[Query::new(IdType::Isin, "US4592001014")]).unwrap();
        assert_eq!(body, r#"[{"idType":"ID_ISIN","idValue":"US4592001014"}]"#);
    }

    #[test]
    fn qualifiers_serialize_in_fixed_order() {
        let query = Query::new(IdType::BbGlobal, "BBG000BLNNH6")
            .with_market_sec_des("Equity")
            .with_currency("USD")
            .with_mic_code("XNYS")
            .with_exch_code("US");
        let body = serialize(&[query]).unwrap();
        assert_eq!(
            body,
            r#"[{"idType":"ID_BB_GLOBAL","idValue":"BBG000BLNNH6","exchCode":"US","micCode":"XNYS","currency":"USD","marketSecDes":"Equity"}]"#
        );
    }

    #[test]
    fn empty_batch_is_empty_array() {
        assert_eq!(serialize(&[]).unwrap(), "[]");
    }

    #[test]
    fn search_body_omits_missing_cursor() {
        let body = serialize_search(&SearchRequest::new("APPLE")).unwrap();
        assert_eq!(body, r#"{"query":"APPLE"}"#);
    }

    fn arb_id_type() -> impl Strategy<Value = IdType> {
        prop_oneof![
            proptest::sample::select(IdType::KNOWN.to_vec()),
            "[A-Z_]{1,12}".prop_map(IdType::from),
        ]
    }

    fn arb_query() -> impl Strategy<Value = Query> {
        (
            arb_id_type(),
            ".{0,16}",
            proptest::option::of("[A-Z]{2}"),
            proptest::option::of("[A-Z]{4}"),
            proptest::option::of("[A-Z]{3}"),
            proptest::option::of("[A-Za-z-]{1,8}"),
        )
            .prop_map(|(id_type, id_value, exch, mic, ccy, sector)| Query {
                id_type,
                id_value,
                exch_code: exch,
                mic_code: mic,
                currency: ccy,
                market_sec_des: sector,
            })
    }

    proptest! {
        #[test]
        fn each_element_holds_exactly_the_populated_fields(
            queries in proptest::collection::vec(arb_query(), 0..8),
        ) {
            let body = serialize(&queries).unwrap();
            let parsed: Vec<Value> = serde_json::from_str(&body).unwrap();
            prop_assert_eq!(parsed.len(), queries.len());
            for (element, query) in parsed.iter().zip(&queries) {
                prop_assert_eq!(element.as_object().unwrap(), &populated_fields(query));
            }
        }
    }
}
