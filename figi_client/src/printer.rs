//! Plain-text rendering of results for the command-line driver.

use std::fmt::Write;

use crate::models::{Query, QueryResult, ResultRecord, SearchResponse};

/// Renders one result: the error or warning text prefixed with `error: ` or
/// `warning: `, or each record as `key: value` lines with a blank line between
/// records.
pub fn render_result(result: &QueryResult) -> String {
    match result {
        QueryResult::Error(message) => format!("error: {message}"),
        QueryResult::Warning(message) => format!("warning: {message}"),
        QueryResult::Data(records) => render_records(records),
    }
}

/// Renders a mapping batch, each result under a header naming its query.
pub fn render_batch(queries: &[Query], results: &[QueryResult]) -> String {
    let mut out = String::new();
    for (index, (query, result)) in queries.iter().zip(results).enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "== [{index}] {}", describe_query(query));
        let body = render_result(result);
        if !body.is_empty() {
            let _ = writeln!(out, "{body}");
        }
    }
    out
}

/// Renders a search page, followed by the cursor for the next page if any.
pub fn render_search(response: &SearchResponse) -> String {
    let mut out = render_records(&response.data);
    if let Some(next) = &response.next {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        let _ = write!(out, "next: {next}");
    }
    out
}

/// One-line batch summary. Jobs that matched nothing are counted apart from
/// both successes and failures.
pub fn render_summary(results: &[QueryResult]) -> String {
    let (mut succeeded, mut no_match, mut failed) = (0, 0, 0);
    for result in results {
        match result {
            QueryResult::Data(_) => succeeded += 1,
            QueryResult::Warning(_) => no_match += 1,
            QueryResult::Error(_) => failed += 1,
        }
    }
    format!("SUMMARY: {succeeded} succeeded, {no_match} no match, {failed} failed")
}

fn render_records(records: &[ResultRecord]) -> String {
    records
        .iter()
        .map(|record| {
            record
                .fields()
                .into_iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn describe_query(query: &Query) -> String {
    let mut description = format!("{} {}", query.id_type, query.id_value);
    for (key, value) in [
        ("exchCode", &query.exch_code),
        ("micCode", &query.mic_code),
        ("currency", &query.currency),
        ("marketSecDes", &query.market_sec_des),
    ] {
        if let Some(value) = value {
            let _ = write!(description, " {key}={value}");
        }
    }
    description
}
