use std::{fs, io::Read};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::models::Query;

use super::commands::BatchSource;

/// Loads the batch of mapping jobs from the chosen source.
pub fn load_batch(source: BatchSource, input: Option<&str>) -> Result<Vec<Query>> {
    match source {
        BatchSource::File => {
            let Some(file_path) = input else {
                bail!("File path required for source=file");
            };
            parse_batch_params_from_file(file_path)
        }
        BatchSource::Json => {
            let Some(json_str) = input else {
                bail!("JSON string required for source=json");
            };
            parse_batch_params_from_json_string(json_str)
        }
        BatchSource::Stdin => parse_batch_params_from_stdin(),
    }
}

pub fn parse_batch_params_from_stdin() -> Result<Vec<Query>> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read batch from stdin")?;
    parse_batch_params_from_json_string(&buffer)
}

pub fn parse_batch_params_from_file(file_path: &str) -> Result<Vec<Query>> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read batch file {file_path}"))?;
    parse_batch_params_from_json_string(&content)
}

pub fn parse_batch_params_from_json_string(json_str: &str) -> Result<Vec<Query>> {
    let json_value: Value = serde_json::from_str(json_str).context("Batch input is not valid JSON")?;
    parse_batch_params_from_json_value(json_value)
}

/// Accepts either a JSON array of jobs or a single job object.
pub fn parse_batch_params_from_json_value(json_value: Value) -> Result<Vec<Query>> {
    let queries = match json_value {
        Value::Array(_) => serde_json::from_value(json_value),
        Value::Object(_) => serde_json::from_value(json_value).map(|query| vec![query]),
        other => bail!("Expected a JSON array of mapping jobs, found {other}"),
    }
    .context("Mapping jobs need at least \"idType\" and \"idValue\"")?;

    Ok(queries)
}
