// File: crates/job-data/src/table.rs
// Summary: Header-validated CSV → typed row deserialization.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::DataError;

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(true).trim(csv::Trim::All);
    b
}

/// Fail with `MissingColumn` for the first of `required` absent from `headers`.
pub fn require_columns(headers: &csv::StringRecord, required: &[&str], origin: &str) -> Result<(), DataError> {
    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn { origin: origin.to_string(), column: column.to_string() });
        }
    }
    Ok(())
}

fn collect_rows<T, R>(mut rdr: csv::Reader<R>, origin: &str, required: &[&str]) -> Result<Vec<T>, DataError>
where
    T: DeserializeOwned,
    R: Read,
{
    let headers = rdr
        .headers()
        .map_err(|source| DataError::Header { origin: origin.to_string(), source })?
        .clone();
    log::debug!("{origin}: headers {:?}", headers.iter().collect::<Vec<_>>());
    require_columns(&headers, required, origin)?;

    let mut rows = Vec::new();
    for (i, rec) in rdr.deserialize::<T>().enumerate() {
        let row = rec.map_err(|source| DataError::Row { origin: origin.to_string(), row: i + 1, source })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Parse CSV text from `reader`. `origin` names the source in errors.
pub fn read_records<T, R>(reader: R, origin: &str, required: &[&str]) -> Result<Vec<T>, DataError>
where
    T: DeserializeOwned,
    R: Read,
{
    collect_rows(reader_builder().from_reader(reader), origin, required)
}

/// Parse the CSV file at `path`.
pub fn load_records<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>, DataError> {
    let origin = path.display().to_string();
    let rdr = reader_builder()
        .from_path(path)
        .map_err(|source| DataError::Open { origin: origin.clone(), source })?;
    collect_rows(rdr, &origin, required)
}

/// Treat empty (or whitespace-only) cells as missing.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
