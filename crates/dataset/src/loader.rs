use std::{fs, path::Path};

use derive_more::derive::Deref;
use eyre::{Result, WrapErr};
use serde_json::Value;
use tracing::{error, info};

use crate::{FieldLayout, ReplyRecord};

/// The full record set, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Deref)]
pub struct Dataset {
    #[deref]
    records: Vec<ReplyRecord>,
    available: bool,
}

impl Dataset {
    /// Build a dataset from already-mapped records.
    pub const fn new(records: Vec<ReplyRecord>) -> Self {
        Self { records, available: true }
    }

    /// Placeholder used when the backing collection could not be loaded.
    pub const fn unavailable() -> Self {
        Self { records: Vec::new(), available: false }
    }

    /// Map positional rows through `layout`.
    pub fn from_rows(rows: &[Vec<Value>], layout: FieldLayout) -> Self {
        Self::new(rows.iter().map(|row| layout.map_row(row)).collect())
    }

    /// Parse a JSON array of rows.
    ///
    /// JavaScript modules exporting the array (`export const dbData = [...];`
    /// or `export default [...];`) are accepted as well. Their body is read
    /// as JSON5, so trailing commas, single quotes and comments are allowed.
    pub fn from_json_str(raw: &str, layout: FieldLayout) -> Result<Self> {
        let rows: Vec<Vec<Value>> = match module_body(raw) {
            Some(body) => json5::from_str(body).wrap_err("dataset is not a JSON array of rows")?,
            None => serde_json::from_str(raw).wrap_err("dataset is not a JSON array of rows")?,
        };
        Ok(Self::from_rows(&rows, layout))
    }

    /// Read and parse the dataset file at `path`.
    pub fn load(path: &Path, layout: FieldLayout) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read dataset {}", path.display()))?;
        let dataset = Self::from_json_str(&raw, layout)
            .wrap_err_with(|| format!("failed to parse dataset {}", path.display()))?;
        info!(count = dataset.len(), path = %path.display(), "Loaded dataset");
        Ok(dataset)
    }

    /// `false` when this dataset stands in for a collection that failed to load.
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// All records in source order.
    pub fn records(&self) -> &[ReplyRecord] {
        &self.records
    }
}

/// Load the dataset, degrading to an empty, unavailable one on failure.
pub fn load_or_empty(path: &Path, layout: FieldLayout) -> Dataset {
    match Dataset::load(path, layout) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(error = ?e, "Dataset unavailable, serving empty results");
            Dataset::unavailable()
        }
    }
}

/// Exported expression of a JavaScript module, `None` for plain JSON.
fn module_body(raw: &str) -> Option<&str> {
    let rest = raw.trim().strip_prefix("export")?.trim_start();
    let body = match rest.strip_prefix("default") {
        Some(body) => body,
        None => rest.split_once('=')?.1,
    };
    Some(body.trim().trim_end_matches(';').trim_end())
}
