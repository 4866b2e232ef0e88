use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::model::{Record, Value};

// ---------------------------------------------------------------------------
// RecordSource – where record sequences come from
// ---------------------------------------------------------------------------

/// A capability that yields a sequence of records.
///
/// Operations never fetch anything themselves; callers hand them whatever a
/// source produced, so they stay testable without files or network.
pub trait RecordSource {
    fn fetch(&self) -> Result<Vec<Record>>;
}

/// Records read from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        let records = load_file(&self.path)?;
        log::info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

/// Records held in memory; every fetch hands out a fresh copy.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        StaticSource { records }
    }
}

impl RecordSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

// ---------------------------------------------------------------------------
// Post – the typed post-like record
// ---------------------------------------------------------------------------

/// A blog post as served by typical placeholder APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Convert fetched records into [`Post`]s, naming the first bad row.
pub fn posts_from_records(records: &[Record]) -> Result<Vec<Post>> {
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            serde_json::from_value(rec.to_json()).with_context(|| format!("Row {i} is not a post"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Load records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "name": "John", "age": 20 }, ...]`
/// * `.csv`  – header row with column names, one record per row
pub fn load_file(path: &Path) -> Result<Vec<Record>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Parse a JSON document holding a single value (record, array, scalar).
pub fn load_json_value(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;
    Ok(Value::from(root))
}

// -- JSON --

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "name": "John", "age": 20 },
///   { "name": "Dave", "age": 30 }
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let JsonValue::Array(rows) = root else {
        bail!("Expected top-level JSON array");
    };

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| Record::from_json(row).with_context(|| format!("Row {i} is not a JSON object")))
        .collect()
}

// -- CSV --

/// CSV layout:  header row with column names, every cell type-guessed.
fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut record = Record::with_capacity(headers.len());
        for (col_name, cell) in headers.iter().zip(row.iter()) {
            record.insert(col_name.as_str(), guess_value_type(cell));
        }
        records.push(record);
    }

    Ok(records)
}

fn guess_value_type(s: &str) -> Value {
    if s.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    if s == "true" || s == "false" {
        return Value::Bool(s == "true");
    }
    Value::String(s.to_string())
}
