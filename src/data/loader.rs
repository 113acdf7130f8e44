use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray,
    StringArray,
};
use arrow::datatypes::DataType;
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row names the columns, every cell is text
/// * `.json`    – `[{ "col": value, ... }, ...]` (records orientation)
/// * `.parquet` – flat scalar columns
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per row.  Every cell
/// is kept as text.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut row = Row::new();
        for (col, value) in headers.iter().zip(record.iter()) {
            row.insert(col.clone(), value);
        }
        rows.push(row);
    }

    log::debug!("loaded {} CSV rows from {}", rows.len(), path.display());
    Ok(Dataset::new(headers, rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "name": "redmi note 12", "brand": "xiaomi", "price": 199 },
///   ...
/// ]
/// ```
///
/// Scalar values are stringified; a `null` leaves the column absent from
/// that row.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = Row::new();
        for (key, val) in obj {
            if let Some(cell) = json_to_cell(val) {
                row.insert(key.clone(), cell);
            }
        }
        rows.push(row);
    }

    log::debug!("loaded {} JSON rows from {}", rows.len(), path.display());
    Ok(Dataset::from_rows(rows))
}

fn json_to_cell(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of flat scalar columns.
///
/// Cells are stringified on read (strings as-is, numbers and bools via their
/// canonical text form); a null leaves the column absent from that row.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        if columns.is_empty() {
            columns = schema.fields().iter().map(|f| f.name().clone()).collect();
        }

        for row_no in 0..batch.num_rows() {
            let mut row = Row::new();
            for (col_idx, field) in schema.fields().iter().enumerate() {
                let array = batch.column(col_idx);
                let cell = extract_cell_text(array, row_no)
                    .with_context(|| format!("Row {row_no}: failed to read '{}'", field.name()))?;
                if let Some(cell) = cell {
                    row.insert(field.name().clone(), cell);
                }
            }
            rows.push(row);
        }
    }

    log::debug!(
        "loaded {} parquet rows from {}",
        rows.len(),
        path.display()
    );
    Ok(Dataset::new(columns, rows))
}

// -- Parquet / Arrow helpers --

/// Stringify a single Arrow cell.  `None` for nulls.
fn extract_cell_text(col: &Arc<dyn Array>, row: usize) -> Result<Option<String>> {
    if col.is_null(row) {
        return Ok(None);
    }

    let text = match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .context("expected StringArray")?
            .value(row)
            .to_string(),
        DataType::LargeUtf8 => col
            .as_any()
            .downcast_ref::<LargeStringArray>()
            .context("expected LargeStringArray")?
            .value(row)
            .to_string(),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .context("expected Int32Array")?
            .value(row)
            .to_string(),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .context("expected Int64Array")?
            .value(row)
            .to_string(),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .context("expected Float32Array")?
            .value(row)
            .to_string(),
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .context("expected Float64Array")?
            .value(row)
            .to_string(),
        DataType::Boolean => col
            .as_any()
            .downcast_ref::<BooleanArray>()
            .context("expected BooleanArray")?
            .value(row)
            .to_string(),
        _ => array_value_to_string(col.as_ref(), row)
            .context("unsupported parquet column type")?,
    };
    Ok(Some(text))
}
