use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Scalar – a typed view of one cell
// ---------------------------------------------------------------------------

/// A cell resolved to either a number or raw text.
///
/// Cells are stored as text exactly as read from the source; numeric
/// interpretation happens at the comparison or aggregation site by resolving
/// the cell once into a `Scalar` and dispatching on the tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> Scalar<'a> {
    /// Resolve a raw cell. Surrounding whitespace is ignored for the numeric
    /// interpretation; the `Text` variant keeps the cell untouched.
    pub fn resolve(raw: &'a str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) => Scalar::Number(n),
            Err(_) => Scalar::Text(raw),
        }
    }

    /// The numeric value, if this cell has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the source table
// ---------------------------------------------------------------------------

/// A single row: column name → cell text, as read from the source.
///
/// Lookup is explicit; `get` returning `None` means the row lacks the
/// column, and callers decide what that means for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Column names present in this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Row {
            cells: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Column names in presentation order (source header order where the
    /// format provides one).
    pub columns: Vec<String>,
    /// All rows, in source order.
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { columns, rows }
    }

    /// Build a dataset from bare rows, collecting column names in
    /// first-seen order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for col in row.columns() {
                if !columns.iter().any(|c| c == col) {
                    columns.push(col.to_string());
                }
            }
        }
        Dataset { columns, rows }
    }

    /// A dataset with the same columns but a different row subset.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Dataset {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
