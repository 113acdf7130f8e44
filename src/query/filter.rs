use crate::data::model::{Dataset, Row, Scalar};

use super::QueryError;
use super::condition::{Condition, Operator};

// ---------------------------------------------------------------------------
// Row filter
// ---------------------------------------------------------------------------

/// Filter a dataset by an optional raw condition string.
///
/// With no condition the dataset is returned unchanged.  Otherwise rows that
/// satisfy the condition are kept in their original order; a row missing the
/// condition's column aborts the whole filter with
/// [`QueryError::UnknownColumn`].
pub fn apply(dataset: &Dataset, condition: Option<&str>) -> Result<Dataset, QueryError> {
    let Some(raw) = condition else {
        return Ok(dataset.clone());
    };
    let condition = Condition::parse(raw)?;

    let mut rows = Vec::new();
    for row in &dataset.rows {
        if matches(&condition, row)? {
            rows.push(row.clone());
        }
    }
    Ok(dataset.with_rows(rows))
}

/// Whether one row satisfies the condition.
///
/// When both the cell and the literal resolve to numbers the operator
/// applies to the parsed values.  On any other tag pair only `=` is defined,
/// comparing the raw cell text against the raw literal; `>` and `<` quietly
/// exclude the row.
fn matches(condition: &Condition, row: &Row) -> Result<bool, QueryError> {
    let cell = row
        .get(&condition.column)
        .ok_or_else(|| QueryError::UnknownColumn(condition.column.clone()))?;

    let matched = match (Scalar::resolve(cell), Scalar::resolve(&condition.literal)) {
        (Scalar::Number(value), Scalar::Number(wanted)) => match condition.operator {
            Operator::GreaterThan => value > wanted,
            Operator::LessThan => value < wanted,
            Operator::Equals => value == wanted,
        },
        _ => condition.operator == Operator::Equals && cell == condition.literal,
    };
    Ok(matched)
}
