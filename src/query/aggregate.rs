use std::fmt;

use crate::data::model::{Dataset, Scalar};

use super::QueryError;

// ---------------------------------------------------------------------------
// Aggregate functions
// ---------------------------------------------------------------------------

/// A reducer over one column of a row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFn {
    Avg,
    Min,
    Max,
    Sum,
    Count,
}

impl AggregateFn {
    /// Look up a (lowercased) function name.  `None` for unknown names.
    fn from_name(name: &str) -> Option<AggregateFn> {
        match name {
            "avg" => Some(AggregateFn::Avg),
            "min" => Some(AggregateFn::Min),
            "max" => Some(AggregateFn::Max),
            "sum" => Some(AggregateFn::Sum),
            "count" => Some(AggregateFn::Count),
            _ => None,
        }
    }
}

impl fmt::Display for AggregateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregateFn::Avg => "avg",
            AggregateFn::Min => "min",
            AggregateFn::Max => "max",
            AggregateFn::Sum => "sum",
            AggregateFn::Count => "count",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Aggregation spec
// ---------------------------------------------------------------------------

/// A parsed aggregation spec: `column=function`.
///
/// The function is kept as (lowercased) text: whether it names a known
/// reducer is only checked during evaluation, after the empty-input short
/// circuits have had their chance to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub column: String,
    pub function: String,
}

impl AggregateSpec {
    /// Parse a `price=avg`-style spec: exactly one `=` separating the column
    /// from the function name.
    pub fn parse(raw: &str) -> Result<AggregateSpec, QueryError> {
        let mut parts = raw.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(column), Some(function), None) => Ok(AggregateSpec {
                column: column.trim().to_string(),
                function: function.trim().to_ascii_lowercase(),
            }),
            _ => Err(QueryError::MalformedAggregation(raw.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// The computed value: a float for avg/min/max/sum, an integer row count for
/// count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregateValue {
    Count(usize),
    Number(f64),
}

impl fmt::Display for AggregateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateValue::Count(n) => write!(f, "{n}"),
            AggregateValue::Number(v) => write!(f, "{v}"),
        }
    }
}

/// One aggregation record: function, column, value.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub function: AggregateFn,
    pub column: String,
    pub value: AggregateValue,
}

/// What an aggregation produced.
///
/// The two empty cases are reportable outcomes, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateOutcome {
    Computed(AggregateResult),
    /// The row set was empty (and the function was not `count`).
    NoRows,
    /// The column was present in no row.
    NoNumericData { column: String },
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Aggregate one column of a dataset according to a raw spec string.
///
/// Evaluation order matters: `count` is answered before anything touches
/// cell values, the empty-row-set and empty-column outcomes come next, and
/// only then is the function name checked against the known reducers.
pub fn aggregate(dataset: &Dataset, raw: &str) -> Result<AggregateOutcome, QueryError> {
    let spec = AggregateSpec::parse(raw)?;

    // count ignores column existence and numeric content entirely
    if AggregateFn::from_name(&spec.function) == Some(AggregateFn::Count) {
        return Ok(AggregateOutcome::Computed(AggregateResult {
            function: AggregateFn::Count,
            column: spec.column,
            value: AggregateValue::Count(dataset.len()),
        }));
    }

    if dataset.is_empty() {
        return Ok(AggregateOutcome::NoRows);
    }

    let mut values = Vec::new();
    for row in &dataset.rows {
        if let Some(cell) = row.get(&spec.column) {
            match Scalar::resolve(cell).as_number() {
                Some(n) => values.push(n),
                None => return Err(QueryError::NonNumericColumn(spec.column.clone())),
            }
        }
    }

    if values.is_empty() {
        return Ok(AggregateOutcome::NoNumericData {
            column: spec.column,
        });
    }

    let function = AggregateFn::from_name(&spec.function)
        .ok_or_else(|| QueryError::UnknownAggregateFunction(spec.function.clone()))?;

    let sum: f64 = values.iter().sum();
    let value = match function {
        AggregateFn::Avg => AggregateValue::Number(sum / values.len() as f64),
        AggregateFn::Min => {
            AggregateValue::Number(values.iter().copied().fold(f64::INFINITY, f64::min))
        }
        AggregateFn::Max => {
            AggregateValue::Number(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
        }
        AggregateFn::Sum => AggregateValue::Number(sum),
        // count returned before numeric collection
        AggregateFn::Count => AggregateValue::Count(dataset.len()),
    };

    Ok(AggregateOutcome::Computed(AggregateResult {
        function,
        column: spec.column,
        value,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn row(cells: &[(&str, &str)]) -> Row {
        cells
            .iter()
            .map(|(c, v)| (c.to_string(), v.to_string()))
            .collect()
    }

    fn products() -> Dataset {
        Dataset::new(
            ["name", "brand", "price", "rating"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            vec![
                row(&[
                    ("name", "iphone 15 pro"),
                    ("brand", "apple"),
                    ("price", "999"),
                    ("rating", "4.9"),
                ]),
                row(&[
                    ("name", "galaxy s23 ultra"),
                    ("brand", "samsung"),
                    ("price", "1199"),
                    ("rating", "4.8"),
                ]),
                row(&[
                    ("name", "redmi note 12"),
                    ("brand", "xiaomi"),
                    ("price", "199"),
                    ("rating", "4.6"),
                ]),
                row(&[
                    ("name", "poco x5 pro"),
                    ("brand", "xiaomi"),
                    ("price", "299"),
                    ("rating", "4.4"),
                ]),
            ],
        )
    }

    fn empty() -> Dataset {
        Dataset::new(vec!["price".to_string()], Vec::new())
    }

    fn computed(outcome: AggregateOutcome) -> AggregateResult {
        match outcome {
            AggregateOutcome::Computed(result) => result,
            other => panic!("expected a computed result, got {other:?}"),
        }
    }

    #[test]
    fn avg_is_exact_mean() {
        let result = computed(aggregate(&products(), "price=avg").unwrap());
        assert_eq!(result.function, AggregateFn::Avg);
        assert_eq!(result.column, "price");
        assert_eq!(result.value, AggregateValue::Number(674.0));
    }

    #[test]
    fn min_max_sum() {
        let min = computed(aggregate(&products(), "price=min").unwrap());
        assert_eq!(min.value, AggregateValue::Number(199.0));

        let max = computed(aggregate(&products(), "price=max").unwrap());
        assert_eq!(max.value, AggregateValue::Number(1199.0));

        let sum = computed(aggregate(&products(), "price=sum").unwrap());
        assert_eq!(sum.value, AggregateValue::Number(2696.0));
    }

    #[test]
    fn count_is_row_count() {
        let result = computed(aggregate(&products(), "price=count").unwrap());
        assert_eq!(result.value, AggregateValue::Count(4));
    }

    #[test]
    fn count_works_on_empty_rows_and_absent_columns() {
        let result = computed(aggregate(&empty(), "price=count").unwrap());
        assert_eq!(result.value, AggregateValue::Count(0));

        let result = computed(aggregate(&products(), "stock=count").unwrap());
        assert_eq!(result.value, AggregateValue::Count(4));
    }

    #[test]
    fn function_name_is_case_insensitive() {
        let result = computed(aggregate(&products(), "price=AVG").unwrap());
        assert_eq!(result.function, AggregateFn::Avg);

        let result = computed(aggregate(&empty(), "price=Count").unwrap());
        assert_eq!(result.value, AggregateValue::Count(0));
    }

    #[test]
    fn empty_rows_is_an_outcome_not_an_error() {
        assert_eq!(
            aggregate(&empty(), "price=avg").unwrap(),
            AggregateOutcome::NoRows
        );
    }

    // The empty-row-set outcome fires before the function name is checked.
    #[test]
    fn empty_rows_wins_over_unknown_function() {
        assert_eq!(
            aggregate(&empty(), "price=unknownfunc").unwrap(),
            AggregateOutcome::NoRows
        );
    }

    #[test]
    fn absent_column_is_an_outcome_not_an_error() {
        assert_eq!(
            aggregate(&products(), "stock=avg").unwrap(),
            AggregateOutcome::NoNumericData {
                column: "stock".to_string()
            }
        );
    }

    #[test]
    fn non_numeric_column_aborts() {
        assert_eq!(
            aggregate(&products(), "brand=avg"),
            Err(QueryError::NonNumericColumn("brand".to_string()))
        );
    }

    #[test]
    fn unknown_function_fails() {
        assert_eq!(
            aggregate(&products(), "price=unknownfunc"),
            Err(QueryError::UnknownAggregateFunction(
                "unknownfunc".to_string()
            ))
        );
    }

    #[test]
    fn spec_needs_exactly_one_separator() {
        assert_eq!(
            aggregate(&products(), "price"),
            Err(QueryError::MalformedAggregation("price".to_string()))
        );
        assert_eq!(
            aggregate(&products(), "price=avg=1"),
            Err(QueryError::MalformedAggregation("price=avg=1".to_string()))
        );
    }

    #[test]
    fn aggregates_ratings_with_fractions() {
        let result = computed(aggregate(&products(), "rating=min").unwrap());
        assert_eq!(result.value, AggregateValue::Number(4.4));

        let result = computed(aggregate(&products(), "rating=sum").unwrap());
        match result.value {
            AggregateValue::Number(v) => assert!((v - 18.7).abs() < 1e-9),
            other => panic!("expected a number, got {other:?}"),
        }
    }
}
