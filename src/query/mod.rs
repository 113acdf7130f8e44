//! Query layer: condition parsing, row filtering, and aggregation.
//!
//! ```text
//!   "price>500"              "price=avg"
//!        │                        │
//!        ▼                        ▼
//!   ┌───────────┐           ┌───────────┐
//!   │ condition │           │ aggregate │
//!   └───────────┘           └───────────┘
//!        │                        │
//!        ▼                        ▼
//!   ┌───────────┐           ┌──────────────────┐
//!   │  filter   │ ────────▶ │ AggregateOutcome │
//!   └───────────┘           └──────────────────┘
//! ```
//!
//! One invocation produces either a filtered row set or a single aggregation
//! record, never both.

use thiserror::Error;

pub mod aggregate;
pub mod condition;
pub mod filter;

/// Error type used across the query layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid filter condition: '{0}'")]
    MalformedCondition(String),

    #[error("no column '{0}' in the data")]
    UnknownColumn(String),

    #[error("invalid aggregation spec: '{0}'")]
    MalformedAggregation(String),

    #[error("cannot aggregate non-numeric column '{0}'")]
    NonNumericColumn(String),

    #[error("unknown aggregate function: '{0}'")]
    UnknownAggregateFunction(String),
}
