//! # tabcrunch
//!
//! Command-line filtering and aggregation for small tabular files.
//!
//! A dataset is loaded from CSV, JSON or Parquet into rows of text cells,
//! optionally filtered by a single `column>literal`-style condition,
//! optionally reduced to one aggregate statistic (`avg`, `min`, `max`,
//! `sum`, `count`), and rendered as a colored grid table.
//!
//! ```
//! use tabcrunch::query::condition::{Condition, Operator};
//!
//! let c = Condition::parse("price>500").unwrap();
//! assert_eq!(c.column, "price");
//! assert_eq!(c.operator, Operator::GreaterThan);
//! assert_eq!(c.literal, "500");
//! ```

pub mod data;
pub mod output;
pub mod query;
