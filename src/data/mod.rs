//! Data layer: core types and loading.
//!
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset  │  Vec<Row> of text cells, column order
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
