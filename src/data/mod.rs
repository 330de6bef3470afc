/// Data layer: the column table type, ingestion, and delimited output.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌────────┐
///   │ loader │  parse file → Table
///   └────────┘
///        │
///        ▼
///   ┌────────┐
///   │ Table  │  ordered, equal-length f64 columns
///   └────────┘
///        │
///        ▼
///   ┌────────┐
///   │ writer │  rows → delimited file (new/append)
///   └────────┘
/// ```

pub mod loader;
pub mod model;
pub mod writer;
