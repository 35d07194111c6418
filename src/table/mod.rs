//! Tabular data: ingestion, column layout and sorting
//!
//! The grid owns exactly one [`Table`] for the whole session.
//!
//! ```text
//! stdin ──parse_tsv──▶ TsvData ──Table::new──▶ Table
//!                                               ├── rows      (sorted in place)
//!                                               ├── original  (load-order snapshot)
//!                                               └── col_widths (measured once)
//! ```

mod layout;
mod model;
mod parser;
mod sort;

pub use layout::{measure_column_widths, ColumnSizing, TextMeasure};
pub use model::{ActiveSort, Row, SortDirection, Table};
pub use parser::{parse_tsv, IngestError, TsvData};
