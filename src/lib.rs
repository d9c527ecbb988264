//! `rust-data-grid` is a small library for loading comma-separated files into an in-memory grid
//! and computing simple statistics over it.
//!
//! A grid is either a **dataset** (a flat `&[Cell]`) or a **dataframe** (row-major `&[Row]`).
//! [`types::data_dimensions`] tells the two apart and every aggregation and transformation
//! dispatches on its [`types::Shape`].
//!
//! ## Cells
//!
//! A [`types::Cell`] is either a [`types::Cell::Number`] or a [`types::Cell::Text`]. Loaded cells
//! are always text; [`validation::valid_number`] decides which text counts as numeric (an
//! optionally negative decimal numeral such as `"3"`, `"-2.5"`, `".5"` or `"3."`).
//!
//! ## Never throw, always degrade
//!
//! Misuse yields sentinel values rather than errors:
//!
//! - aggregations over a dataframe or an empty input return `0.0`
//! - [`processing::flatten()`] of anything but a single-column dataframe returns `[]`
//! - [`ingestion::load_csv`] of a missing path returns an empty dataframe with dimensions
//!   `(-1, -1)`
//! - invalid numerals are skipped, out-of-range export columns are skipped
//!
//! The only [`IngestionError`] is an I/O failure while reading a file that does exist.
//!
//! ## Quick example: load and slice
//!
//! ```no_run
//! use rust_data_grid::ingestion::load_csv;
//! use rust_data_grid::processing::{calculate_median, convert_to_number, create_slice, flatten};
//!
//! # fn main() -> Result<(), rust_data_grid::IngestionError> {
//! // Skip the header line.
//! let load = load_csv("sales.csv", &[0], &[])?;
//! let (total_rows, total_cols) = load.dimensions();
//! println!("source has {total_rows} rows x {total_cols} cols");
//!
//! // Column 2 of every row whose region (column 0) is "north".
//! let mut north = create_slice(&load.dataframe, 0, "north", &[2]);
//! convert_to_number(&mut north, 0);
//! println!("median={}", calculate_median(&flatten(&north)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Shape inspection
//!
//! ```rust
//! use rust_data_grid::types::{data_dimensions, Cell, Row, Shape};
//!
//! let dataset = vec![Cell::from(1), Cell::from("2"), Cell::from("x")];
//! let dataframe: Vec<Row> = vec![dataset.clone(), dataset.clone()];
//!
//! assert_eq!(data_dimensions(&dataset), Shape::Dataset { rows: 3 });
//! assert_eq!(data_dimensions(&dataframe).as_pair(), (2, 3));
//! assert_eq!(data_dimensions(None::<&Vec<Cell>>).as_pair(), (-1, -1));
//!
//! // Aggregations refuse 2-D input.
//! assert_eq!(rust_data_grid::processing::find_total(&dataset), 3.0);
//! assert_eq!(rust_data_grid::processing::find_total(&dataframe), 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: cells, rows, grid views, shape inspection
//! - [`validation`]: numeric grammar and coercion
//! - [`processing`]: aggregation, conversion, flattening, slicing
//! - [`ingestion`]: delimited file loading, options and observers
//! - [`error`]: error types used by ingestion

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod types;
pub mod validation;

pub use error::{IngestionError, IngestionResult};
