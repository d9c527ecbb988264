//! In-memory grid transformations and aggregations.
//!
//! The processing layer operates on datasets (`&[Cell]`) and dataframes (`&[Row]`), typically
//! produced by [`crate::ingestion::load_csv`].
//!
//! - [`reduce()`]: aggregations over a dataset ([`find_total`], [`calculate_mean`],
//!   [`calculate_median`])
//! - [`convert_to_number`]: in-place numeric conversion of one dataframe column
//! - [`flatten()`]: single-column dataframe to dataset
//! - [`create_slice`]: row filtering by column value plus column projection
//!
//! ## Example: slice → convert → flatten → reduce
//!
//! ```rust
//! use rust_data_grid::processing::{
//!     calculate_mean, convert_to_number, create_slice, flatten, reduce, ReduceOp,
//! };
//! use rust_data_grid::types::{Cell, Row};
//!
//! let df: Vec<Row> = vec![
//!     vec![Cell::from("north"), Cell::from("10")],
//!     vec![Cell::from("south"), Cell::from("n/a")],
//!     vec![Cell::from("north"), Cell::from("20")],
//! ];
//!
//! // Keep the "north" rows, export only the value column.
//! let mut north = create_slice(&df, 0, "north", &[1]);
//! assert_eq!(convert_to_number(&mut north, 0), 2);
//!
//! let values = flatten(&north);
//! assert_eq!(values, vec![Cell::from(10.0), Cell::from(20.0)]);
//! assert_eq!(calculate_mean(&values), 15.0);
//! assert_eq!(reduce(&values, ReduceOp::Sum), 30.0);
//! ```

pub mod convert;
pub mod flatten;
pub mod reduce;
pub mod slice;

pub use convert::convert_to_number;
pub use flatten::flatten;
pub use reduce::{calculate_mean, calculate_median, find_total, reduce, ReduceOp};
pub use slice::{create_slice, SlicePattern};
