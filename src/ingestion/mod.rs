//! Loading entrypoints.
//!
//! Most callers should use [`load_csv`], which:
//!
//! - returns the empty [`CsvLoad::missing`] sentinel for a path that does not exist
//! - reads the whole file and splits it on `'\n'` and `','` (no quoting)
//! - drops ignored rows, then ignored columns
//! - reports the unfiltered source dimensions alongside the dataframe
//!
//! [`load_csv_with_options`] additionally reports each outcome to a [`LoadObserver`] as a
//! [`LoadEvent`].

pub mod csv;
pub mod observability;
pub mod options;

pub use csv::{file_exists, load_csv, load_csv_with_options, parse_delimited, CsvLoad, SourceDimensions};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadEvent, LoadObserver, LoadStats, StdErrObserver,
};
pub use options::LoadOptions;
