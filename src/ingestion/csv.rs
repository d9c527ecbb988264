//! Comma-separated text loading.
//!
//! Splitting is literal: lines on `'\n'`, cells on `','`. There is no quoting, escaping or
//! whitespace trimming, so a `"\r\n"` file keeps its `'\r'` at the end of each line's last cell,
//! and a trailing newline produces a final row holding one empty cell.

use std::path::Path;

use crate::error::IngestionResult;
use crate::types::{Cell, Row};

use super::observability::{LoadContext, LoadEvent, LoadStats};
use super::options::LoadOptions;

/// Row and column counts of a source file before any rows or columns were ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDimensions {
    /// Number of lines, including a trailing empty line.
    pub rows: usize,
    /// Number of cells in the first line.
    pub cols: usize,
}

/// Result of loading a delimited file.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvLoad {
    /// Loaded cells, with ignored rows and columns removed. Every cell is [`Cell::Text`].
    pub dataframe: Vec<Row>,
    /// Dimensions of the unfiltered source, or `None` if the file does not exist.
    pub source: Option<SourceDimensions>,
}

impl CsvLoad {
    /// The sentinel load returned for a missing file: no rows and no source dimensions.
    pub fn missing() -> Self {
        Self {
            dataframe: Vec::new(),
            source: None,
        }
    }

    /// Unfiltered `(total_rows, total_cols)`, or `(-1, -1)` for a missing file.
    pub fn dimensions(&self) -> (isize, isize) {
        match self.source {
            Some(dims) => (dims.rows as isize, dims.cols as isize),
            None => (-1, -1),
        }
    }

    /// Split into `(dataframe, total_rows, total_cols)`.
    pub fn into_parts(self) -> (Vec<Row>, isize, isize) {
        let (rows, cols) = self.dimensions();
        (self.dataframe, rows, cols)
    }
}

/// Returns `true` if `path` exists (file or directory).
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Load a delimited file, dropping the given rows and then the given columns.
///
/// A missing file is not an error: it yields [`CsvLoad::missing`]. Reading an existing file that
/// cannot be read (e.g. a directory) returns [`IngestionError::Io`](crate::IngestionError::Io).
///
/// ```no_run
/// use rust_data_grid::ingestion::load_csv;
///
/// # fn main() -> Result<(), rust_data_grid::IngestionError> {
/// // Skip the header row and the first column.
/// let (df, total_rows, total_cols) = load_csv("sales.csv", &[0], &[0])?.into_parts();
/// println!("kept {} of {total_rows} rows ({total_cols} columns in source)", df.len());
/// # Ok(())
/// # }
/// ```
pub fn load_csv(
    path: impl AsRef<Path>,
    ignore_rows: &[usize],
    ignore_cols: &[usize],
) -> IngestionResult<CsvLoad> {
    let options = LoadOptions {
        ignore_rows: ignore_rows.to_vec(),
        ignore_cols: ignore_cols.to_vec(),
        ..Default::default()
    };
    load_csv_with_options(path, &options)
}

/// Load a delimited file according to `options`.
///
/// When an observer is configured it receives exactly one [`LoadEvent`]:
///
/// - [`LoadEvent::Loaded`] with unfiltered and filtered dimensions
/// - [`LoadEvent::AllRowsIgnored`] when `ignore_rows` left nothing
/// - [`LoadEvent::Missing`] when the path does not exist
/// - [`LoadEvent::ReadFailed`] when the path exists but cannot be read
pub fn load_csv_with_options(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> IngestionResult<CsvLoad> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
    };

    if !file_exists(path) {
        if let Some(obs) = options.observer.as_ref() {
            obs.on_event(&ctx, &LoadEvent::Missing);
        }
        return Ok(CsvLoad::missing());
    }

    let result = read_text(path)
        .map(|text| parse_delimited(&text, &options.ignore_rows, &options.ignore_cols));

    if let Some(obs) = options.observer.as_ref() {
        let event = match &result {
            Ok(load) => {
                let stats = stats_for(load);
                if stats.rows == 0 {
                    LoadEvent::AllRowsIgnored(stats)
                } else {
                    LoadEvent::Loaded(stats)
                }
            }
            Err(e) => LoadEvent::ReadFailed(e),
        };
        obs.on_event(&ctx, &event);
    }

    result
}

/// Split in-memory text the same way [`load_csv`] splits a file.
pub fn parse_delimited(text: &str, ignore_rows: &[usize], ignore_cols: &[usize]) -> CsvLoad {
    let lines: Vec<Row> = text
        .split('\n')
        .map(|line| line.split(',').map(Cell::from).collect())
        .collect();

    let source = SourceDimensions {
        rows: lines.len(),
        cols: lines.first().map_or(0, Vec::len),
    };

    let dataframe = lines
        .into_iter()
        .enumerate()
        .filter(|(row_idx, _)| !ignore_rows.contains(row_idx))
        .map(|(_, row)| {
            row.into_iter()
                .enumerate()
                .filter(|(col_idx, _)| !ignore_cols.contains(col_idx))
                .map(|(_, cell)| cell)
                .collect()
        })
        .collect();

    CsvLoad {
        dataframe,
        source: Some(source),
    }
}

fn read_text(path: &Path) -> IngestionResult<String> {
    let bytes = std::fs::read(path)?;
    // Invalid sequences become U+FFFD instead of failing the load.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn stats_for(load: &CsvLoad) -> LoadStats {
    let source = load.source.unwrap_or(SourceDimensions { rows: 0, cols: 0 });
    LoadStats {
        total_rows: source.rows,
        total_cols: source.cols,
        rows: load.dataframe.len(),
        cols: load.dataframe.first().map_or(0, Vec::len),
    }
}
