use thiserror::Error;

/// Convenience result type for grid loading operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by ingestion functions.
///
/// Most misuse degrades to sentinel values instead of an error (a missing file yields an empty
/// [`crate::ingestion::CsvLoad`]). Only failures while reading a file that does exist end up here.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. permission denied, path is a directory).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
