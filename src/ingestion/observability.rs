//! Load events and the observers that record them.
//!
//! Every call to [`super::load_csv_with_options`] with an observer configured emits exactly one
//! [`LoadEvent`].

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::IngestionError;

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path used for loading.
    pub path: PathBuf,
}

/// Dimensions of a completed load, before and after ignored rows/columns were dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines in the source file, including a trailing empty line.
    pub total_rows: usize,
    /// Cells in the first line of the source file.
    pub total_cols: usize,
    /// Rows left in the returned dataframe.
    pub rows: usize,
    /// Width of the returned dataframe's first row (`0` when no rows are left).
    pub cols: usize,
}

impl LoadStats {
    /// Number of source rows dropped by `ignore_rows`.
    pub fn dropped_rows(&self) -> usize {
        self.total_rows - self.rows
    }
}

/// Outcome of one load attempt.
#[derive(Debug)]
pub enum LoadEvent<'a> {
    /// The file was read and at least one row was kept.
    Loaded(LoadStats),
    /// The file was read but `ignore_rows` dropped every row.
    AllRowsIgnored(LoadStats),
    /// The path does not exist; the empty sentinel load was returned.
    Missing,
    /// The path exists but could not be read.
    ReadFailed(&'a IngestionError),
}

impl LoadEvent<'_> {
    /// Short, stable name used as the log tag.
    pub fn label(&self) -> &'static str {
        match self {
            LoadEvent::Loaded(_) => "loaded",
            LoadEvent::AllRowsIgnored(_) => "all_rows_ignored",
            LoadEvent::Missing => "missing",
            LoadEvent::ReadFailed(_) => "read_failed",
        }
    }
}

impl fmt::Display for LoadEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadEvent::Loaded(stats) | LoadEvent::AllRowsIgnored(stats) => write!(
                f,
                "total_rows={} total_cols={} rows={} cols={} dropped_rows={}",
                stats.total_rows,
                stats.total_cols,
                stats.rows,
                stats.cols,
                stats.dropped_rows()
            ),
            LoadEvent::Missing => f.write_str("returned empty dataframe (-1, -1)"),
            LoadEvent::ReadFailed(err) => write!(f, "err={err}"),
        }
    }
}

/// Observer hook for load events.
pub trait LoadObserver: Send + Sync {
    fn on_event(&self, ctx: &LoadContext, event: &LoadEvent<'_>);
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_event(&self, ctx: &LoadContext, event: &LoadEvent<'_>) {
        self.observers.iter().for_each(|o| o.on_event(ctx, event));
    }
}

/// Writes `[load][<label>] path=... <details>` lines to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_event(&self, ctx: &LoadContext, event: &LoadEvent<'_>) {
        eprintln!("[load][{}] path={} {}", event.label(), ctx.path.display(), event);
    }
}

/// Appends one timestamped line per load event to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_event(&self, ctx: &LoadContext, event: &LoadEvent<'_>) {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{ts} {} path={} {event}", event.label(), ctx.path.display());
        }
    }
}
