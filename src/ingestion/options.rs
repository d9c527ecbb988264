//! Load configuration.

use std::fmt;
use std::sync::Arc;

use super::observability::LoadObserver;

/// Options controlling [`super::load_csv_with_options`].
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// Zero-based indices of rows to drop (indices refer to the unfiltered file).
    pub ignore_rows: Vec<usize>,
    /// Zero-based indices of columns to drop from every kept row.
    pub ignore_cols: Vec<usize>,
    /// Optional observer notified of the load outcome.
    pub observer: Option<Arc<dyn LoadObserver>>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("ignore_rows", &self.ignore_rows)
            .field("ignore_cols", &self.ignore_cols)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}
