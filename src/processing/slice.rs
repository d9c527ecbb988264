//! Row filtering + column projection for dataframes.

use crate::types::{Cell, Row};

/// Row match used by [`create_slice`].
#[derive(Debug, Clone, PartialEq)]
pub enum SlicePattern {
    /// Match every row.
    Any,
    /// Match rows whose cell strictly equals this value (no numeric/text coercion).
    Equals(Cell),
}

impl SlicePattern {
    /// Returns `true` if `cell` (absent when the row is too short) satisfies the pattern.
    pub fn matches(&self, cell: Option<&Cell>) -> bool {
        match self {
            SlicePattern::Any => true,
            SlicePattern::Equals(expected) => cell == Some(expected),
        }
    }
}

/// `"*"` is the wildcard; any other text matches literally.
impl From<&str> for SlicePattern {
    fn from(s: &str) -> Self {
        if s == "*" {
            SlicePattern::Any
        } else {
            SlicePattern::Equals(Cell::from(s))
        }
    }
}

impl From<String> for SlicePattern {
    fn from(s: String) -> Self {
        SlicePattern::from(s.as_str())
    }
}

impl From<f64> for SlicePattern {
    fn from(v: f64) -> Self {
        SlicePattern::Equals(Cell::Number(v))
    }
}

impl From<i32> for SlicePattern {
    fn from(v: i32) -> Self {
        SlicePattern::Equals(Cell::from(v))
    }
}

impl From<Cell> for SlicePattern {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Text(s) => SlicePattern::from(s),
            number => SlicePattern::Equals(number),
        }
    }
}

/// Select rows whose cell at `column` matches `pattern`, optionally projecting columns.
///
/// - With an empty `export_columns`, each matching row is copied whole.
/// - Otherwise each matching row becomes a new row holding the cells at `export_columns`, in the
///   order given. Indices past the end of a row are skipped for that row.
///
/// The input is never modified; result rows are independent copies.
pub fn create_slice(
    dataframe: &[Row],
    column: usize,
    pattern: impl Into<SlicePattern>,
    export_columns: &[usize],
) -> Vec<Row> {
    let pattern = pattern.into();
    dataframe
        .iter()
        .filter(|row| pattern.matches(row.get(column)))
        .map(|row| {
            if export_columns.is_empty() {
                row.clone()
            } else {
                export_columns
                    .iter()
                    .filter_map(|&idx| row.get(idx).cloned())
                    .collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{create_slice, SlicePattern};
    use crate::types::{Cell, Row};

    fn sample_frame() -> Vec<Row> {
        serde_json::from_str(
            r#"[
                ["x", "alpha", 1],
                ["y", "beta", 2],
                ["x", "gamma", 3],
                [1, "delta", 4]
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn wildcard_copies_every_row() {
        let df = sample_frame();
        let out = create_slice(&df, 0, "*", &[]);
        assert_eq!(out, df);
    }

    #[test]
    fn result_rows_are_independent_of_source() {
        let df = sample_frame();
        let mut out = create_slice(&df, 0, "*", &[]);
        out[0][1] = Cell::from("changed");
        out.pop();

        assert_eq!(df[0][1], Cell::from("alpha"));
        assert_eq!(df.len(), 4);
    }

    #[test]
    fn literal_pattern_projects_requested_columns() {
        let df = sample_frame();
        let out = create_slice(&df, 0, "x", &[1]);
        assert_eq!(
            out,
            vec![vec![Cell::from("alpha")], vec![Cell::from("gamma")]]
        );
    }

    #[test]
    fn export_columns_follow_requested_order_and_skip_out_of_bounds() {
        let df = sample_frame();
        let out = create_slice(&df, 0, "y", &[2, 9, 0]);
        assert_eq!(out, vec![vec![Cell::from(2), Cell::from("y")]]);
    }

    #[test]
    fn equality_is_strict() {
        let df = sample_frame();
        assert!(create_slice(&df, 0, "1", &[]).is_empty());

        let numeric = create_slice(&df, 0, 1, &[1]);
        assert_eq!(numeric, vec![vec![Cell::from("delta")]]);
    }

    #[test]
    fn missing_match_cell_never_matches() {
        let df = sample_frame();
        assert!(create_slice(&df, 7, "x", &[]).is_empty());
        assert_eq!(create_slice(&df, 7, "*", &[]).len(), 4);
    }

    #[test]
    fn empty_frame_slices_to_nothing() {
        assert!(create_slice(&[], 0, "*", &[0]).is_empty());
    }

    #[test]
    fn pattern_conversions() {
        assert_eq!(SlicePattern::from("*"), SlicePattern::Any);
        assert_eq!(SlicePattern::from(Cell::from("*")), SlicePattern::Any);
        assert_eq!(
            SlicePattern::from(2.5),
            SlicePattern::Equals(Cell::Number(2.5))
        );
        assert_eq!(
            SlicePattern::from("a".to_string()),
            SlicePattern::Equals(Cell::from("a"))
        );
    }

    #[test]
    fn reslicing_a_copy_is_idempotent() {
        let df = sample_frame();
        let first = create_slice(&df, 0, "x", &[]);
        let second = create_slice(&first, 0, "*", &[]);
        assert_eq!(first, second);
    }
}
