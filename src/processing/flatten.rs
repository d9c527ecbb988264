//! Flattening of single-column dataframes.

use crate::types::{data_dimensions, Cell, Row, Shape};

/// Collapse a single-column dataframe into a dataset, preserving row order.
///
/// Returns an empty vector unless the first row has exactly one cell. Rows with no cells
/// contribute nothing.
pub fn flatten(dataframe: &[Row]) -> Vec<Cell> {
    match data_dimensions(dataframe) {
        Shape::Dataframe { cols: 1, .. } => dataframe
            .iter()
            .filter_map(|row| row.first().cloned())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::flatten;
    use crate::types::{Cell, Row};

    fn frame(json: &str) -> Vec<Row> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn single_column_flattens_in_order() {
        assert_eq!(
            flatten(&frame(r#"[[1], ["two"], [3]]"#)),
            vec![Cell::from(1), Cell::from("two"), Cell::from(3)]
        );
    }

    #[test]
    fn other_widths_flatten_to_nothing() {
        assert!(flatten(&frame("[[1, 2], [3, 4]]")).is_empty());
        assert!(flatten(&frame("[[], []]")).is_empty());
        assert!(flatten(&[]).is_empty());
    }
}
