//! Aggregations over a flat dataset.
//!
//! Every aggregation refuses anything that does not inspect as
//! [`Shape::Dataset`](crate::types::Shape::Dataset): dataframes and
//! empty inputs reduce to `0.0`. Cells that are not valid numbers are skipped.

use crate::types::{Cell, Grid};

/// Built-in aggregations over a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum of valid numbers.
    Sum,
    /// Mean of valid numbers (divided by the count of valid numbers).
    Mean,
    /// Median of valid numbers.
    Median,
}

/// Reduce a dataset using a built-in [`ReduceOp`].
pub fn reduce<'a>(data: impl Into<Grid<'a>>, op: ReduceOp) -> f64 {
    let grid = data.into();
    match op {
        ReduceOp::Sum => find_total(grid),
        ReduceOp::Mean => calculate_mean(grid),
        ReduceOp::Median => calculate_median(grid),
    }
}

/// Sum of all valid-number cells.
///
/// Returns `0.0` for dataframes and empty input.
pub fn find_total<'a>(data: impl Into<Grid<'a>>) -> f64 {
    match data.into().as_dataset() {
        Some(cells) => numbers(cells).sum(),
        None => 0.0,
    }
}

/// Mean of all valid-number cells.
///
/// The divisor is the number of valid cells, not the dataset length. Returns `0.0` for
/// dataframes, empty input, and datasets with no valid numbers.
pub fn calculate_mean<'a>(data: impl Into<Grid<'a>>) -> f64 {
    let Some(cells) = data.into().as_dataset() else {
        return 0.0;
    };

    let (sum, count) = numbers(cells).fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count > 0 { sum / count as f64 } else { 0.0 }
}

/// Median of all valid-number cells.
///
/// Returns `0.0` for dataframes, empty input, and datasets with no valid numbers.
pub fn calculate_median<'a>(data: impl Into<Grid<'a>>) -> f64 {
    let Some(cells) = data.into().as_dataset() else {
        return 0.0;
    };

    let mut sorted: Vec<f64> = numbers(cells).collect();
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn numbers(cells: &[Cell]) -> impl Iterator<Item = f64> + '_ {
    cells.iter().filter_map(Cell::as_number)
}

#[cfg(test)]
mod tests {
    use super::{calculate_mean, calculate_median, find_total, reduce, ReduceOp};
    use crate::types::{Cell, Row};

    fn dataset(json: &str) -> Vec<Cell> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn total_sums_numeric_text_and_numbers() {
        assert_eq!(find_total(&dataset(r#"["1.5", "2", ".5", "-1"]"#)), 3.0);
        assert_eq!(find_total(&dataset(r#"[1, "2", "x", "", 3]"#)), 6.0);
    }

    #[test]
    fn total_of_empty_or_absent_input_is_zero() {
        assert_eq!(find_total(&Vec::<Cell>::new()), 0.0);
        assert_eq!(find_total(None::<&Vec<Cell>>), 0.0);
        assert_eq!(find_total(&dataset(r#"["a", "b"]"#)), 0.0);
    }

    #[test]
    fn mean_and_median_of_empty_or_absent_input_are_zero() {
        let empty = Vec::<Cell>::new();
        assert_eq!(calculate_mean(&empty), 0.0);
        assert_eq!(calculate_median(&empty), 0.0);
        assert_eq!(calculate_mean(None::<&Vec<Cell>>), 0.0);
        assert_eq!(calculate_median(None::<&Vec<Cell>>), 0.0);
        assert_eq!(calculate_median(&Vec::<Row>::new()), 0.0);

        for op in [ReduceOp::Sum, ReduceOp::Mean, ReduceOp::Median] {
            assert_eq!(reduce(&empty, op), 0.0);
            assert_eq!(reduce(None::<&Vec<Cell>>, op), 0.0);
        }
    }

    #[test]
    fn aggregations_refuse_dataframes() {
        let df: Vec<Row> = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(find_total(&df), 0.0);
        assert_eq!(calculate_mean(&df), 0.0);
        assert_eq!(calculate_median(&df), 0.0);
    }

    #[test]
    fn mean_divides_by_valid_count() {
        assert_eq!(calculate_mean(&dataset("[2, 4, 6]")), 4.0);
        assert_eq!(calculate_mean(&dataset(r#"["2", "x", 6]"#)), 4.0);
        assert_eq!(calculate_mean(&dataset(r#"["x", "y"]"#)), 0.0);
    }

    #[test]
    fn median_handles_odd_and_even_counts() {
        assert_eq!(calculate_median(&dataset("[3, 1, 2]")), 2.0);
        assert_eq!(calculate_median(&dataset("[1, 2, 3, 4]")), 2.5);
        assert_eq!(calculate_median(&dataset(r#"["10", "x", -5, "2.5"]"#)), 2.5);
        assert_eq!(calculate_median(&dataset(r#"[7]"#)), 7.0);
        assert_eq!(calculate_median(&dataset(r#"["nope"]"#)), 0.0);
    }

    #[test]
    fn median_sorts_numerically_not_lexically() {
        assert_eq!(calculate_median(&dataset(r#"["10", "9", "100"]"#)), 10.0);
    }

    #[test]
    fn reduce_dispatches_by_op() {
        let ds = dataset("[1, 2, 3, 10]");
        assert_eq!(reduce(&ds, ReduceOp::Sum), 16.0);
        assert_eq!(reduce(&ds, ReduceOp::Mean), 4.0);
        assert_eq!(reduce(&ds, ReduceOp::Median), 2.5);
    }
}
