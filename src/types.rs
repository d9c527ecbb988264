//! Core data model types.
//!
//! A grid is either a flat [`Dataset`](Grid::Dataset) of [`Cell`]s or a row-major
//! [`Dataframe`](Grid::Dataframe) of [`Row`]s. [`data_dimensions`] is the single place that
//! decides which of the two a value is; aggregation and flattening dispatch on its [`Shape`].

use serde::{Deserialize, Serialize};

use crate::validation;

/// A single scalar value in a dataset or dataframe.
///
/// Cells loaded from text are always [`Cell::Text`]; [`crate::processing::convert_to_number`]
/// rewrites numeric-looking text into [`Cell::Number`] in place.
///
/// Serializes untagged, so a JSON array like `[1, "x"]` maps to `[Number(1.0), Text("x")]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// 64-bit float.
    Number(f64),
    /// Raw text, possibly numeric-looking.
    Text(String),
}

impl Cell {
    /// Returns `true` if this cell is a number or numeric-looking text.
    ///
    /// See [`validation::valid_number`] for the accepted grammar.
    pub fn is_valid_number(&self) -> bool {
        validation::valid_number(self)
    }

    /// Coerce the cell to `f64` if it is a valid number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => validation::parse_numeral(s),
        }
    }

    /// Truthiness of a loosely typed scalar.
    ///
    /// `0`, `-0`, `NaN` and the empty string are falsy. Everything else, including the text `"0"`,
    /// is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Cell::Number(v) => *v != 0.0 && !v.is_nan(),
            Cell::Text(s) => !s.is_empty(),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Number(f64::from(v))
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_owned())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// One dataframe row.
pub type Row = Vec<Cell>;

/// Borrowed view over either a 1-D dataset or a 2-D dataframe.
///
/// Functions that accept `impl Into<Grid>` can be called with `&Vec<Cell>`, `&[Row]`, and so on.
/// `None` stands in for an absent input and always inspects as [`Shape::Empty`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grid<'a> {
    /// Flat sequence of cells.
    Dataset(&'a [Cell]),
    /// Sequence of rows.
    Dataframe(&'a [Row]),
}

impl<'a> Grid<'a> {
    /// Inspect this grid's shape.
    pub fn shape(&self) -> Shape {
        match self {
            Grid::Dataset(cells) if cells.is_empty() => Shape::Empty,
            Grid::Dataset(cells) => Shape::Dataset { rows: cells.len() },
            Grid::Dataframe(rows) => match rows.first() {
                None => Shape::Empty,
                Some(first) => Shape::Dataframe {
                    rows: rows.len(),
                    cols: first.len(),
                },
            },
        }
    }

    /// Returns the cells if this is a non-empty dataset.
    pub(crate) fn as_dataset(&self) -> Option<&'a [Cell]> {
        match (*self, self.shape()) {
            (Grid::Dataset(cells), Shape::Dataset { .. }) => Some(cells),
            _ => None,
        }
    }
}

impl<'a> From<&'a [Cell]> for Grid<'a> {
    fn from(cells: &'a [Cell]) -> Self {
        Grid::Dataset(cells)
    }
}

impl<'a> From<&'a Vec<Cell>> for Grid<'a> {
    fn from(cells: &'a Vec<Cell>) -> Self {
        Grid::Dataset(cells.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [Cell; N]> for Grid<'a> {
    fn from(cells: &'a [Cell; N]) -> Self {
        Grid::Dataset(cells.as_slice())
    }
}

impl<'a> From<&'a [Row]> for Grid<'a> {
    fn from(rows: &'a [Row]) -> Self {
        Grid::Dataframe(rows)
    }
}

impl<'a> From<&'a Vec<Row>> for Grid<'a> {
    fn from(rows: &'a Vec<Row>) -> Self {
        Grid::Dataframe(rows.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [Row; N]> for Grid<'a> {
    fn from(rows: &'a [Row; N]) -> Self {
        Grid::Dataframe(rows.as_slice())
    }
}

impl<'a, T> From<Option<T>> for Grid<'a>
where
    T: Into<Grid<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Grid::Dataset(&[]),
        }
    }
}

/// Result of shape inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Absent or zero-length input.
    Empty,
    /// 1-D input with `rows` cells.
    Dataset { rows: usize },
    /// 2-D input; `cols` is the length of the first row.
    Dataframe { rows: usize, cols: usize },
}

impl Shape {
    /// Legacy `(rows, cols)` dimension pair, using `-1` for "not 2-D" and "absent".
    pub fn as_pair(&self) -> (isize, isize) {
        match *self {
            Shape::Empty => (-1, -1),
            Shape::Dataset { rows } => (rows as isize, -1),
            Shape::Dataframe { rows, cols } => (rows as isize, cols as isize),
        }
    }
}

/// Inspect whether `data` is empty, a dataset, or a dataframe.
pub fn data_dimensions<'a>(data: impl Into<Grid<'a>>) -> Shape {
    data.into().shape()
}

#[cfg(test)]
mod tests {
    use super::{data_dimensions, Cell, Grid, Row, Shape};

    fn cells(values: &[f64]) -> Vec<Cell> {
        values.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn absent_and_empty_inputs_are_empty() {
        assert_eq!(data_dimensions(None::<&Vec<Cell>>), Shape::Empty);
        assert_eq!(data_dimensions(None::<&Vec<Row>>).as_pair(), (-1, -1));
        assert_eq!(data_dimensions(&Vec::<Cell>::new()), Shape::Empty);
        assert_eq!(data_dimensions(&Vec::<Row>::new()).as_pair(), (-1, -1));
    }

    #[test]
    fn flat_input_is_a_dataset() {
        let ds = cells(&[1.0, 2.0, 3.0]);
        assert_eq!(data_dimensions(&ds), Shape::Dataset { rows: 3 });
        assert_eq!(data_dimensions(Some(&ds)).as_pair(), (3, -1));
    }

    #[test]
    fn nested_input_reports_first_row_width() {
        let df = vec![cells(&[1.0, 2.0]), cells(&[3.0, 4.0])];
        assert_eq!(data_dimensions(&df), Shape::Dataframe { rows: 2, cols: 2 });
        assert_eq!(data_dimensions(&df).as_pair(), (2, 2));

        let ragged = vec![cells(&[1.0]), cells(&[2.0, 3.0, 4.0])];
        assert_eq!(data_dimensions(&ragged).as_pair(), (2, 1));

        let no_cols: Vec<Row> = vec![vec![], vec![]];
        assert_eq!(data_dimensions(&no_cols), Shape::Dataframe { rows: 2, cols: 0 });
    }

    #[test]
    fn as_dataset_only_for_non_empty_flat_input() {
        let ds = cells(&[1.0]);
        let df = vec![ds.clone()];
        assert!(Grid::from(&ds).as_dataset().is_some());
        assert!(Grid::from(&df).as_dataset().is_none());
        assert!(Grid::from(&Vec::<Cell>::new()).as_dataset().is_none());
    }

    #[test]
    fn truthiness_matches_loose_scalar_rules() {
        assert!(!Cell::from(0.0).is_truthy());
        assert!(!Cell::from(-0.0).is_truthy());
        assert!(!Cell::Number(f64::NAN).is_truthy());
        assert!(!Cell::from("").is_truthy());
        assert!(Cell::from("0").is_truthy());
        assert!(Cell::from(" ").is_truthy());
        assert!(Cell::from(-1).is_truthy());
    }

    #[test]
    fn untagged_serde_maps_json_scalars() {
        let parsed: Vec<Cell> = serde_json::from_str(r#"[1, "x", "2.5", -0.5]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Cell::Number(1.0),
                Cell::Text("x".to_string()),
                Cell::Text("2.5".to_string()),
                Cell::Number(-0.5),
            ]
        );
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"[1.0,"x","2.5",-0.5]"#);
    }
}
