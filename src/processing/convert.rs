//! In-place numeric conversion of a dataframe column.

use crate::types::{Cell, Row};

/// Rewrite every truthy, valid-number cell in `column` as [`Cell::Number`].
///
/// Mutates `dataframe` in place and returns the number of cells rewritten. Falsy cells (`0`,
/// `NaN`, `""`), invalid numerals, and rows too short to have `column` are left untouched.
///
/// Cells that are already numbers are rewritten (and counted) again with the same value, so a
/// second call reports the same count as the first without changing the data.
pub fn convert_to_number(dataframe: &mut [Row], column: usize) -> usize {
    let mut count = 0;
    for row in dataframe.iter_mut() {
        let Some(cell) = row.get_mut(column) else {
            continue;
        };
        if !cell.is_truthy() {
            continue;
        }
        if let Some(v) = cell.as_number() {
            *cell = Cell::Number(v);
            count += 1;
        }
    }
    count
}
