//! Dense price tables.
//!
//! Stored row-major in a single contiguous buffer. Rows follow the
//! volatility axis and columns follow the spot axis.

use std::ops::Index;

use pricer_core::math::round_to;

/// A rectangular table of option prices.
///
/// Indexed as `table[(row, col)]` with `row` on the volatility axis and
/// `col` on the spot axis.
///
/// # Examples
/// ```
/// use pricer_risk::scenarios::PriceTable;
///
/// let table = PriceTable::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(table[(1, 0)], 3.0);
/// assert_eq!(table.row(0), Some(&[1.0, 2.0][..]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    values: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl PriceTable {
    /// Creates a table from a row-major buffer.
    ///
    /// Returns `None` if `values.len() != n_rows * n_cols`.
    pub fn from_row_major(values: Vec<f64>, n_rows: usize, n_cols: usize) -> Option<Self> {
        if values.len() != n_rows.checked_mul(n_cols)? {
            return None;
        }
        Some(Self {
            values,
            n_rows,
            n_cols,
        })
    }

    /// Wraps a buffer the caller filled with exactly `n_rows * n_cols` values.
    pub(crate) fn from_filled(values: Vec<f64>, n_rows: usize, n_cols: usize) -> Self {
        debug_assert_eq!(values.len(), n_rows * n_cols);
        Self {
            values,
            n_rows,
            n_cols,
        }
    }

    /// Creates a table from nested rows.
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != n_cols) {
            return None;
        }
        let values = rows.into_iter().flatten().collect();
        Self::from_row_major(values, n_rows, n_cols)
    }

    /// Number of rows (volatility points).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (spot points).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.n_rows {
            let start = row * self.n_cols;
            Some(&self.values[start..start + self.n_cols])
        } else {
            None
        }
    }

    /// Iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on zero; an empty table has no rows either way
        self.values.chunks_exact(self.n_cols.max(1))
    }

    /// Copy as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Copy with every value rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            values: self.values.iter().map(|&v| round_to(v, decimals)).collect(),
            n_rows: self.n_rows,
            n_cols: self.n_cols,
        }
    }
}

impl Index<(usize, usize)> for PriceTable {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.n_rows && col < self.n_cols,
            "index ({}, {}) out of range for {}x{} table",
            row,
            col,
            self.n_rows,
            self.n_cols
        );
        &self.values[row * self.n_cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PriceTable {
        PriceTable::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let table = sample();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 3);
        assert_eq!(table.rows().flatten().count(), 6);
    }

    #[test]
    fn test_index() {
        let table = sample();
        assert_eq!(table[(0, 2)], 3.0);
        assert_eq!(table[(1, 0)], 4.0);
        assert_eq!(table[(1, 1)], 5.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let table = sample();
        let _ = table[(0, 3)];
    }

    #[test]
    fn test_row() {
        let table = sample();
        assert_eq!(table.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(table.row(2), None);
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let table = PriceTable::from_rows(rows.clone()).unwrap();
        assert_eq!(table.to_rows(), rows);
        assert_eq!(table.rows().count(), 3);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(PriceTable::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_none());
    }

    #[test]
    fn test_row_major_length_checked() {
        assert!(PriceTable::from_row_major(vec![1.0; 6], 2, 3).is_some());
        assert!(PriceTable::from_row_major(vec![1.0; 5], 2, 3).is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = PriceTable::from_rows(Vec::new()).unwrap();
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.rows().count(), 0);
    }

    #[test]
    fn test_rounded() {
        let table = PriceTable::from_rows(vec![vec![10.4506, 5.5735]]).unwrap();
        let rounded = table.rounded(2);
        assert_eq!(rounded.to_rows(), vec![vec![10.45, 5.57]]);
        // Original untouched
        assert_eq!(table[(0, 0)], 10.4506);
    }
}
