use crate::error::{Result, SolveError};
use crate::matrix::matrix::{Cell, Matrix};

// Augmented matrix (A | b): the last column holds the right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T = f64> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: Cell> Matrix<T> for AugmentedMatrix<T> {
    fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    fn filled(rows: usize, cols: usize, value: T) -> Self {
        AugmentedMatrix {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    // Short rows are padded with zeros, like empty input fields.
    fn from_list(lines: Vec<Vec<T>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        AugmentedMatrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let missing = cols - l.len();
                    l.into_iter()
                        .chain(std::iter::repeat(T::zero()).take(missing))
                })
                .collect(),
        }
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    #[inline(always)]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds");
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(i < self.rows && j < self.rows, "row swap {i} <-> {j} out of bounds");
        if i == j {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(i * self.cols + k, j * self.cols + k);
        }
    }

    fn scale_row(&mut self, i: usize, factor: T) {
        assert!(i < self.rows, "row {i} out of bounds");
        for cell in &mut self.cells[i * self.cols..(i + 1) * self.cols] {
            *cell = *cell * factor;
        }
    }

    fn divide_row(&mut self, i: usize, divisor: T) {
        assert!(i < self.rows, "row {i} out of bounds");
        for cell in &mut self.cells[i * self.cols..(i + 1) * self.cols] {
            *cell = *cell / divisor;
        }
    }

    fn add_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        assert!(
            target < self.rows && source < self.rows,
            "row combination {source} -> {target} out of bounds"
        );
        for k in 0..self.cols {
            let value = self.cells[source * self.cols + k];
            let cell = &mut self.cells[target * self.cols + k];
            *cell = *cell + factor * value;
        }
    }

    // Only the coefficient block is inspected: the right-hand side column
    // never holds a pivot.
    fn is_rref(&self, tolerance: T) -> bool {
        let mut lead = None;

        for i in 0..self.rows {
            let pivot_col_opt = (0..self.variables()).find(|&c| self.at(i, c).abs() > tolerance);

            match pivot_col_opt {
                None => {
                    for r in i + 1..self.rows {
                        if !self.is_left_zero(r, tolerance) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if (self.at(i, pivot_col) - T::one()).abs() > tolerance {
                        return false;
                    }

                    for r in 0..self.rows {
                        if r != i && self.at(r, pivot_col).abs() > tolerance {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}

impl<T: Cell> AugmentedMatrix<T> {
    pub fn try_from_rows(lines: Vec<Vec<T>>) -> Result<Self> {
        let expected = lines.first().map(|l| l.len()).unwrap_or(0);
        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != expected) {
            return Err(SolveError::RaggedRow {
                row,
                expected,
                got: line.len(),
            });
        }
        Ok(<Self as Matrix<T>>::from_list(lines))
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn variables(&self) -> usize {
        self.cols.saturating_sub(1)
    }

    pub fn rhs(&self, row: usize) -> T {
        self.at(row, self.cols - 1)
    }

    pub fn is_left_zero(&self, row: usize, tolerance: T) -> bool {
        self.row(row)[..self.variables()]
            .iter()
            .all(|x| x.abs() < tolerance)
    }

    // A·x − b
    pub fn residuals(&self, x: &[T]) -> Vec<T> {
        assert_eq!(x.len(), self.variables(), "one value per variable expected");
        (0..self.rows)
            .map(|r| {
                let row = self.row(r);
                row[..self.variables()]
                    .iter()
                    .zip(x.iter())
                    .fold(T::zero(), |acc, (a, v)| acc + *a * *v)
                    - row[self.variables()]
            })
            .collect()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_list() {
        let m = AugmentedMatrix::<f64>::new(2, 3);
        assert_eq!(m.to_list(), vec![vec![0.0; 3], vec![0.0; 3]]);
        assert_eq!(m.variables(), 2);

        let m = AugmentedMatrix::filled(1, 2, 7.0);
        assert_eq!(m.to_list(), vec![vec![7.0, 7.0]]);

        let m = AugmentedMatrix::from_list(vec![vec![1.0, 2.0, 3.0], vec![4.0]]);
        assert_eq!(m.to_list(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 0.0]]);
        assert_eq!(m.rhs(0), 3.0);
        assert_eq!(m.at(1, 0), 4.0);
    }

    #[test]
    fn test_try_from_rows() {
        assert!(AugmentedMatrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).is_ok());
        assert_eq!(
            AugmentedMatrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(SolveError::RaggedRow {
                row: 1,
                expected: 2,
                got: 1
            })
        );
        assert!(AugmentedMatrix::<f64>::try_from_rows(vec![])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_copy_is_deep() {
        let original = AugmentedMatrix::from_list(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let mut copy = original.clone();
        copy.scale_row(0, 10.0);
        assert_eq!(original.to_list(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(copy.to_list(), vec![vec![10.0, 20.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_row_operations() {
        let mut m = AugmentedMatrix::from_list(vec![
            vec![2.0, 1.0, 5.0],
            vec![1.0, -1.0, 1.0],
            vec![0.0, 3.0, 6.0],
        ]);

        m.swap_rows(0, 2);
        assert_eq!(m.row(0), &[0.0, 3.0, 6.0]);
        assert_eq!(m.row(2), &[2.0, 1.0, 5.0]);

        m.divide_row(0, 3.0);
        assert_eq!(m.row(0), &[0.0, 1.0, 2.0]);

        m.scale_row(1, -2.0);
        assert_eq!(m.row(1), &[-2.0, 2.0, -2.0]);

        m.add_scaled_row(1, 2, 1.0);
        assert_eq!(m.row(1), &[0.0, 3.0, 3.0]);
        assert_eq!(m.row(2), &[2.0, 1.0, 5.0]);
    }

    #[test]
    #[should_panic]
    fn test_swap_out_of_bounds() {
        let mut m = AugmentedMatrix::<f64>::new(2, 2);
        m.swap_rows(0, 2);
    }

    #[test]
    fn test_is_rref() {
        let eps = 1e-12;
        let m = AugmentedMatrix::from_list(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 1.0]]);
        assert!(m.is_rref(eps));

        let m = AugmentedMatrix::from_list(vec![vec![1.0, 0.5, 2.5], vec![0.0, 1.0, 1.0]]);
        assert!(!m.is_rref(eps));

        let m = AugmentedMatrix::from_list(vec![vec![1.0, 2.0, 2.0], vec![0.0, 0.0, 0.0]]);
        assert!(m.is_rref(eps));

        let m = AugmentedMatrix::from_list(vec![vec![0.0, 0.0, 1.0], vec![1.0, 0.0, 0.0]]);
        assert!(!m.is_rref(eps));

        let m = AugmentedMatrix::from_list(vec![vec![2.0, 0.0, 1.0]]);
        assert!(!m.is_rref(eps));
    }

    #[test]
    fn test_residuals() {
        let m = AugmentedMatrix::from_list(vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]);
        assert_eq!(m.residuals(&[2.0, 1.0]), vec![0.0, 0.0]);
        assert_eq!(m.residuals(&[0.0, 0.0]), vec![-5.0, -1.0]);
        assert!(!m.is_left_zero(0, 1e-12));
    }
}
