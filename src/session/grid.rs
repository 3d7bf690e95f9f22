use itertools::Itertools;

use crate::error::{Result, SolveError};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_aug::AugmentedMatrix;
use crate::utils::parse_cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputGrid {
    variables: usize,
    equations: usize,
    cells: Vec<Vec<String>>,
}

impl InputGrid {
    pub fn build(variables: usize, equations: usize) -> Self {
        if variables == 0 || equations == 0 {
            log::warn!(
                "grid of {} variable(s) x {} equation(s) requested, using at least 1 of each",
                variables,
                equations
            );
        }
        let variables = variables.max(1);
        let equations = equations.max(1);

        InputGrid {
            variables,
            equations,
            cells: vec![vec![String::new(); variables + 1]; equations],
        }
    }

    pub fn variables(&self) -> usize {
        self.variables
    }

    pub fn equations(&self) -> usize {
        self.equations
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(|s| s.as_str())
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) -> Result<()> {
        let (rows, cols) = (self.equations, self.variables + 1);
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(SolveError::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            })?;
        *cell = value.into();
        Ok(())
    }

    pub fn set_row<S: AsRef<str>>(&mut self, row: usize, values: &[S]) -> Result<()> {
        for (col, value) in values.iter().take(self.variables + 1).enumerate() {
            self.set(row, col, value.as_ref())?;
        }
        Ok(())
    }

    pub fn read(&self) -> AugmentedMatrix<f64> {
        Matrix::from_list(
            self.cells
                .iter()
                .map(|row| row.iter().map(|c| parse_cell(c)).collect())
                .collect(),
        )
    }

    // e.g. `X1 + X2 =`
    pub fn labels(&self) -> String {
        (1..=self.variables).map(|j| format!("X{}", j)).join(" + ") + " ="
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let grid = InputGrid::build(3, 2);
        assert_eq!(grid.variables(), 3);
        assert_eq!(grid.equations(), 2);
        assert_eq!(grid.read().to_list(), vec![vec![0.0; 4], vec![0.0; 4]]);
        assert_eq!(grid.labels(), "X1 + X2 + X3 =");

        let grid = InputGrid::build(0, 0);
        assert_eq!(grid.variables(), 1);
        assert_eq!(grid.equations(), 1);
        assert_eq!(grid.labels(), "X1 =");
    }

    #[test]
    fn test_read_coerces_bad_input() {
        let mut grid = InputGrid::build(2, 2);
        grid.set_row(0, &["2", "1", "5"]).unwrap();
        grid.set_row(1, &["1", "abc", ""]).unwrap();
        assert_eq!(
            grid.read().to_list(),
            vec![vec![2.0, 1.0, 5.0], vec![1.0, 0.0, 0.0]]
        );
        assert_eq!(grid.get(1, 1), Some("abc"));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut grid = InputGrid::build(2, 2);
        assert_eq!(
            grid.set(2, 0, "1"),
            Err(SolveError::CellOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(grid.set(0, 3, "1").is_err());
        assert_eq!(grid.get(5, 5), None);

        // extra fields are dropped
        grid.set_row(0, &["1", "2", "3", "4"]).unwrap();
        assert_eq!(grid.read().row(0), &[1.0, 2.0, 3.0]);
    }
}
