use crate::matrix::matrix::{Cell, Matrix};
use crate::matrix::matrix_aug::AugmentedMatrix;

#[derive(Debug, Clone, PartialEq)]
pub enum Classification<T = f64> {
    Unique(Vec<T>),
    NoSolution,
    InfiniteSolutions,
}

impl<T> Classification<T> {
    pub fn values(&self) -> Option<&[T]> {
        match self {
            Classification::Unique(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, Classification::Unique(_))
    }
}

// Shape of a reduced matrix before any values are recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Inconsistent,
    Deficient { pivots: usize },
    Full,
}

// A row `0 … 0 | c` with `c ≠ 0` wins over any pivot count.
pub fn rank<T: Cell>(matrix: &AugmentedMatrix<T>, tolerance: T) -> Rank {
    let mut pivots = 0;

    for i in 0..matrix.rows() {
        let left_zero = matrix.is_left_zero(i, tolerance);
        let rhs_non_zero = matrix.rhs(i).abs() > tolerance;

        if left_zero && rhs_non_zero {
            log::debug!("R{} reads 0 = {}", i + 1, matrix.rhs(i));
            return Rank::Inconsistent;
        }
        if !left_zero {
            pivots += 1;
        }
    }

    if pivots < matrix.variables() {
        Rank::Deficient { pivots }
    } else {
        Rank::Full
    }
}

pub fn read_reduced<T: Cell>(matrix: &AugmentedMatrix<T>, tolerance: T) -> Vec<T> {
    (0..matrix.rows())
        .filter(|&i| !(matrix.is_left_zero(i, tolerance) && matrix.rhs(i).abs() < tolerance))
        .map(|i| matrix.rhs(i))
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
