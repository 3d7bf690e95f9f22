use crate::engine::back_substitution::back_substitute;
use crate::engine::classification::{rank, read_reduced, Classification, Rank};
use crate::engine::engine_config::{EngineConfig, Strategy};
use crate::engine::step::{Step, Trace};
use crate::error::{Result, SolveError};
use crate::matrix::matrix::{Cell, Matrix};
use crate::matrix::matrix_aug::AugmentedMatrix;
use crate::utils::format_number;

#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T = f64> {
    pub strategy: Strategy,
    pub steps: Vec<Step<T>>,
    pub matrix: AugmentedMatrix<T>,
    pub classification: Classification<T>,
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn solve<T: Cell>(&self, input: &AugmentedMatrix<T>) -> Result<Solution<T>> {
        if input.is_empty() {
            return Err(SolveError::EmptyMatrix);
        }

        let tolerance = T::from_f64_lossy(self.config.tolerance);
        let (matrix, mut trace) = self.reduce(input);

        let classification = match rank(&matrix, tolerance) {
            Rank::Inconsistent => Classification::NoSolution,
            Rank::Deficient { .. } => Classification::InfiniteSolutions,
            Rank::Full => match self.config.strategy {
                Strategy::FullReduction => Classification::Unique(read_reduced(&matrix, tolerance)),
                Strategy::ForwardOnly => {
                    let (x, substitution) = back_substitute(&matrix, tolerance);
                    trace.extend(substitution);
                    Classification::Unique(x)
                }
            },
        };

        log::info!(
            "{}x{} system solved with {}: {:?} ({} steps)",
            input.rows(),
            input.variables(),
            self.config.strategy,
            classification,
            trace.len()
        );

        Ok(Solution {
            strategy: self.config.strategy,
            steps: trace.into_steps(),
            matrix,
            classification,
        })
    }

    // Pivots are taken in scan order, not by magnitude.
    pub fn reduce<T: Cell>(&self, input: &AugmentedMatrix<T>) -> (AugmentedMatrix<T>, Trace<T>) {
        let tolerance = T::from_f64_lossy(self.config.tolerance);
        let mut a = input.clone();
        let mut trace = Trace::new();
        trace.snapshot("Initial Augmented Matrix (A | b):", &a);

        let n = a.rows();
        let coefficients = a.variables();
        let mut pivot_row = 0;
        let mut start_col = 0;

        while pivot_row < n && start_col < coefficients {
            let Some(col) = select_pivot_col(&a, start_col, tolerance) else {
                break;
            };
            let Some(row) = select_pivot_row(&a, col, pivot_row, tolerance) else {
                // nothing left in this column for the remaining rows
                start_col = col + 1;
                continue;
            };
            log::debug!("pivot at R{} C{}", row + 1, col + 1);

            trace.snapshot_highlighted(format!("Start submatrix (Pivot column {})", col + 1), &a, col);

            if row != pivot_row {
                a.swap_rows(row, pivot_row);
                trace.snapshot(format!("Swap R{} ↔ R{}", row + 1, pivot_row + 1), &a);
            }

            let pivot = a.at(pivot_row, col);
            if pivot.abs() > tolerance && (pivot - T::one()).abs() > tolerance {
                a.divide_row(pivot_row, pivot);
                trace.snapshot(
                    format!(
                        "(1/{}) × R{} → R{}",
                        format_number(pivot.to_f64_lossy()),
                        pivot_row + 1,
                        pivot_row + 1
                    ),
                    &a,
                );
            }

            let first = match self.config.strategy {
                Strategy::FullReduction => 0,
                Strategy::ForwardOnly => pivot_row + 1,
            };
            for r in first..n {
                if r == pivot_row {
                    continue;
                }
                let factor = -a.at(r, col);
                if factor.abs() < tolerance {
                    continue;
                }
                a.add_scaled_row(r, pivot_row, factor);
                trace.snapshot(
                    format!(
                        "{} × R{} + R{} → R{}",
                        format_number(factor.to_f64_lossy()),
                        pivot_row + 1,
                        r + 1,
                        r + 1
                    ),
                    &a,
                );
            }

            pivot_row += 1;
            start_col = col + 1;
        }

        let label = match self.config.strategy {
            Strategy::FullReduction => "Final Reduced Row-Echelon Form:",
            Strategy::ForwardOnly => "Final Row-Echelon Form:",
        };
        trace.snapshot(label, &a);

        (a, trace)
    }
}

pub fn solve<T: Cell>(matrix: &AugmentedMatrix<T>, strategy: Strategy) -> Result<Solution<T>> {
    Engine::new(EngineConfig::new(strategy)).solve(matrix)
}

// First coefficient column, from `start_col` on, with a non-negligible entry in any row.
fn select_pivot_col<T: Cell>(a: &AugmentedMatrix<T>, start_col: usize, tolerance: T) -> Option<usize> {
    (start_col..a.variables()).find(|&c| (0..a.rows()).any(|r| a.at(r, c).abs() > tolerance))
}

fn select_pivot_row<T: Cell>(
    a: &AugmentedMatrix<T>,
    col: usize,
    start_row: usize,
    tolerance: T,
) -> Option<usize> {
    (start_row..a.rows()).find(|&r| a.at(r, col).abs() > tolerance)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
