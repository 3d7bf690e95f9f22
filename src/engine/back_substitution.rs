use crate::engine::step::Trace;
use crate::matrix::matrix::{Cell, Matrix};
use crate::matrix::matrix_aug::AugmentedMatrix;
use crate::utils::format_number;

// Rows past `variables` are all zero once the solution is known to be unique.
pub fn back_substitute<T: Cell>(matrix: &AugmentedMatrix<T>, tolerance: T) -> (Vec<T>, Trace<T>) {
    let n = matrix.variables();
    let mut x = vec![T::zero(); n];
    let mut trace = Trace::new();

    for i in (0..matrix.rows().min(n)).rev() {
        let rhs = matrix.rhs(i);
        let mut line = format!(
            "From equation R{}: X{} = {}",
            i + 1,
            i + 1,
            format_number(rhs.to_f64_lossy())
        );

        let mut sum = T::zero();
        for j in i + 1..n {
            let a = matrix.at(i, j);
            if a.abs() > tolerance {
                line += &format!(" - ({} * X{})", format_number(a.to_f64_lossy()), j + 1);
                sum = sum + a * x[j];
            }
        }

        let diag = matrix.at(i, i);
        x[i] = if diag.abs() > tolerance {
            (rhs - sum) / diag
        } else {
            rhs - sum
        };

        line += &format!(" = {}", format_number(x[i].to_f64_lossy()));
        trace.text(format!("Back-substitution: R{}", i + 1), vec![line]);
    }

    trace.text("Final Solution:", solution_lines(&x));
    (x, trace)
}

pub fn solution_lines<T: Cell>(x: &[T]) -> Vec<String> {
    x.iter()
        .enumerate()
        .map(|(i, v)| format!("X{} = {}", i + 1, format_number(v.to_f64_lossy())))
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
