use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Build matrix first.")]
    EmptyMatrix,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown method `{0}` (expected `gauss` or `jordan`)")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, SolveError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(SolveError::EmptyMatrix.to_string(), "Build matrix first.");
        assert_eq!(
            SolveError::RaggedRow {
                row: 1,
                expected: 3,
                got: 2
            }
            .to_string(),
            "row 1 has 2 cells, expected 3"
        );
        assert_eq!(
            SolveError::UnknownStrategy("lu".into()).to_string(),
            "unknown method `lu` (expected `gauss` or `jordan`)"
        );
    }
}
