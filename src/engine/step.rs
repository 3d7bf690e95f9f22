use crate::matrix::matrix::Cell;
use crate::matrix::matrix_aug::AugmentedMatrix;

// Snapshots own their matrix copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T = f64> {
    Matrix {
        label: String,
        matrix: AugmentedMatrix<T>,
        highlight: Option<usize>,
    },
    Text {
        label: String,
        lines: Vec<String>,
    },
}

impl<T> Step<T> {
    pub fn label(&self) -> &str {
        match self {
            Step::Matrix { label, .. } | Step::Text { label, .. } => label,
        }
    }

    pub fn is_matrix(&self) -> bool {
        matches!(self, Step::Matrix { .. })
    }
}

// Append-only step log
#[derive(Debug, Clone)]
pub struct Trace<T = f64> {
    steps: Vec<Step<T>>,
}

impl<T: Cell> Default for Trace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Cell> Trace<T> {
    pub fn new() -> Self {
        Trace { steps: vec![] }
    }

    pub fn snapshot(&mut self, label: impl Into<String>, matrix: &AugmentedMatrix<T>) {
        self.push_matrix(label.into(), matrix, None);
    }

    pub fn snapshot_highlighted(
        &mut self,
        label: impl Into<String>,
        matrix: &AugmentedMatrix<T>,
        col: usize,
    ) {
        self.push_matrix(label.into(), matrix, Some(col));
    }

    pub fn text(&mut self, label: impl Into<String>, lines: Vec<String>) {
        let label = label.into();
        log::debug!("{}: {}", label, lines.join("; "));
        self.steps.push(Step::Text { label, lines });
    }

    fn push_matrix(&mut self, label: String, matrix: &AugmentedMatrix<T>, highlight: Option<usize>) {
        log::debug!("{}", label);
        self.steps.push(Step::Matrix {
            label,
            matrix: matrix.clone(),
            highlight,
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn extend(&mut self, other: Trace<T>) {
        self.steps.extend(other.steps);
    }

    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
