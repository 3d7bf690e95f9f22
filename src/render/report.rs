use itertools::Itertools;
use serde::Serialize;
use std::fmt;

use crate::engine::back_substitution::solution_lines;
use crate::engine::classification::Classification;
use crate::engine::engine::Solution;
use crate::engine::engine_config::Strategy;
use crate::engine::step::Step;
use crate::matrix::matrix::{Cell, Matrix};
use crate::utils::format_number;

pub const CARD_DELAY_MS: u64 = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedStep {
    Matrix {
        title: String,
        cells: Vec<Vec<String>>,
        highlight: Option<usize>,
        delay_ms: u64,
    },
    Text {
        title: String,
        lines: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Unique { values: Vec<f64> },
    NoSolution,
    InfiniteSolutions,
}

impl Outcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Unique { .. } => None,
            Outcome::NoSolution => Some("You have no solutions."),
            Outcome::InfiniteSolutions => Some("You have infinite solutions."),
        }
    }

    pub fn color(&self) -> Option<&'static str> {
        match self {
            Outcome::Unique { .. } => None,
            Outcome::NoSolution => Some("#ff6b6b"),
            Outcome::InfiniteSolutions => Some("#ffa500"),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            Outcome::Unique { values } => solution_lines(values),
            _ => self.message().into_iter().map(String::from).collect(),
        }
    }
}

impl<T: Cell> From<&Classification<T>> for Outcome {
    fn from(classification: &Classification<T>) -> Self {
        match classification {
            Classification::Unique(x) => Outcome::Unique {
                values: x.iter().map(|v| v.to_f64_lossy()).collect(),
            },
            Classification::NoSolution => Outcome::NoSolution,
            Classification::InfiniteSolutions => Outcome::InfiniteSolutions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub method: Strategy,
    pub steps: Vec<RenderedStep>,
    pub result: Outcome,
}

impl Report {
    // forward elimination already ends on "Final Solution:"
    pub fn has_result_card(&self) -> bool {
        !(self.method == Strategy::ForwardOnly && matches!(self.result, Outcome::Unique { .. }))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Turns engine steps into cards, numbering matrix cards for their animation delay.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    step_index: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.step_index = 0;
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn render<T: Cell>(&mut self, solution: &Solution<T>) -> Report {
        let steps = solution
            .steps
            .iter()
            .map(|step| match step {
                Step::Matrix {
                    label,
                    matrix,
                    highlight,
                } => {
                    let delay_ms = self.step_index as u64 * CARD_DELAY_MS;
                    self.step_index += 1;
                    RenderedStep::Matrix {
                        title: label.clone(),
                        cells: matrix
                            .to_list()
                            .into_iter()
                            .map(|row| {
                                row.into_iter()
                                    .map(|v| format_number(v.to_f64_lossy()))
                                    .collect()
                            })
                            .collect(),
                        highlight: *highlight,
                        delay_ms,
                    }
                }
                Step::Text { label, lines } => RenderedStep::Text {
                    title: label.clone(),
                    lines: lines.clone(),
                },
            })
            .collect();

        Report {
            method: solution.strategy,
            steps,
            result: Outcome::from(&solution.classification),
        }
    }
}

fn write_matrix(
    f: &mut fmt::Formatter<'_>,
    cells: &[Vec<String>],
    highlight: Option<usize>,
) -> fmt::Result {
    let shown: Vec<Vec<String>> = cells
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(j, c)| {
                    if Some(j) == highlight {
                        format!("[{}]", c)
                    } else {
                        c.clone()
                    }
                })
                .collect()
        })
        .collect();

    let cols = shown.iter().map(|r| r.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..cols)
        .map(|j| {
            shown
                .iter()
                .filter_map(|r| r.get(j))
                .map(|c| c.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in &shown {
        let padded = row
            .iter()
            .enumerate()
            .map(|(j, c)| format!("{:>width$}", c, width = widths[j]))
            .collect_vec();
        match padded.split_last() {
            Some((rhs, left)) if !left.is_empty() => {
                writeln!(f, "  {} | {}", left.join("  "), rhs)?
            }
            _ => writeln!(f, "  {}", padded.join("  "))?,
        }
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match step {
                RenderedStep::Matrix {
                    title,
                    cells,
                    highlight,
                    ..
                } => {
                    writeln!(f, "{}", title)?;
                    write_matrix(f, cells, *highlight)?;
                }
                RenderedStep::Text { title, lines } => {
                    writeln!(f, "{}", title)?;
                    for line in lines {
                        writeln!(f, "  {}", line)?;
                    }
                }
            }
            writeln!(f)?;
        }

        if self.has_result_card() {
            writeln!(f, "Result")?;
            for line in self.result.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::engine::solve;
    use crate::matrix::matrix_aug::AugmentedMatrix;
    use serde_json::json;

    fn report(rows: Vec<Vec<f64>>, strategy: Strategy) -> Report {
        let solution = solve(&AugmentedMatrix::from_list(rows), strategy).unwrap();
        Renderer::new().render(&solution)
    }

    #[test]
    fn test_render_cards() {
        let report = report(
            vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]],
            Strategy::ForwardOnly,
        );

        assert_eq!(report.steps.len(), 10);
        assert_eq!(
            report.steps[0],
            RenderedStep::Matrix {
                title: "Initial Augmented Matrix (A | b):".into(),
                cells: vec![vec!["2".into(), "1".into(), "5".into()], vec![
                    "1".into(),
                    "-1".into(),
                    "1".into()
                ]],
                highlight: None,
                delay_ms: 0,
            }
        );
        match &report.steps[2] {
            RenderedStep::Matrix {
                cells, delay_ms, ..
            } => {
                assert_eq!(cells[0], vec!["1", "0.5", "2.5"]);
                assert_eq!(*delay_ms, 2 * CARD_DELAY_MS);
            }
            other => panic!("unexpected card {:?}", other),
        }
        assert_eq!(
            report.result,
            Outcome::Unique {
                values: vec![2.0, 1.0]
            }
        );
        assert!(!report.has_result_card());
    }

    #[test]
    fn test_render_rounds_ties_up() {
        let report = report(
            vec![vec![16.0, 1.0, 17.0], vec![1.0, 1.0, 2.0]],
            Strategy::ForwardOnly,
        );
        match &report.steps[2] {
            RenderedStep::Matrix { title, cells, .. } => {
                assert_eq!(title, "(1/16) × R1 → R1");
                assert_eq!(cells[0], vec!["1", "0.063", "1.063"]);
            }
            other => panic!("unexpected card {:?}", other),
        }
    }

    #[test]
    fn test_renderer_counts_matrix_cards() {
        let solution = solve(
            &AugmentedMatrix::from_list(vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]),
            Strategy::ForwardOnly,
        )
        .unwrap();
        let mut renderer = Renderer::new();
        renderer.render(&solution);
        assert_eq!(renderer.step_index(), 7);
        renderer.reset();
        assert_eq!(renderer.step_index(), 0);
    }

    #[test]
    fn test_outcome_messages() {
        let report = report(
            vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 7.0]],
            Strategy::FullReduction,
        );
        assert_eq!(report.result, Outcome::NoSolution);
        assert_eq!(report.result.message(), Some("You have no solutions."));
        assert_eq!(report.result.color(), Some("#ff6b6b"));
        assert!(report.has_result_card());

        assert_eq!(
            Outcome::InfiniteSolutions.lines(),
            vec!["You have infinite solutions."]
        );
        assert_eq!(Outcome::InfiniteSolutions.color(), Some("#ffa500"));
        assert_eq!(
            Outcome::Unique {
                values: vec![2.0, 0.5]
            }
            .lines(),
            vec!["X1 = 2", "X2 = 0.5"]
        );
    }

    #[test]
    fn test_json_contract() {
        let report = report(
            vec![vec![1.0, 1.0, 2.0], vec![2.0, 2.0, 4.0]],
            Strategy::FullReduction,
        );
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["method"], json!("full_reduction"));
        assert_eq!(value["result"], json!({ "kind": "infinite_solutions" }));
        assert_eq!(value["steps"][0]["kind"], json!("matrix"));
        assert_eq!(value["steps"][1]["highlight"], json!(0));
        assert_eq!(value["steps"][0]["highlight"], json!(null));

        let report = self::report(
            vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]],
            Strategy::ForwardOnly,
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value["result"],
            json!({ "kind": "unique", "values": [2.0, 1.0] })
        );
        assert_eq!(
            value["steps"][9],
            json!({ "kind": "text", "title": "Final Solution:", "lines": ["X1 = 2", "X2 = 1"] })
        );
        assert!(report.to_json().unwrap().contains("\"Final Solution:\""));
    }

    #[test]
    fn test_display() {
        let report = report(
            vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]],
            Strategy::ForwardOnly,
        );
        let text = report.to_string();
        assert!(text.starts_with("Initial Augmented Matrix (A | b):\n  2   1 | 5\n  1  -1 | 1\n"));
        assert!(text.contains("Start submatrix (Pivot column 1)\n  [2]   1 | 5\n"));
        assert!(text.contains("  From equation R1: X1 = 2.5 - (0.5 * X2) = 2\n"));
        assert!(!text.contains("Result"));

        let report = self::report(vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 7.0]], Strategy::ForwardOnly);
        assert!(report
            .to_string()
            .ends_with("Result\n  You have no solutions.\n"));
    }
}
