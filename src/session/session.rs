use crate::engine::engine::Engine;
use crate::engine::engine_config::{EngineConfig, Strategy};
use crate::error::{Result, SolveError};
use crate::render::report::{Renderer, Report};
use crate::session::grid::InputGrid;

#[derive(Debug, Clone, Default)]
pub struct Session {
    strategy: Strategy,
    grid: Option<InputGrid>,
    output: Option<Report>,
    renderer: Renderer,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn grid(&self) -> Option<&InputGrid> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut InputGrid> {
        self.grid.as_mut()
    }

    pub fn output(&self) -> Option<&Report> {
        self.output.as_ref()
    }

    pub fn build(&mut self, variables: usize, equations: usize) -> &mut InputGrid {
        self.output = None;
        self.grid.insert(InputGrid::build(variables, equations))
    }

    pub fn solve(&mut self) -> Result<&Report> {
        self.output = None;
        self.renderer.reset();

        let grid = self.grid.as_ref().ok_or(SolveError::EmptyMatrix)?;
        let matrix = grid.read();

        let solution = Engine::new(EngineConfig::new(self.strategy)).solve(&matrix)?;
        if let Some(x) = solution.classification.values() {
            let worst = matrix
                .residuals(x)
                .into_iter()
                .fold(0.0f64, |acc, r| acc.max(r.abs()));
            log::debug!("max residual {:e}", worst);
        }

        let report = self.renderer.render(&solution);
        Ok(self.output.insert(report))
    }

    pub fn clear(&mut self) {
        self.grid = None;
        self.output = None;
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
