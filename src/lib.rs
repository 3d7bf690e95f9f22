pub mod engine {
    pub mod back_substitution;
    pub mod classification;
    pub mod engine;
    pub mod engine_config;
    pub mod step;
}
pub mod matrix {
    pub mod matrix;
    pub mod matrix_aug;
}
pub mod render {
    pub mod report;
}
pub mod session {
    pub mod grid;
    pub mod session;
}

pub mod error;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use engine::classification::Classification;
pub use engine::engine::{solve, Engine, Solution};
pub use engine::engine_config::{EngineConfig, Strategy};
pub use engine::step::Step;
pub use error::{Result, SolveError};
pub use matrix::matrix::Matrix;
pub use matrix::matrix_aug::AugmentedMatrix;
pub use render::report::{Outcome, RenderedStep, Report};
pub use session::grid::InputGrid;
pub use session::session::Session;
pub use utils::format_number;
