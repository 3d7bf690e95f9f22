use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::SolveError;
use crate::matrix::matrix::TOLERANCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    // rows below the pivot only, then back-substitution
    #[default]
    ForwardOnly,
    FullReduction,
}

impl Strategy {
    pub fn toggled(self) -> Self {
        match self {
            Strategy::ForwardOnly => Strategy::FullReduction,
            Strategy::FullReduction => Strategy::ForwardOnly,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::ForwardOnly => "gauss",
            Strategy::FullReduction => "jordan",
        }
    }
}

impl FromStr for Strategy {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gauss" | "gaussian" | "forward" => Ok(Strategy::ForwardOnly),
            "jordan" | "gauss-jordan" | "full" => Ok(Strategy::FullReduction),
            _ => Err(SolveError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub strategy: Strategy,
    pub tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            strategy: Strategy::default(),
            tolerance: TOLERANCE,
        }
    }
}

impl EngineConfig {
    pub fn new(strategy: Strategy) -> Self {
        EngineConfig {
            strategy,
            ..Default::default()
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
