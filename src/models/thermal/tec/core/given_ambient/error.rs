use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::TemperatureInterval;

use crate::models::thermal::tec::core::OperatingPointError;

/// Errors that can occur while solving for the hot side given an ambient temperature.
#[derive(Debug, Error)]
pub enum GivenAmbientError {
    /// The converged hot side could not be evaluated.
    #[error("operating point evaluation failed")]
    OperatingPoint(#[from] OperatingPointError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best ambient temperature residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
