use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Solver configuration for finding the hot side given an ambient temperature.
#[derive(Debug, Clone, Copy)]
pub struct GivenAmbientConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the hot-side temperature and the ambient residual.
    pub temp_tol: TemperatureInterval,

    /// Half-width of the hot-side search bracket around the ambient temperature.
    pub search_span: TemperatureInterval,
}

impl Default for GivenAmbientConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            search_span: TemperatureInterval::new::<delta_kelvin>(150.0),
        }
    }
}

impl GivenAmbientConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        let tol = self.temp_tol.get::<delta_kelvin>();
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: tol,
            x_rel_tol: 0.0,
            residual_tol: tol,
        }
    }
}
