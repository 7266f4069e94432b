//! Iterative solver for the hot-side temperature given an ambient temperature.
//!
//! A sweep fixes the hot side and reports the ambient temperature that holds
//! it there. This module runs the other direction: with the ambient fixed, it
//! varies the hot side until `T_h - (V·I + Q_c)·R_sink` lands on the ambient.

mod config;
mod error;
mod problem;

pub use config::GivenAmbientConfig;
pub use error::GivenAmbientError;

use num_traits::Zero;
use twine_solvers::equation::bisection;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::ThermalResistance,
};

use super::{OperatingParams, ThermoelectricCooler};

use problem::{GivenAmbientModel, GivenAmbientProblem};

/// Closest the search bracket gets to the `ΔT_max` rating, in kelvin.
const RATING_CLEARANCE: f64 = 1e-3;

/// Hot-side temperature and operating point that match a target ambient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotSideSolution {
    pub t_hot: ThermodynamicTemperature,
    pub params: OperatingParams,

    /// Bisection iterations used; zero when no iteration was needed.
    pub iters: usize,
}

/// Solves for the hot-side temperature that yields `t_ambient`.
///
/// Uses bisection over `t_ambient ± config.search_span`, with the lower end
/// clipped just above the device's `ΔT_max` rating. Hot-side candidates the
/// model rejects are treated as lying below the root.
///
/// # Errors
///
/// Returns [`GivenAmbientError`] if the bracket holds no root, if the solved
/// point cannot be evaluated, or if the solver fails to converge.
pub(super) fn given_ambient(
    device: &ThermoelectricCooler,
    current: ElectricCurrent,
    t_cold: ThermodynamicTemperature,
    t_ambient: ThermodynamicTemperature,
    sink_resistance: Constrained<ThermalResistance, NonNegative>,
    config: GivenAmbientConfig,
) -> Result<HotSideSolution, GivenAmbientError> {
    let sink_resistance = sink_resistance.into_inner();

    if sink_resistance.is_zero() {
        let params = device.operating_params(current, t_ambient, t_cold)?;
        return Ok(HotSideSolution {
            t_hot: t_ambient,
            params,
            iters: 0,
        });
    }

    let rating = device.ratings().delta_t_max().at_27c.get::<delta_kelvin>();
    let span = config.search_span.get::<delta_kelvin>();
    let center = t_ambient.get::<kelvin>();
    let bracket = [(center - span).max(rating + RATING_CLEARANCE), center + span];

    tracing::debug!(
        part_number = device.part_number(),
        current_a = current.get::<ampere>(),
        t_ambient_k = center,
        lower_k = bracket[0],
        upper_k = bracket[1],
        "solving hot side given ambient"
    );

    let model = GivenAmbientModel::new(device, current, t_cold);
    let problem = GivenAmbientProblem::new(current, t_cold, sink_resistance, t_ambient);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A hot side at or below the rating has no valid parameters and
            // sits below any reachable root.
            if event.result().is_err() {
                return Some(bisection::Action::assume_negative());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenAmbientError::MaxIters {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    tracing::debug!(
        t_hot_k = solution.snapshot.input.get::<kelvin>(),
        iters = solution.iters,
        "hot side converged"
    );

    Ok(HotSideSolution {
        t_hot: solution.snapshot.input,
        params: solution.snapshot.output,
        iters: solution.iters,
    })
}
