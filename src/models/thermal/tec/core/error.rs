use thiserror::Error;
use uom::si::f64::{
    ElectricCurrent, ElectricPotential, TemperatureInterval, ThermodynamicTemperature,
};

use crate::support::constraint::ConstraintError;

/// Errors raised when an operating point lies outside the model's domain.
///
/// These indicate a configuration error in the requested operating point, not
/// a device that is merely outside its useful envelope. Negative cooling power
/// or a negative COP are valid results and never produce an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperatingPointError {
    /// The hot side is at or below the rated maximum temperature difference.
    ///
    /// The parameter estimates divide by `T_h - ΔT_max`, which must be positive.
    #[error("hot side temperature {t_hot:?} must exceed the rated max delta T {delta_t_max:?}")]
    HotSideAtOrBelowRating {
        t_hot: ThermodynamicTemperature,
        delta_t_max: TemperatureInterval,
    },

    /// The drive current is zero or `NaN` where a COP is required.
    #[error("invalid drive current {current:?}: {source}")]
    InvalidCurrent {
        current: ElectricCurrent,

        #[source]
        source: ConstraintError,
    },

    /// The electrical input power `V·I` is zero, so COP is undefined.
    #[error("electrical input power is zero: voltage={voltage:?}, current={current:?}")]
    ZeroInputPower {
        voltage: ElectricPotential,
        current: ElectricCurrent,
    },
}
