//! Steady-state thermoelectric cooler modeling from datasheet ratings.
//!
//! A [`ThermoelectricCooler`] estimates its lumped parameters from published
//! ratings and evaluates cooling power, voltage, and COP at an operating
//! point. A [`Sweep`] evaluates a grid of operating points and estimates the
//! ambient temperature each one implies through a hot-side heat sink.

mod device;
mod error;
mod given_ambient;
mod operating;
mod ratings;
mod sweep;

#[cfg(test)]
mod test_support;

pub use device::ThermoelectricCooler;
pub use error::OperatingPointError;
pub use given_ambient::{GivenAmbientConfig, GivenAmbientError, HotSideSolution};
pub use operating::{OperatingConditions, OperatingParams, ambient_temperature};
pub use ratings::{DeviceRatings, HotSideRatings, RatingsError};
pub use sweep::{
    SeriesGroup, Sweep, SweepError, SweepGroup, SweepPoint, SweepResults, linspace,
};

use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::ThermalResistance,
};

impl ThermoelectricCooler {
    /// Solves for the hot-side temperature that a given ambient implies.
    ///
    /// This is the inverse of the ambient estimate reported by a [`Sweep`]:
    /// heat rejected at the hot side, `V·I + Q_c`, flows to `t_ambient`
    /// through `sink_resistance`.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenAmbientError`] if no hot-side temperature in the search
    /// bracket matches, if the solved point is invalid, or if the solver fails
    /// to converge.
    pub fn given_ambient(
        &self,
        current: ElectricCurrent,
        t_cold: ThermodynamicTemperature,
        t_ambient: ThermodynamicTemperature,
        sink_resistance: Constrained<ThermalResistance, NonNegative>,
        config: GivenAmbientConfig,
    ) -> Result<HotSideSolution, GivenAmbientError> {
        given_ambient::given_ambient(self, current, t_cold, t_ambient, sink_resistance, config)
    }
}
