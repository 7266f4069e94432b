//! Thermoelectric cooler (TEC) models.
//!
//! This module provides a [`twine_core::Model`] implementation for TEC modules
//! characterized only by their datasheet ratings, along with rectangular
//! sweeps over hot-side temperature and drive current.
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use tec_models::models::thermal::tec::{OperatingConditions, Sweep, catalog};
//! use twine_core::Model;
//! use uom::si::{
//!     electric_current::ampere, f64::{ElectricCurrent, ThermodynamicTemperature},
//!     power::watt, thermodynamic_temperature::degree_celsius,
//! };
//!
//! let catalog = catalog::cp35().unwrap();
//! let tec = catalog.get("CP353047").unwrap();
//!
//! let params = tec
//!     .call(&OperatingConditions {
//!         current: ElectricCurrent::new::<ampere>(2.0),
//!         t_hot: ThermodynamicTemperature::new::<degree_celsius>(27.0),
//!         t_cold: ThermodynamicTemperature::new::<degree_celsius>(5.0),
//!     })
//!     .unwrap();
//! assert!(params.cooling_power.get::<watt>() > 0.0);
//!
//! let results = Sweep::datasheet_characterization().evaluate(tec).unwrap();
//! assert_eq!(results.len(), 120);
//! ```

pub mod catalog;

pub(crate) mod core;

pub use self::core::{
    DeviceRatings, GivenAmbientConfig, GivenAmbientError, HotSideRatings, HotSideSolution,
    OperatingConditions, OperatingParams, OperatingPointError, RatingsError, SeriesGroup, Sweep,
    SweepError, SweepGroup, SweepPoint, SweepResults, ThermoelectricCooler, ambient_temperature,
    linspace,
};

use twine_core::Model;

impl Model for ThermoelectricCooler {
    type Input = OperatingConditions;
    type Output = OperatingParams;
    type Error = OperatingPointError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.operating_params(input.current, input.t_hot, input.t_cold)
    }
}
