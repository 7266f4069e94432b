//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, current, power).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Thermoelectric quantities
//!
//! [`SeebeckCoefficient`] (V/K), [`FigureOfMerit`] (1/K), and
//! [`ThermalResistance`] (K/W) are defined here as plain [`uom::si::Quantity`]
//! aliases. They arise naturally from `uom` arithmetic:
//!
//! ```
//! use uom::si::{
//!     f64::{Power, TemperatureInterval},
//!     power::watt,
//!     temperature_interval::kelvin,
//! };
//! use tec_models::support::units::{ThermalResistance, kelvin_per_watt};
//!
//! let r: ThermalResistance =
//!     TemperatureInterval::new::<kelvin>(1.0) / Power::new::<watt>(2.0);
//! assert_eq!(r, kelvin_per_watt(0.5));
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use tec_models::support::units::TemperatureDifference;
//!
//! let t_hot = ThermodynamicTemperature::new::<kelvin>(300.15);
//! let t_cold = ThermodynamicTemperature::new::<kelvin>(278.15);
//! let delta_t = t_hot.minus(t_cold);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.

mod quantities;
mod temperature_difference;

pub use quantities::{FigureOfMerit, SeebeckCoefficient, ThermalResistance, kelvin_per_watt};
pub use temperature_difference::{TemperatureDifference, absolute};
