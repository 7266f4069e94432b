//! Lumped thermoelectric module parameters estimated from datasheet ratings.
//!
//! A module is described by three lumped parameters: Seebeck coefficient `S`,
//! electrical resistance `R`, and thermal conductance `K`. Datasheets don't
//! publish them, but they can be estimated from `V_max`, `I_max`, and
//! `ΔT_max` at the rated hot-side temperature `T_h`:
//!
//! - `S = V_max / T_h`
//! - `R = (T_h - ΔT_max)·V_max / (T_h·I_max)`
//! - `K = (T_h - ΔT_max)·V_max·I_max / (2·T_h·ΔT_max)`
//! - `Z = 2·ΔT_max / (T_h - ΔT_max)²`
//!
//! With those parameters the standard steady-state energy balance gives
//!
//! - `Q_c = S·T_c·I - ½·I²·R - K·(T_h - T_c)`
//! - `V = S·(T_h - T_c) + R·I`
//! - `COP = Q_c / (V·I)`
//!
//! See Lineykin and Ben-Yaakov, "A simple method to estimate the physical
//! characteristics of a thermoelectric cooler from vendor datasheets",
//! Electronics Cooling, August 2008.
//!
//! All estimates use the 27 °C `ΔT_max` rating, evaluated at whichever hot-side
//! temperature is requested.

use std::cmp::Ordering;

use uom::si::f64::{
    ElectricCurrent, ElectricPotential, ElectricalResistance, Power, Ratio, TemperatureInterval,
    ThermalConductance, ThermodynamicTemperature,
};

use crate::support::{
    constraint::{Constraint, NonZero},
    units::{FigureOfMerit, SeebeckCoefficient, TemperatureDifference, absolute},
};

use super::{DeviceRatings, OperatingParams, OperatingPointError};

/// Steady-state model of a thermoelectric cooler module.
///
/// Every method is a pure function of the ratings and its arguments.
/// Methods taking a hot-side temperature return
/// [`OperatingPointError::HotSideAtOrBelowRating`] unless
/// `T_h > ΔT_max(27 °C)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoelectricCooler {
    ratings: DeviceRatings,
}

impl ThermoelectricCooler {
    /// Creates a model from validated datasheet ratings.
    #[must_use]
    pub fn new(ratings: DeviceRatings) -> Self {
        Self { ratings }
    }

    /// Returns the datasheet ratings backing this model.
    #[must_use]
    pub fn ratings(&self) -> &DeviceRatings {
        &self.ratings
    }

    /// Manufacturer part number of the modeled device.
    #[must_use]
    pub fn part_number(&self) -> &str {
        self.ratings.part_number()
    }

    /// Figure of merit `Z = 2·ΔT_max / (T_h - ΔT_max)²`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_hot` does not exceed the rated `ΔT_max`.
    pub fn figure_of_merit(
        &self,
        t_hot: ThermodynamicTemperature,
    ) -> Result<FigureOfMerit, OperatingPointError> {
        let margin = self.margin(t_hot)?;
        Ok(self.delta_t_max() * 2.0 / (margin * margin))
    }

    /// Seebeck coefficient `S = V_max / T_h`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_hot` does not exceed the rated `ΔT_max`.
    pub fn seebeck_coefficient(
        &self,
        t_hot: ThermodynamicTemperature,
    ) -> Result<SeebeckCoefficient, OperatingPointError> {
        self.margin(t_hot)?;
        Ok(self.ratings.v_max() / absolute(t_hot))
    }

    /// Thermal conductance `K = (T_h - ΔT_max)·V_max·I_max / (2·T_h·ΔT_max)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_hot` does not exceed the rated `ΔT_max`.
    pub fn thermal_conductance(
        &self,
        t_hot: ThermodynamicTemperature,
    ) -> Result<ThermalConductance, OperatingPointError> {
        let margin = self.margin(t_hot)?;
        Ok(margin * self.ratings.v_max() * self.ratings.i_max()
            / (absolute(t_hot) * self.delta_t_max() * 2.0))
    }

    /// Module resistance `R = (T_h - ΔT_max)·V_max / (T_h·I_max)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_hot` does not exceed the rated `ΔT_max`.
    pub fn module_resistance(
        &self,
        t_hot: ThermodynamicTemperature,
    ) -> Result<ElectricalResistance, OperatingPointError> {
        let margin = self.margin(t_hot)?;
        Ok(margin * self.ratings.v_max() / (absolute(t_hot) * self.ratings.i_max()))
    }

    /// Net heat absorbed at the cold side, `Q_c = S·T_c·I - ½·I²·R - K·(T_h - T_c)`.
    ///
    /// The Peltier term is offset by half the Joule heating and by conduction
    /// back through the module. The result is negative when the module is
    /// overdriven for the given temperature difference.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_hot` does not exceed the rated `ΔT_max`.
    pub fn cooling_power(
        &self,
        current: ElectricCurrent,
        t_hot: ThermodynamicTemperature,
        t_cold: ThermodynamicTemperature,
    ) -> Result<Power, OperatingPointError> {
        let s = self.seebeck_coefficient(t_hot)?;
        let r = self.module_resistance(t_hot)?;
        let k = self.thermal_conductance(t_hot)?;

        let peltier: Power = s * absolute(t_cold) * current;
        let joule: Power = current * current * r * 0.5;
        let conduction: Power = k * t_hot.minus(t_cold);

        Ok(peltier - joule - conduction)
    }

    /// Terminal voltage, `V = S·(T_h - T_c) + R·I`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_hot` does not exceed the rated `ΔT_max`.
    pub fn voltage(
        &self,
        current: ElectricCurrent,
        t_hot: ThermodynamicTemperature,
        t_cold: ThermodynamicTemperature,
    ) -> Result<ElectricPotential, OperatingPointError> {
        let s = self.seebeck_coefficient(t_hot)?;
        let r = self.module_resistance(t_hot)?;

        let seebeck_emf: ElectricPotential = s * t_hot.minus(t_cold);
        let ohmic_drop: ElectricPotential = r * current;

        Ok(seebeck_emf + ohmic_drop)
    }

    /// Coefficient of performance, `COP = Q_c / (V·I)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_hot` does not exceed the rated `ΔT_max`, if the
    /// current is zero, or if the electrical input power is zero.
    pub fn coefficient_of_performance(
        &self,
        current: ElectricCurrent,
        t_hot: ThermodynamicTemperature,
        t_cold: ThermodynamicTemperature,
    ) -> Result<Ratio, OperatingPointError> {
        let voltage = self.voltage(current, t_hot, t_cold)?;
        let cooling_power = self.cooling_power(current, t_hot, t_cold)?;
        cop(cooling_power, voltage, current)
    }

    /// Voltage, cooling power, COP, and figure of merit at one operating point.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_hot` does not exceed the rated `ΔT_max`, if the
    /// current is zero, or if the electrical input power is zero.
    pub fn operating_params(
        &self,
        current: ElectricCurrent,
        t_hot: ThermodynamicTemperature,
        t_cold: ThermodynamicTemperature,
    ) -> Result<OperatingParams, OperatingPointError> {
        let voltage = self.voltage(current, t_hot, t_cold)?;
        let cooling_power = self.cooling_power(current, t_hot, t_cold)?;
        let coefficient_of_performance = cop(cooling_power, voltage, current)?;
        let figure_of_merit = self.figure_of_merit(t_hot)?;

        Ok(OperatingParams {
            voltage,
            cooling_power,
            coefficient_of_performance,
            figure_of_merit,
        })
    }

    fn delta_t_max(&self) -> TemperatureInterval {
        self.ratings.delta_t_max().at_27c
    }

    /// Returns `T_h - ΔT_max`, which must be strictly positive.
    fn margin(
        &self,
        t_hot: ThermodynamicTemperature,
    ) -> Result<TemperatureInterval, OperatingPointError> {
        let delta_t_max = self.delta_t_max();
        match absolute(t_hot).partial_cmp(&delta_t_max) {
            Some(Ordering::Greater) => Ok(absolute(t_hot) - delta_t_max),
            _ => Err(OperatingPointError::HotSideAtOrBelowRating { t_hot, delta_t_max }),
        }
    }
}

fn cop(
    cooling_power: Power,
    voltage: ElectricPotential,
    current: ElectricCurrent,
) -> Result<Ratio, OperatingPointError> {
    NonZero::check(&current)
        .map_err(|source| OperatingPointError::InvalidCurrent { current, source })?;

    let input_power: Power = voltage * current;
    if NonZero::check(&input_power).is_err() {
        return Err(OperatingPointError::ZeroInputPower { voltage, current });
    }

    Ok(cooling_power / input_power)
}


#[cfg(test)]
mod proptests {
    use super::*;

    use proptest::prelude::*;
    use uom::si::{electric_potential::volt, power::watt, ratio::ratio};

    use crate::models::thermal::tec::core::test_support::{amps, cp353047, temp_k};

    proptest! {
        #[test]
        fn cop_is_cooling_over_input_power(
            i in 0.05_f64..6.0,
            th in 280.0_f64..360.0,
            tc in 250.0_f64..320.0,
        ) {
            let tec = cp353047();
            let params = tec.operating_params(amps(i), temp_k(th), temp_k(tc)).unwrap();

            let input = params.voltage.get::<volt>() * i;
            prop_assume!(input.abs() > 1e-9);

            let expected = params.cooling_power.get::<watt>() / input;
            let cop = params.coefficient_of_performance.get::<ratio>();
            prop_assert!((cop - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }

        #[test]
        fn evaluation_is_deterministic(
            i in -6.0_f64..6.0,
            th in 71.0_f64..400.0,
            tc in 200.0_f64..400.0,
        ) {
            let tec = cp353047();
            let first = tec.cooling_power(amps(i), temp_k(th), temp_k(tc)).unwrap();
            let second = tec.cooling_power(amps(i), temp_k(th), temp_k(tc)).unwrap();
            prop_assert_eq!(first.value.to_bits(), second.value.to_bits());

            let first = tec.voltage(amps(i), temp_k(th), temp_k(tc)).unwrap();
            let second = tec.voltage(amps(i), temp_k(th), temp_k(tc)).unwrap();
            prop_assert_eq!(first.value.to_bits(), second.value.to_bits());
        }

        #[test]
        fn figure_of_merit_decreases_with_hot_side(th in 71.0_f64..500.0, step in 0.1_f64..50.0) {
            let tec = cp353047();
            let z_low = tec.figure_of_merit(temp_k(th)).unwrap();
            let z_high = tec.figure_of_merit(temp_k(th + step)).unwrap();
            prop_assert!(z_high.value < z_low.value);
        }
    }
}
