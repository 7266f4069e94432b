//! Problem formulation for hot-side solving.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{ElectricCurrent, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::thermal::tec::core::{
        OperatingConditions, OperatingParams, OperatingPointError, ThermoelectricCooler,
        operating::ambient_temperature,
    },
    support::units::ThermalResistance,
};

/// Model adapter exposing the hot-side temperature as the sole input.
pub(super) struct GivenAmbientModel<'a> {
    device: &'a ThermoelectricCooler,
    current: ElectricCurrent,
    t_cold: ThermodynamicTemperature,
}

impl<'a> GivenAmbientModel<'a> {
    pub(super) fn new(
        device: &'a ThermoelectricCooler,
        current: ElectricCurrent,
        t_cold: ThermodynamicTemperature,
    ) -> Self {
        Self {
            device,
            current,
            t_cold,
        }
    }
}

impl Model for GivenAmbientModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = OperatingParams;
    type Error = OperatingPointError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.device.operating_params(self.current, *input, self.t_cold)
    }
}

/// Equation problem definition for ambient matching.
///
/// Computes the residual as `achieved_ambient - target_ambient` in kelvin.
pub(super) struct GivenAmbientProblem {
    current: ElectricCurrent,
    t_cold: ThermodynamicTemperature,
    sink_resistance: ThermalResistance,
    t_ambient: ThermodynamicTemperature,
}

impl GivenAmbientProblem {
    pub(super) fn new(
        current: ElectricCurrent,
        t_cold: ThermodynamicTemperature,
        sink_resistance: ThermalResistance,
        t_ambient: ThermodynamicTemperature,
    ) -> Self {
        Self {
            current,
            t_cold,
            sink_resistance,
            t_ambient,
        }
    }
}

impl EquationProblem<1> for GivenAmbientProblem {
    type Input = ThermodynamicTemperature;
    type Output = OperatingParams;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let conditions = OperatingConditions {
            current: self.current,
            t_hot: *input,
            t_cold: self.t_cold,
        };
        let ambient = ambient_temperature(&conditions, output, self.sink_resistance);
        Ok([ambient.get::<kelvin>() - self.t_ambient.get::<kelvin>()])
    }
}
