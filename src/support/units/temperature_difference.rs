use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// This trait provides a [`minus`](Self::minus) method that subtracts two
/// [`ThermodynamicTemperature`] values (absolute temperatures) and returns a
/// [`TemperatureInterval`] (temperature difference).
///
/// For background on this distinction and why this extension is needed:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

/// Returns an absolute temperature as its interval above absolute zero.
///
/// Thermoelectric relations multiply and divide by absolute temperature
/// (e.g. `S = V_max / T_h`), and the interval form keeps that arithmetic on
/// ordinary [`uom`] quantities.
#[must_use]
pub fn absolute(temperature: ThermodynamicTemperature) -> TemperatureInterval {
    TemperatureInterval::new::<delta_kelvin>(temperature.get::<abs_kelvin>())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature,
        temperature_interval::{degree_celsius as delta_celsius, kelvin as delta_kelvin},
        thermodynamic_temperature::{degree_celsius, kelvin as abs_kelvin},
    };

    #[test]
    fn subtract_temperatures() {
        let t_hot = ThermodynamicTemperature::new::<degree_celsius>(27.0);
        let t_cold = ThermodynamicTemperature::new::<degree_celsius>(5.0);

        assert_relative_eq!(
            t_hot.minus(t_cold).get::<delta_kelvin>(),
            22.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            t_cold.minus(t_hot).get::<delta_celsius>(),
            -22.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn absolute_interval() {
        let t = ThermodynamicTemperature::new::<abs_kelvin>(300.15);
        assert_eq!(absolute(t).get::<delta_kelvin>(), 300.15);

        let t = ThermodynamicTemperature::new::<degree_celsius>(0.0);
        assert_relative_eq!(absolute(t).get::<delta_kelvin>(), 273.15, epsilon = 1e-12);
    }
}
