use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Power, TemperatureInterval},
        power::watt,
        temperature_interval::kelvin,
    },
    typenum::{N1, N2, N3, P1, P2, P3, Z0},
};

/// Seebeck coefficient, V/K in SI.
pub type SeebeckCoefficient = Quantity<ISQ<P2, P1, N3, N1, N1, Z0, Z0>, SI<f64>, f64>;

/// Thermoelectric figure of merit `Z`, 1/K in SI.
pub type FigureOfMerit = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Thermal resistance, K/W in SI.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ThermalResistance`] from a value in K/W.
///
/// Heat sink datasheets quote resistance in K/W (equivalently °C/W), and
/// [`uom`] has no unit module for this quantity.
#[must_use]
pub fn kelvin_per_watt(value: f64) -> ThermalResistance {
    TemperatureInterval::new::<kelvin>(value) / Power::new::<watt>(1.0)
}
