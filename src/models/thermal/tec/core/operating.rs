use uom::si::f64::{
    ElectricCurrent, ElectricPotential, Power, Ratio, TemperatureInterval,
    ThermodynamicTemperature,
};

use crate::support::units::{FigureOfMerit, ThermalResistance};

/// Steady-state boundary conditions of a TEC module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    /// Drive current.
    pub current: ElectricCurrent,

    /// Hot-side (heat rejection) temperature.
    pub t_hot: ThermodynamicTemperature,

    /// Cold-side (heat absorption) temperature.
    pub t_cold: ThermodynamicTemperature,
}

/// Electrical and thermal performance at an operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingParams {
    /// Voltage across the module terminals.
    pub voltage: ElectricPotential,

    /// Net heat absorbed at the cold side.
    ///
    /// Negative when the module is driven past its cooling capability at the
    /// given temperature difference.
    pub cooling_power: Power,

    /// Cooling power divided by electrical input power.
    pub coefficient_of_performance: Ratio,

    /// Figure of merit estimated at the hot-side temperature.
    pub figure_of_merit: FigureOfMerit,
}

impl OperatingParams {
    /// Electrical power delivered to the module, `V·I`.
    #[must_use]
    pub fn input_power(&self, current: ElectricCurrent) -> Power {
        self.voltage * current
    }

    /// Heat rejected at the hot side: electrical input plus heat pumped from
    /// the cold side.
    #[must_use]
    pub fn rejected_heat(&self, current: ElectricCurrent) -> Power {
        self.input_power(current) + self.cooling_power
    }
}

/// Ambient temperature that holds the hot side at `conditions.t_hot`.
///
/// All rejected heat passes to ambient through `sink_resistance`, so
/// `T_amb = T_h - (V·I + Q_c)·R_sink`.
#[must_use]
pub fn ambient_temperature(
    conditions: &OperatingConditions,
    params: &OperatingParams,
    sink_resistance: ThermalResistance,
) -> ThermodynamicTemperature {
    let rise: TemperatureInterval = params.rejected_heat(conditions.current) * sink_resistance;
    conditions.t_hot - rise
}
