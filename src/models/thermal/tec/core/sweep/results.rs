use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{Power, ThermodynamicTemperature},
    power::watt,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    models::thermal::tec::core::{OperatingConditions, OperatingParams},
    support::units::ThermalResistance,
};

/// One evaluated operating point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub conditions: OperatingConditions,

    /// Hot-side heat sink resistance to ambient.
    pub sink_resistance: ThermalResistance,

    pub params: OperatingParams,

    /// Ambient temperature that holds the hot side at `conditions.t_hot`.
    pub ambient_temperature: ThermodynamicTemperature,
}

impl SweepPoint {
    /// Electrical power delivered to the module.
    #[must_use]
    pub fn input_power(&self) -> Power {
        self.params.input_power(self.conditions.current)
    }

    /// Heat passed to the sink: input power plus cooling power.
    #[must_use]
    pub fn rejected_heat(&self) -> Power {
        self.params.rejected_heat(self.conditions.current)
    }
}

/// Sweep points sharing one hot-side temperature, ordered by input current.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGroup {
    pub t_hot: ThermodynamicTemperature,
    pub points: Vec<SweepPoint>,
}

impl SweepGroup {
    /// Plot label for this group, e.g. `Th = 27.00°C`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Th = {:.2}°C", self.t_hot.get::<degree_celsius>())
    }

    /// Parallel series in display units for plotting.
    #[must_use]
    pub fn series(&self) -> SeriesGroup {
        let column =
            |f: fn(&SweepPoint) -> f64| -> Vec<f64> { self.points.iter().map(f).collect() };

        SeriesGroup {
            label: self.label(),
            current_a: column(|p| p.conditions.current.get::<ampere>()),
            voltage_v: column(|p| p.params.voltage.get::<volt>()),
            cooling_power_w: column(|p| p.params.cooling_power.get::<watt>()),
            coefficient_of_performance: column(|p| {
                p.params.coefficient_of_performance.get::<ratio>()
            }),
            ambient_temperature_c: column(|p| p.ambient_temperature.get::<degree_celsius>()),
            figure_of_merit_per_k: column(|p| p.params.figure_of_merit.value),
        }
    }
}

/// Results of a full sweep, one group per hot-side temperature in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResults {
    pub t_cold: ThermodynamicTemperature,
    pub sink_resistance: ThermalResistance,
    pub groups: Vec<SweepGroup>,
}

impl SweepResults {
    /// Total number of points across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.points.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every point, group by group.
    pub fn points(&self) -> impl Iterator<Item = &SweepPoint> {
        self.groups.iter().flat_map(|group| group.points.iter())
    }

    /// Plot-ready series, one per hot-side temperature.
    #[must_use]
    pub fn series(&self) -> Vec<SeriesGroup> {
        self.groups.iter().map(SweepGroup::series).collect()
    }
}

/// Display-unit series of one hot-side temperature group.
///
/// All vectors are parallel and ordered by input current. Temperatures are
/// converted to Celsius here and nowhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGroup {
    pub label: String,
    pub current_a: Vec<f64>,
    pub voltage_v: Vec<f64>,
    pub cooling_power_w: Vec<f64>,
    pub coefficient_of_performance: Vec<f64>,
    pub ambient_temperature_c: Vec<f64>,
    pub figure_of_merit_per_k: Vec<f64>,
}
