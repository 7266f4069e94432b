//! Rectangular operating-point sweeps over hot-side temperature and current.
//!
//! A [`Sweep`] fixes the cold-side temperature and heat sink resistance, then
//! evaluates every `(t_hot, current)` combination. Results are grouped by
//! hot-side temperature in input order, with one point per current in input
//! order within each group.

mod axis;
mod error;
mod results;

pub use axis::linspace;
pub use error::SweepError;
pub use results::{SeriesGroup, SweepGroup, SweepPoint, SweepResults};

use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature},
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    constraint::{Constrained, Constraint, NonNegative, StrictlyPositive},
    units::{ThermalResistance, kelvin_per_watt},
};

use super::{OperatingConditions, ThermoelectricCooler, operating::ambient_temperature};

/// A validated sweep definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    t_cold: ThermodynamicTemperature,
    t_hots: Vec<ThermodynamicTemperature>,
    currents: Vec<ElectricCurrent>,
    sink_resistance: ThermalResistance,
}

impl Sweep {
    /// Constructs a validated sweep.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError`] if either axis is empty or if any current is not
    /// strictly positive.
    pub fn new(
        t_cold: ThermodynamicTemperature,
        t_hots: Vec<ThermodynamicTemperature>,
        currents: Vec<ElectricCurrent>,
        sink_resistance: Constrained<ThermalResistance, NonNegative>,
    ) -> Result<Self, SweepError> {
        if t_hots.is_empty() {
            return Err(SweepError::NoHotSideTemperatures);
        }
        if currents.is_empty() {
            return Err(SweepError::NoCurrents);
        }
        for (index, current) in currents.iter().enumerate() {
            StrictlyPositive::check(current).map_err(|source| SweepError::InvalidCurrent {
                index,
                current: *current,
                source,
            })?;
        }

        Ok(Self {
            t_cold,
            t_hots,
            currents,
            sink_resistance: sink_resistance.into_inner(),
        })
    }

    /// The characterization used for the CP35 datasheet comparison.
    ///
    /// Cold side held at 5 °C, 20 currents from 1 A to 5 A, 6 hot-side
    /// temperatures from 27 °C to 55 °C, and a 0.5 K/W heat sink.
    #[must_use]
    pub fn datasheet_characterization() -> Self {
        Self {
            t_cold: ThermodynamicTemperature::new::<degree_celsius>(5.0),
            t_hots: linspace(27.0, 55.0, 6)
                .into_iter()
                .map(ThermodynamicTemperature::new::<degree_celsius>)
                .collect(),
            currents: linspace(1.0, 5.0, 20)
                .into_iter()
                .map(ElectricCurrent::new::<ampere>)
                .collect(),
            sink_resistance: kelvin_per_watt(0.5),
        }
    }

    #[must_use]
    pub fn t_cold(&self) -> ThermodynamicTemperature {
        self.t_cold
    }

    #[must_use]
    pub fn t_hots(&self) -> &[ThermodynamicTemperature] {
        &self.t_hots
    }

    #[must_use]
    pub fn currents(&self) -> &[ElectricCurrent] {
        &self.currents
    }

    #[must_use]
    pub fn sink_resistance(&self) -> ThermalResistance {
        self.sink_resistance
    }

    /// Number of points the sweep produces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.t_hots.len() * self.currents.len()
    }

    /// Always `false`; a validated sweep has at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluates every operating point of the sweep on `device`.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::OperatingPoint`] for the first point that cannot
    /// be evaluated; no partial results are returned.
    pub fn evaluate(&self, device: &ThermoelectricCooler) -> Result<SweepResults, SweepError> {
        tracing::debug!(
            part_number = device.part_number(),
            t_cold_k = self.t_cold.get::<kelvin>(),
            hot_sides = self.t_hots.len(),
            currents = self.currents.len(),
            "evaluating sweep"
        );

        let groups = self
            .t_hots
            .iter()
            .map(|&t_hot| self.evaluate_group(device, t_hot))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            part_number = device.part_number(),
            points = self.len(),
            "sweep complete"
        );

        Ok(SweepResults {
            t_cold: self.t_cold,
            sink_resistance: self.sink_resistance,
            groups,
        })
    }

    fn evaluate_group(
        &self,
        device: &ThermoelectricCooler,
        t_hot: ThermodynamicTemperature,
    ) -> Result<SweepGroup, SweepError> {
        let points = self
            .currents
            .iter()
            .map(|&current| self.evaluate_point(device, current, t_hot))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SweepGroup { t_hot, points })
    }

    fn evaluate_point(
        &self,
        device: &ThermoelectricCooler,
        current: ElectricCurrent,
        t_hot: ThermodynamicTemperature,
    ) -> Result<SweepPoint, SweepError> {
        let conditions = OperatingConditions {
            current,
            t_hot,
            t_cold: self.t_cold,
        };

        let params = device
            .operating_params(current, t_hot, self.t_cold)
            .map_err(|source| SweepError::OperatingPoint {
                t_hot,
                current,
                source,
            })?;

        let ambient = ambient_temperature(&conditions, &params, self.sink_resistance);

        tracing::trace!(
            t_hot_k = t_hot.get::<kelvin>(),
            current_a = current.get::<ampere>(),
            t_ambient_k = ambient.get::<kelvin>(),
            "evaluated sweep point"
        );

        Ok(SweepPoint {
            conditions,
            sink_resistance: self.sink_resistance,
            params,
            ambient_temperature: ambient,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{power::watt, ratio::ratio};

    use crate::models::thermal::tec::core::test_support::{amps, cp353047, temp_k};
    use crate::support::constraint::ConstraintError;

    fn sink(k_per_w: f64) -> Constrained<ThermalResistance, NonNegative> {
        NonNegative::new(kelvin_per_watt(k_per_w)).unwrap()
    }

    #[test]
    fn two_currents_at_rated_hot_side() {
        let tec = cp353047();
        let sweep = Sweep::new(
            temp_k(278.15),
            vec![temp_k(300.15)],
            vec![amps(1.0), amps(5.0)],
            sink(0.5),
        )
        .unwrap();

        let results = sweep.evaluate(&tec).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results.groups.len(), 1);

        let [low, high] = results.groups[0].points.as_slice() else {
            panic!("expected exactly two points");
        };
        assert_eq!(low.conditions.t_hot, temp_k(300.15));
        assert_eq!(high.conditions.t_hot, temp_k(300.15));
        assert_eq!(low.conditions.current, amps(1.0));
        assert_eq!(high.conditions.current, amps(5.0));

        // More rejected heat needs a larger hot-side-to-ambient gradient.
        assert!(high.rejected_heat() > low.rejected_heat());
        assert!(high.ambient_temperature < low.ambient_temperature);

        for point in [low, high] {
            let expected = 300.15 - point.rejected_heat().get::<watt>() * 0.5;
            assert_relative_eq!(
                point.ambient_temperature.get::<kelvin>(),
                expected,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn grouping_preserves_input_order() {
        let tec = cp353047();
        let t_hots = vec![temp_k(330.0), temp_k(300.0), temp_k(315.0)];
        let currents = vec![amps(2.0), amps(0.5), amps(4.0), amps(1.0)];

        let sweep = Sweep::new(temp_k(283.15), t_hots.clone(), currents.clone(), sink(0.2))
            .unwrap();
        assert_eq!(sweep.len(), 12);

        let results = sweep.evaluate(&tec).unwrap();
        assert_eq!(results.len(), 12);
        assert_eq!(results.points().count(), 12);
        assert_eq!(results.groups.len(), 3);

        for (group, t_hot) in results.groups.iter().zip(&t_hots) {
            assert_eq!(group.t_hot, *t_hot);
            assert_eq!(group.points.len(), 4);
            for (point, current) in group.points.iter().zip(&currents) {
                assert_eq!(point.conditions.current, *current);
                assert_eq!(point.conditions.t_hot, *t_hot);
                assert_eq!(point.conditions.t_cold, temp_k(283.15));
            }
        }
    }

    #[test]
    fn points_match_direct_evaluation() {
        let tec = cp353047();
        let sweep = Sweep::datasheet_characterization();
        let results = sweep.evaluate(&tec).unwrap();

        for point in results.points() {
            let c = point.conditions;
            let params = tec.operating_params(c.current, c.t_hot, c.t_cold).unwrap();
            assert_eq!(point.params, params);
            assert_eq!(
                point.params.coefficient_of_performance.get::<ratio>(),
                tec.coefficient_of_performance(c.current, c.t_hot, c.t_cold)
                    .unwrap()
                    .get::<ratio>()
            );
        }
    }

    #[test]
    fn zero_sink_resistance_pins_ambient_to_hot_side() {
        let tec = cp353047();
        let sweep = Sweep::new(
            temp_k(278.15),
            vec![temp_k(310.0)],
            vec![amps(3.0)],
            NonNegative::zero(),
        )
        .unwrap();

        let results = sweep.evaluate(&tec).unwrap();
        let point = results.points().next().unwrap();
        assert_eq!(point.ambient_temperature, temp_k(310.0));
    }

    #[test]
    fn datasheet_characterization_axes() {
        let sweep = Sweep::datasheet_characterization();

        assert_eq!(sweep.len(), 120);
        assert!(!sweep.is_empty());
        assert_relative_eq!(sweep.t_cold().get::<kelvin>(), 278.15, epsilon = 1e-9);
        assert_relative_eq!(
            sweep.t_hots()[0].get::<degree_celsius>(),
            27.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            sweep.t_hots()[5].get::<degree_celsius>(),
            55.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(sweep.currents()[0].get::<ampere>(), 1.0);
        assert_relative_eq!(sweep.currents()[19].get::<ampere>(), 5.0);
        assert_eq!(sweep.sink_resistance(), kelvin_per_watt(0.5));
    }

    #[test]
    fn rejects_empty_axes() {
        assert_eq!(
            Sweep::new(temp_k(278.15), vec![], vec![amps(1.0)], sink(0.5)),
            Err(SweepError::NoHotSideTemperatures)
        );
        assert_eq!(
            Sweep::new(temp_k(278.15), vec![temp_k(300.0)], vec![], sink(0.5)),
            Err(SweepError::NoCurrents)
        );
    }

    #[test]
    fn rejects_non_positive_currents() {
        let result = Sweep::new(
            temp_k(278.15),
            vec![temp_k(300.0)],
            vec![amps(1.0), amps(0.0)],
            sink(0.5),
        );

        assert_eq!(
            result,
            Err(SweepError::InvalidCurrent {
                index: 1,
                current: amps(0.0),
                source: ConstraintError::Zero,
            })
        );
    }

    #[test]
    fn invalid_hot_side_aborts_whole_sweep() {
        let tec = cp353047();
        let sweep = Sweep::new(
            temp_k(278.15),
            vec![temp_k(300.0), temp_k(60.0)],
            vec![amps(1.0)],
            sink(0.5),
        )
        .unwrap();

        let err = sweep.evaluate(&tec).unwrap_err();
        assert!(matches!(
            err,
            SweepError::OperatingPoint { t_hot, .. } if t_hot == temp_k(60.0)
        ));
    }
}
