use thiserror::Error;
use uom::si::f64::{ElectricCurrent, ElectricPotential, Power, TemperatureInterval};

use crate::support::constraint::{Constraint, ConstraintError, StrictlyPositive};

/// A pair of ratings published at the two datasheet hot-side temperatures.
///
/// TEC datasheets tabulate performance at a hot-side temperature of 27 °C and
/// again at 50 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotSideRatings<T> {
    /// Rating at a hot-side temperature of 27 °C.
    pub at_27c: T,

    /// Rating at a hot-side temperature of 50 °C.
    pub at_50c: T,
}

/// Errors raised while validating datasheet ratings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingsError {
    #[error("part number must not be empty")]
    EmptyPartNumber,

    #[error("invalid {rating} rating: {source}")]
    NotStrictlyPositive {
        /// Datasheet symbol of the offending rating.
        rating: &'static str,

        #[source]
        source: ConstraintError,
    },
}

/// Published datasheet ratings of a TEC module.
///
/// `v_max` and `i_max` are the voltage and current at the maximum-ΔT operating
/// point with the hot side at 27 °C. `q_max` is the maximum cooling capacity at
/// zero ΔT, and `delta_t_max` the maximum temperature difference at zero heat
/// load, each rated at both hot-side temperatures.
///
/// Every numeric rating is strictly positive and the record never changes
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRatings {
    part_number: String,
    datasheet_reference: String,
    v_max: ElectricPotential,
    i_max: ElectricCurrent,
    q_max: HotSideRatings<Power>,
    delta_t_max: HotSideRatings<TemperatureInterval>,
}

impl DeviceRatings {
    /// Constructs validated device ratings.
    ///
    /// # Errors
    ///
    /// Returns [`RatingsError::EmptyPartNumber`] for a blank part number, or
    /// [`RatingsError::NotStrictlyPositive`] naming the first numeric rating
    /// that is zero, negative, or `NaN`.
    pub fn new(
        part_number: impl Into<String>,
        datasheet_reference: impl Into<String>,
        v_max: ElectricPotential,
        i_max: ElectricCurrent,
        q_max: HotSideRatings<Power>,
        delta_t_max: HotSideRatings<TemperatureInterval>,
    ) -> Result<Self, RatingsError> {
        let part_number = part_number.into();
        if part_number.trim().is_empty() {
            return Err(RatingsError::EmptyPartNumber);
        }

        check_positive("V_max", &v_max)?;
        check_positive("I_max", &i_max)?;
        check_positive("Q_max(27 °C)", &q_max.at_27c)?;
        check_positive("Q_max(50 °C)", &q_max.at_50c)?;
        check_positive("ΔT_max(27 °C)", &delta_t_max.at_27c)?;
        check_positive("ΔT_max(50 °C)", &delta_t_max.at_50c)?;

        Ok(Self {
            part_number,
            datasheet_reference: datasheet_reference.into(),
            v_max,
            i_max,
            q_max,
            delta_t_max,
        })
    }

    /// Manufacturer part number.
    #[must_use]
    pub fn part_number(&self) -> &str {
        &self.part_number
    }

    /// Datasheet link or citation. Informational only.
    #[must_use]
    pub fn datasheet_reference(&self) -> &str {
        &self.datasheet_reference
    }

    #[must_use]
    pub fn v_max(&self) -> ElectricPotential {
        self.v_max
    }

    #[must_use]
    pub fn i_max(&self) -> ElectricCurrent {
        self.i_max
    }

    #[must_use]
    pub fn q_max(&self) -> HotSideRatings<Power> {
        self.q_max
    }

    #[must_use]
    pub fn delta_t_max(&self) -> HotSideRatings<TemperatureInterval> {
        self.delta_t_max
    }
}

fn check_positive<T>(rating: &'static str, value: &T) -> Result<(), RatingsError>
where
    StrictlyPositive: Constraint<T>,
{
    StrictlyPositive::check(value)
        .map_err(|source| RatingsError::NotStrictlyPositive { rating, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        electric_current::ampere, electric_potential::volt, power::watt,
        temperature_interval::kelvin as delta_kelvin,
    };

    fn q_max(at_27c: f64, at_50c: f64) -> HotSideRatings<Power> {
        HotSideRatings {
            at_27c: Power::new::<watt>(at_27c),
            at_50c: Power::new::<watt>(at_50c),
        }
    }

    fn delta_t_max(at_27c: f64, at_50c: f64) -> HotSideRatings<TemperatureInterval> {
        HotSideRatings {
            at_27c: TemperatureInterval::new::<delta_kelvin>(at_27c),
            at_50c: TemperatureInterval::new::<delta_kelvin>(at_50c),
        }
    }

    #[test]
    fn ratings_are_kept_unchanged() {
        let ratings = DeviceRatings::new(
            "CP353047",
            "cp35.pdf",
            ElectricPotential::new::<volt>(11.8),
            ElectricCurrent::new::<ampere>(3.5),
            q_max(24.0, 26.0),
            delta_t_max(70.0, 77.0),
        )
        .unwrap();

        assert_eq!(ratings.part_number(), "CP353047");
        assert_eq!(ratings.datasheet_reference(), "cp35.pdf");
        assert_eq!(ratings.v_max().get::<volt>(), 11.8);
        assert_eq!(ratings.i_max().get::<ampere>(), 3.5);
        assert_eq!(ratings.q_max(), q_max(24.0, 26.0));
        assert_eq!(ratings.delta_t_max(), delta_t_max(70.0, 77.0));
    }

    #[test]
    fn rejects_empty_part_number() {
        let result = DeviceRatings::new(
            "  ",
            "",
            ElectricPotential::new::<volt>(11.8),
            ElectricCurrent::new::<ampere>(3.5),
            q_max(24.0, 26.0),
            delta_t_max(70.0, 77.0),
        );

        assert_eq!(result, Err(RatingsError::EmptyPartNumber));
    }

    #[test]
    fn rejects_non_positive_ratings() {
        let result = DeviceRatings::new(
            "CP35147",
            "",
            ElectricPotential::new::<volt>(2.1),
            ElectricCurrent::new::<ampere>(0.0),
            q_max(3.9, 4.3),
            delta_t_max(68.0, 75.0),
        );
        assert_eq!(
            result,
            Err(RatingsError::NotStrictlyPositive {
                rating: "I_max",
                source: ConstraintError::Zero,
            })
        );

        let result = DeviceRatings::new(
            "CP35147",
            "",
            ElectricPotential::new::<volt>(2.1),
            ElectricCurrent::new::<ampere>(3.5),
            q_max(3.9, 4.3),
            delta_t_max(68.0, f64::NAN),
        );
        assert_eq!(
            result,
            Err(RatingsError::NotStrictlyPositive {
                rating: "ΔT_max(50 °C)",
                source: ConstraintError::NotANumber,
            })
        );
    }
}
