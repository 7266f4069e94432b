use thiserror::Error;
use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};

use crate::{
    models::thermal::tec::core::OperatingPointError, support::constraint::ConstraintError,
};

/// Errors that can occur while defining or evaluating a sweep.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error("sweep needs at least one hot-side temperature")]
    NoHotSideTemperatures,

    #[error("sweep needs at least one current")]
    NoCurrents,

    /// A sweep current is zero, negative, or `NaN`.
    #[error("sweep current #{index} ({current:?}) is invalid: {source}")]
    InvalidCurrent {
        index: usize,
        current: ElectricCurrent,

        #[source]
        source: ConstraintError,
    },

    /// An operating point could not be evaluated.
    ///
    /// The sweep stops at the first failing point.
    #[error("operating point failed at t_hot={t_hot:?}, current={current:?}")]
    OperatingPoint {
        t_hot: ThermodynamicTemperature,
        current: ElectricCurrent,

        #[source]
        source: OperatingPointError,
    },
}
