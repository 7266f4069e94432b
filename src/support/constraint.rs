//! Numeric invariants carried in the type.
//!
//! Datasheet ratings must be strictly positive, heat sink resistances
//! non-negative, and the drive current of a COP evaluation non-zero. A
//! [`Constrained<T, C>`] value has passed the check for marker `C` once, at
//! construction, so code receiving it can rely on the invariant without
//! checking again.
//!
//! # Markers
//!
//! - [`NonNegative`]: zero or greater
//! - [`NonZero`]: not equal to zero
//! - [`StrictlyPositive`]: greater than zero
//!
//! Each marker also has an associated `new()` shorthand, e.g.
//! `StrictlyPositive::new(3.5)`. The markers are generic over any
//! `PartialOrd + Zero` type, so they apply equally to `f64` and to [`uom`]
//! quantities. `NaN` never satisfies a constraint.
//!
//! Other invariants can be added by implementing [`Constraint<T>`] for a new
//! zero-sized marker.

mod non_negative;
mod non_zero;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A value known to satisfy constraint `C`.
///
/// # Example
///
/// ```
/// use tec_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let i_max = Constrained::<_, StrictlyPositive>::new(3.5).unwrap();
/// assert_eq!(*i_max.as_ref(), 3.5);
/// assert_eq!(i_max.into_inner(), 3.5);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
