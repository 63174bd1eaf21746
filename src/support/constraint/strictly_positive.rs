use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Used for quantities that appear in a denominator or a logarithm, such as
/// the exchange current density, or that define a scale, such as the
/// nominal power of an electrolyzer.
///
/// # Examples
///
/// ```
/// use electrolysis_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let j0 = StrictlyPositive::new(1e-3).unwrap();
/// assert_eq!(j0.into_inner(), 1e-3);
///
/// assert!(Constrained::<_, StrictlyPositive>::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Power, power::kilowatt};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-4).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn integers() {
        assert!(StrictlyPositive::new(100_u32).is_ok());
        assert!(StrictlyPositive::new(0_u32).is_err());
    }

    #[test]
    fn powers() {
        assert!(StrictlyPositive::new(Power::new::<kilowatt>(500.0)).is_ok());
        assert!(StrictlyPositive::new(Power::new::<kilowatt>(0.0)).is_err());
        assert!(StrictlyPositive::new(Power::new::<kilowatt>(-1.0)).is_err());
    }
}
