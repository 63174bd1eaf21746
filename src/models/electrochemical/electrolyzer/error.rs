use thiserror::Error;
use uom::si::f64::Power;

use crate::support::constraint::ConstraintError;

/// A technology tag that is not one of `AEL`, `PEMEL` or `SOEL`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid technology {tag:?}: expected one of AEL, PEMEL, SOEL")]
pub struct InvalidTechnology {
    /// The tag as provided by the caller.
    pub tag: String,
}

/// Errors that can occur while building an [`Electrolyzer`](super::Electrolyzer).
///
/// Limit excursions during operation are not errors; they are reported as
/// [`Advisory`](super::Advisory) flags on the step result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElectrolyzerError {
    /// The technology tag could not be parsed.
    #[error(transparent)]
    InvalidTechnology(#[from] InvalidTechnology),

    /// A parameter override named a parameter that does not exist.
    #[error("unknown parameter {name:?}")]
    UnknownParameter { name: String },

    /// A resolved parameter violates its physical constraint.
    #[error("invalid parameter {name}={value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The nominal power is not strictly positive.
    #[error("invalid nominal power: {power:?}")]
    InvalidNominalPower {
        power: Power,
        #[source]
        source: ConstraintError,
    },

    /// The stack geometry is degenerate.
    #[error("invalid stack geometry: {field}")]
    InvalidStack {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },
}
