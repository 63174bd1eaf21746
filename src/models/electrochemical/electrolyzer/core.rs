//! Steady-state electrolyzer equations.
//!
//! Pure functions of the technology parameters, free of any operating state.

pub mod constants;

pub(super) mod economics;
pub(super) mod efficiency;
pub(super) mod operating_point;
pub(super) mod production;
pub(super) mod stack;
pub(super) mod voltage;

pub use operating_point::{OperatingPoint, OperatingPointConfig, OperatingPointError};
pub use production::FaradayProduction;
pub use stack::StackGeometry;
pub use voltage::VoltageBreakdown;
