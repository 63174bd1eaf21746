//! Supporting utilities shared by models.
//!
//! - [`constraint`]: Type-level numeric invariants checked at construction.
//! - [`units`]: Quantity aliases and conversions that [`uom`] does not provide.

pub mod constraint;
pub mod units;
