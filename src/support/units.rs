//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., power, voltage, temperature).
//! This module provides the electrochemical quantities that aren't included in [`uom`]
//! and small helpers for building and reading them.
//!
//! ## Electrochemical quantities
//!
//! - [`CurrentDensity`]: electric current per unit electrode area (A/m²).
//! - [`AreaSpecificResistance`]: ohmic resistance of one square meter of cell (Ω·m²).
//! - [`MolarFlowRate`]: amount of substance per unit time (mol/s).
//!
//! These are plain [`uom::si::Quantity`] aliases, so products and quotients of
//! standard quantities convert into them directly:
//!
//! ```
//! use electrolysis_models::support::units::{CurrentDensity, area_specific_resistance, current_density};
//! use uom::si::{
//!     electric_current::ampere, electric_potential::volt,
//!     f64::{Area, ElectricCurrent, ElectricPotential},
//!     area::square_meter,
//! };
//!
//! let j: CurrentDensity = ElectricCurrent::new::<ampere>(5000.0) / Area::new::<square_meter>(5.0);
//! assert_eq!(j, current_density(1000.0));
//!
//! let v_ohm: ElectricPotential = j * area_specific_resistance(0.001);
//! assert!((v_ohm.get::<volt>() - 1.0).abs() < 1e-12);
//! ```

mod quantities;

pub use quantities::{AreaSpecificResistance, CurrentDensity, MolarFlowRate};

use uom::si::{
    amount_of_substance::mole,
    area::square_meter,
    electric_current::ampere,
    electrical_resistance::ohm,
    f64::{AmountOfSubstance, Area, ElectricCurrent, ElectricalResistance, MassRate, Time},
    mass::kilogram,
    time::{hour, second},
};

/// Builds a current density from a value in A/m².
#[must_use]
pub fn current_density(amperes_per_square_meter: f64) -> CurrentDensity {
    ElectricCurrent::new::<ampere>(amperes_per_square_meter) / Area::new::<square_meter>(1.0)
}

/// Builds an area-specific resistance from a value in Ω·m².
#[must_use]
pub fn area_specific_resistance(ohm_square_meters: f64) -> AreaSpecificResistance {
    ElectricalResistance::new::<ohm>(ohm_square_meters) * Area::new::<square_meter>(1.0)
}

/// Builds a molar flow rate from a value in mol/s.
#[must_use]
pub fn molar_flow_rate(moles_per_second: f64) -> MolarFlowRate {
    AmountOfSubstance::new::<mole>(moles_per_second) / Time::new::<second>(1.0)
}

/// Returns a mass flow rate expressed in kg/h.
#[must_use]
pub fn kilograms_per_hour(rate: MassRate) -> f64 {
    (rate * Time::new::<hour>(1.0)).get::<kilogram>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass_rate::kilogram_per_second;

    #[test]
    fn base_unit_values() {
        assert_relative_eq!(current_density(1000.0).value, 1000.0);
        assert_relative_eq!(area_specific_resistance(0.0008).value, 0.0008);
        assert_relative_eq!(molar_flow_rate(0.25).value, 0.25);
    }

    #[test]
    fn mass_rate_per_hour() {
        let rate = MassRate::new::<kilogram_per_second>(1.0 / 3600.0);
        assert_relative_eq!(kilograms_per_hour(rate), 1.0, epsilon = 1e-12);
    }
}
