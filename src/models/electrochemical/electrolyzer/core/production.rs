use uom::{
    ConstZero,
    si::{
        electric_current::ampere,
        energy::kilowatt_hour,
        f64::{AvailableEnergy, ElectricCurrent, Energy, Mass, MassRate, Power, Ratio},
        mass::kilogram,
        mass_rate::kilogram_per_second,
        ratio::ratio,
    },
};

use crate::support::units::{MolarFlowRate, molar_flow_rate};

use crate::models::electrochemical::electrolyzer::TechnologyParameters;
use super::constants::{FARADAY_CONSTANT, HYDROGEN_LHV_KWH_PER_KG, HYDROGEN_MOLAR_MASS_G_PER_MOL};

/// Hydrogen production rate predicted by Faraday's law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaradayProduction {
    /// Molar production rate.
    pub molar_rate: MolarFlowRate,
    /// Mass production rate.
    pub mass_rate: MassRate,
}

/// Lower heating value of hydrogen as a specific energy.
pub(crate) fn hydrogen_lhv() -> AvailableEnergy {
    Energy::new::<kilowatt_hour>(HYDROGEN_LHV_KWH_PER_KG) / Mass::new::<kilogram>(1.0)
}

/// Computes the hydrogen mass rate from an energy balance on the LHV.
///
/// `ṁ = min(P_in, P_nom) · η / LHV`
///
/// Input power at or below zero yields no production.
/// Input power above nominal is clamped to nominal.
pub(crate) fn from_power(
    parameters: &TechnologyParameters,
    nominal_power: Power,
    power_in: Power,
) -> MassRate {
    if power_in <= Power::ZERO || power_in.is_nan() {
        return MassRate::ZERO;
    }

    let effective = if power_in > nominal_power {
        nominal_power
    } else {
        power_in
    };

    effective * parameters.efficiency.get::<ratio>() / hydrogen_lhv()
}

/// Computes the hydrogen production rate from stack current (Faraday's law).
///
/// `ṅ = η_F · I / F`, and `ṁ = ṅ · M_H₂`.
///
/// The current is not clamped, so a negative current yields a negative rate.
pub(crate) fn from_current(
    current: ElectricCurrent,
    faraday_efficiency: Ratio,
) -> FaradayProduction {
    let moles_per_second =
        faraday_efficiency.get::<ratio>() * current.get::<ampere>() / FARADAY_CONSTANT;
    let kilograms_per_second = moles_per_second * HYDROGEN_MOLAR_MASS_G_PER_MOL / 1000.0;

    FaradayProduction {
        molar_rate: molar_flow_rate(moles_per_second),
        mass_rate: MassRate::new::<kilogram_per_second>(kilograms_per_second),
    }
}
