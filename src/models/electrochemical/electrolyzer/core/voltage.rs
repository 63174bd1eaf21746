use uom::{
    ConstZero,
    si::{
        electric_potential::volt,
        f64::{ElectricPotential, ThermodynamicTemperature},
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    },
};

use crate::models::electrochemical::electrolyzer::TechnologyParameters;
use crate::support::units::CurrentDensity;

use super::constants::{FARADAY_CONSTANT, GAS_CONSTANT, MIN_CURRENT_RATIO, TAFEL_LOG_FACTOR};

/// Cell voltage split into its reversible part and its losses.
///
/// `V = V_rev + V_act + V_ohm`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageBreakdown {
    /// Reversible (thermodynamic) cell voltage.
    pub reversible: ElectricPotential,
    /// Activation overpotential from the Tafel equation.
    pub activation: ElectricPotential,
    /// Ohmic loss across the area-specific resistance.
    pub ohmic: ElectricPotential,
}

impl VoltageBreakdown {
    /// Returns the total cell voltage.
    #[must_use]
    pub fn total(&self) -> ElectricPotential {
        self.reversible + self.activation + self.ohmic
    }
}

/// Computes the cell voltage components at current density `j` and temperature `t`.
pub(crate) fn breakdown(
    parameters: &TechnologyParameters,
    j: CurrentDensity,
    t: ThermodynamicTemperature,
) -> VoltageBreakdown {
    VoltageBreakdown {
        reversible: parameters.reversible_voltage,
        activation: activation_overpotential(parameters, j, t),
        ohmic: j * parameters.ohmic_resistance,
    }
}

/// Computes the activation overpotential with the Tafel equation.
///
/// `V_act = (2.303·R·T / (α·F)) · log₁₀(max(j/j₀, 1e-10))`
///
/// Returns zero for `j ≤ 0`.
/// The result is floored at zero, so current densities below `j₀` produce no
/// overpotential even though the raw Tafel term is negative there.
pub(crate) fn activation_overpotential(
    parameters: &TechnologyParameters,
    j: CurrentDensity,
    t: ThermodynamicTemperature,
) -> ElectricPotential {
    if j <= CurrentDensity::ZERO || j.is_nan() {
        return ElectricPotential::ZERO;
    }

    let alpha = parameters.transfer_coefficient.get::<ratio>();
    let tafel_slope =
        TAFEL_LOG_FACTOR * GAS_CONSTANT * t.get::<kelvin>() / (alpha * FARADAY_CONSTANT);
    let current_ratio =
        (j.value / parameters.exchange_current_density.value).max(MIN_CURRENT_RATIO);

    ElectricPotential::new::<volt>((tafel_slope * current_ratio.log10()).max(0.0))
}
