//! Physical constants used by the electrolyzer equations.

/// Universal gas constant, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;

/// Faraday constant, C/mol.
pub const FARADAY_CONSTANT: f64 = 96_485.0;

/// Lower heating value of hydrogen, kWh/kg.
pub const HYDROGEN_LHV_KWH_PER_KG: f64 = 33.33;

/// Molar mass of hydrogen, g/mol.
pub const HYDROGEN_MOLAR_MASS_G_PER_MOL: f64 = 2.016;

/// Faraday efficiency assumed when the caller does not provide one.
pub const DEFAULT_FARADAY_EFFICIENCY: f64 = 0.95;

/// Decimal-logarithm factor of the Tafel slope, `ln(10)` to three decimals.
pub(super) const TAFEL_LOG_FACTOR: f64 = 2.303;

/// Lower bound on `j / j₀` before taking the logarithm.
pub(super) const MIN_CURRENT_RATIO: f64 = 1e-10;
