use uom::si::{
    f64::{Power, Ratio, Time},
    power::kilowatt,
    ratio::ratio,
    time::year,
};

use crate::models::electrochemical::electrolyzer::TechnologyParameters;

/// Fractional efficiency loss per year of operation.
pub const ANNUAL_DEGRADATION_RATE: f64 = 0.005;

/// Lowest remaining fraction of the original efficiency.
pub const DEGRADATION_FLOOR: f64 = 0.7;

/// Exchange rate applied when none is given: table currency (USD) to BRL.
pub const DEFAULT_EXCHANGE_RATE: f64 = 5.0;

/// Computes the capital cost of a unit of `nominal_power`.
///
/// `CAPEX = P_nom[kW] · capex_per_kW · exchange_rate`
pub(crate) fn capex(
    parameters: &TechnologyParameters,
    nominal_power: Power,
    exchange_rate: f64,
) -> f64 {
    nominal_power.get::<kilowatt>() * parameters.capex_per_kw * exchange_rate
}

/// Estimates the remaining fraction of nominal efficiency after `operating_time`.
///
/// Linear decline of 0.5 % per year, floored at 70 %.
pub(crate) fn degradation_factor(operating_time: Time) -> Ratio {
    let years = operating_time.get::<year>();
    Ratio::new::<ratio>((1.0 - ANNUAL_DEGRADATION_RATE * years).max(DEGRADATION_FLOOR))
}
