use uom::{
    ConstZero,
    si::{
        f64::{Power, Ratio},
        ratio::ratio,
    },
};

use crate::models::electrochemical::electrolyzer::TechnologyParameters;

/// Part-load derating brackets as `(upper load fraction, multiplier)`.
///
/// Each bracket covers loads below its upper bound; loads at or above the
/// last bound run at full nominal efficiency.
const LOAD_BRACKETS: [(f64, f64); 3] = [(0.3, 0.85), (0.6, 0.92), (0.9, 0.98)];

/// Returns the efficiency multiplier for a load fraction `P / P_nom`.
pub(crate) fn load_factor(load_fraction: f64) -> f64 {
    LOAD_BRACKETS
        .iter()
        .find(|(upper, _)| load_fraction < *upper)
        .map_or(1.0, |(_, factor)| *factor)
}

/// Computes the load-dependent efficiency at `power`.
///
/// Zero or negative power yields zero efficiency.
pub(crate) fn instantaneous(
    parameters: &TechnologyParameters,
    nominal_power: Power,
    power: Power,
) -> Ratio {
    if power <= Power::ZERO || power.is_nan() {
        return Ratio::ZERO;
    }

    let load_fraction = (power / nominal_power).get::<ratio>();
    parameters.efficiency * load_factor(load_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::kilowatt;

    use crate::models::electrochemical::electrolyzer::Technology;

    #[test]
    fn bracket_boundaries_belong_to_upper_bracket() {
        assert_relative_eq!(load_factor(0.0), 0.85);
        assert_relative_eq!(load_factor(0.299_999), 0.85);
        assert_relative_eq!(load_factor(0.3), 0.92);
        assert_relative_eq!(load_factor(0.599_999), 0.92);
        assert_relative_eq!(load_factor(0.6), 0.98);
        assert_relative_eq!(load_factor(0.899_999), 0.98);
        assert_relative_eq!(load_factor(0.9), 1.0);
        assert_relative_eq!(load_factor(1.5), 1.0);
    }

    #[test]
    fn derates_nominal_efficiency() {
        let parameters = Technology::Alkaline.parameters();
        let nominal = Power::new::<kilowatt>(1000.0);

        let cases = [(100.0, 0.85), (450.0, 0.92), (800.0, 0.98), (1000.0, 1.0)];
        for (kw, factor) in cases {
            let eta = instantaneous(&parameters, nominal, Power::new::<kilowatt>(kw));
            assert_relative_eq!(eta.get::<ratio>(), 0.68 * factor, max_relative = 1e-12);
        }
    }

    #[test]
    fn zero_without_power() {
        let parameters = Technology::SolidOxide.parameters();
        let nominal = Power::new::<kilowatt>(500.0);
        assert_eq!(instantaneous(&parameters, nominal, Power::ZERO), Ratio::ZERO);
        assert_eq!(
            instantaneous(&parameters, nominal, Power::new::<kilowatt>(-5.0)),
            Ratio::ZERO
        );
    }
}
