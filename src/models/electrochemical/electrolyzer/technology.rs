//! Electrolysis technologies and their parameter sets.
//!
//! Every technology has one canonical parameter set, stored as a read-only
//! table of plain numbers in canonical units.
//! An electrolyzer copies the canonical set for its technology, applies any
//! [`ParameterOverrides`], validates the result and converts it into a
//! [`TechnologyParameters`] record of physical quantities.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Pressure, Ratio, ThermodynamicTemperature, Time},
    pressure::bar,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    time::year,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive, UnitInterval, UnitIntervalLowerOpen},
    units::{AreaSpecificResistance, CurrentDensity, area_specific_resistance, current_density},
};

use super::error::{ElectrolyzerError, InvalidTechnology};

/// Water electrolysis technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technology {
    /// Alkaline electrolysis (AEL).
    Alkaline,
    /// Proton-exchange-membrane electrolysis (PEMEL).
    ProtonExchangeMembrane,
    /// Solid-oxide electrolysis (SOEL).
    SolidOxide,
}

impl Technology {
    /// All supported technologies, in order of increasing nominal efficiency.
    pub const ALL: [Technology; 3] = [
        Technology::Alkaline,
        Technology::ProtonExchangeMembrane,
        Technology::SolidOxide,
    ];

    /// Returns the short tag used to name this technology.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Technology::Alkaline => "AEL",
            Technology::ProtonExchangeMembrane => "PEMEL",
            Technology::SolidOxide => "SOEL",
        }
    }

    /// Returns the canonical parameters for this technology.
    #[must_use]
    pub fn parameters(self) -> TechnologyParameters {
        TechnologyParameters::from_set(self.parameter_set())
    }

    pub(super) fn parameter_set(self) -> ParameterSet {
        match self {
            Technology::Alkaline => ALKALINE,
            Technology::ProtonExchangeMembrane => PROTON_EXCHANGE_MEMBRANE,
            Technology::SolidOxide => SOLID_OXIDE,
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses a technology tag, ignoring case and surrounding whitespace.
impl FromStr for Technology {
    type Err = InvalidTechnology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Technology::ALL
            .into_iter()
            .find(|technology| technology.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidTechnology { tag: s.to_owned() })
    }
}

/// Raw parameter values in canonical units.
///
/// Units: fraction, V, dimensionless, A/m², Ω·m², °C, bar, years, currency/kW.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ParameterSet {
    efficiency: f64,
    reversible_voltage: f64,
    transfer_coefficient: f64,
    exchange_current_density: f64,
    ohmic_resistance: f64,
    operating_temperature: f64,
    operating_pressure: f64,
    service_life_years: f64,
    capex_per_kw: f64,
}

const ALKALINE: ParameterSet = ParameterSet {
    efficiency: 0.68,
    reversible_voltage: 1.23,
    transfer_coefficient: 0.5,
    exchange_current_density: 1e-3,
    ohmic_resistance: 0.001,
    operating_temperature: 70.0,
    operating_pressure: 30.0,
    service_life_years: 20.0,
    capex_per_kw: 800.0,
};

const PROTON_EXCHANGE_MEMBRANE: ParameterSet = ParameterSet {
    efficiency: 0.78,
    reversible_voltage: 1.23,
    transfer_coefficient: 0.5,
    exchange_current_density: 1e-4,
    ohmic_resistance: 0.0008,
    operating_temperature: 60.0,
    operating_pressure: 35.0,
    service_life_years: 15.0,
    capex_per_kw: 1200.0,
};

const SOLID_OXIDE: ParameterSet = ParameterSet {
    efficiency: 0.89,
    reversible_voltage: 0.95,
    transfer_coefficient: 0.7,
    exchange_current_density: 1e-2,
    ohmic_resistance: 0.002,
    operating_temperature: 750.0,
    operating_pressure: 1.0,
    service_life_years: 10.0,
    capex_per_kw: 2000.0,
};

const CELSIUS_OFFSET: f64 = 273.15;

impl ParameterSet {
    fn validate(&self) -> Result<(), ElectrolyzerError> {
        check::<UnitInterval>("efficiency", self.efficiency)?;
        check::<StrictlyPositive>("reversible_voltage", self.reversible_voltage)?;
        check::<UnitIntervalLowerOpen>("transfer_coefficient", self.transfer_coefficient)?;
        check::<StrictlyPositive>("exchange_current_density", self.exchange_current_density)?;
        check::<NonNegative>("ohmic_resistance", self.ohmic_resistance)?;
        StrictlyPositive::check(&(self.operating_temperature + CELSIUS_OFFSET)).map_err(
            |source| ElectrolyzerError::InvalidParameter {
                name: "operating_temperature",
                value: self.operating_temperature,
                source,
            },
        )?;
        check::<NonNegative>("operating_pressure", self.operating_pressure)?;
        check::<StrictlyPositive>("service_life_years", self.service_life_years)?;
        check::<NonNegative>("capex_per_kw", self.capex_per_kw)
    }
}

fn check<C: Constraint<f64>>(name: &'static str, value: f64) -> Result<(), ElectrolyzerError> {
    C::check(&value).map_err(|source| ElectrolyzerError::InvalidParameter {
        name,
        value,
        source,
    })
}

/// Technology-specific electrochemical and economic parameters.
///
/// Instances produced by [`Technology::parameters`] and
/// [`TechnologyParameters::resolve`] always satisfy the physical constraints
/// of each field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechnologyParameters {
    /// Nominal energy efficiency (LHV basis).
    pub efficiency: Ratio,
    /// Reversible cell voltage.
    pub reversible_voltage: ElectricPotential,
    /// Charge-transfer coefficient α of the Tafel equation.
    pub transfer_coefficient: Ratio,
    /// Exchange current density j₀.
    pub exchange_current_density: CurrentDensity,
    /// Area-specific ohmic resistance.
    pub ohmic_resistance: AreaSpecificResistance,
    /// Design operating temperature.
    pub operating_temperature: ThermodynamicTemperature,
    /// Design operating pressure.
    pub operating_pressure: Pressure,
    /// Expected service life.
    pub service_life: Time,
    /// Capital cost per kW of nominal power, in the table currency (USD).
    pub capex_per_kw: f64,
}

impl TechnologyParameters {
    /// Resolves the parameters for `technology` with `overrides` applied.
    ///
    /// # Errors
    ///
    /// Returns [`ElectrolyzerError::InvalidParameter`] if an overridden value
    /// violates its physical constraint.
    pub fn resolve(
        technology: Technology,
        overrides: &ParameterOverrides,
    ) -> Result<Self, ElectrolyzerError> {
        let set = overrides.apply(technology.parameter_set());
        set.validate()?;
        Ok(Self::from_set(set))
    }

    fn from_set(set: ParameterSet) -> Self {
        Self {
            efficiency: Ratio::new::<ratio>(set.efficiency),
            reversible_voltage: ElectricPotential::new::<volt>(set.reversible_voltage),
            transfer_coefficient: Ratio::new::<ratio>(set.transfer_coefficient),
            exchange_current_density: current_density(set.exchange_current_density),
            ohmic_resistance: area_specific_resistance(set.ohmic_resistance),
            operating_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                set.operating_temperature,
            ),
            operating_pressure: Pressure::new::<bar>(set.operating_pressure),
            service_life: Time::new::<year>(set.service_life_years),
            capex_per_kw: set.capex_per_kw,
        }
    }
}

/// Optional replacements for canonical parameter values.
///
/// Values use the canonical units of the parameter table:
///
/// | name | unit |
/// |---|---|
/// | `efficiency` | fraction |
/// | `reversible_voltage` | V |
/// | `transfer_coefficient` | dimensionless |
/// | `exchange_current_density` | A/m² |
/// | `ohmic_resistance` | Ω·m² |
/// | `operating_temperature` | °C |
/// | `operating_pressure` | bar |
/// | `service_life_years` | years |
/// | `capex_per_kw` | currency/kW |
///
/// Unknown names are rejected, both by [`ParameterOverrides::set`] and when
/// deserializing.
///
/// # Example
///
/// ```
/// use electrolysis_models::models::electrochemical::electrolyzer::ParameterOverrides;
///
/// let overrides = ParameterOverrides::from_pairs([("efficiency", 0.72)]).unwrap();
/// assert_eq!(overrides.efficiency, Some(0.72));
///
/// assert!(ParameterOverrides::from_pairs([("eficiencia", 0.72)]).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterOverrides {
    pub efficiency: Option<f64>,
    pub reversible_voltage: Option<f64>,
    pub transfer_coefficient: Option<f64>,
    pub exchange_current_density: Option<f64>,
    pub ohmic_resistance: Option<f64>,
    pub operating_temperature: Option<f64>,
    pub operating_pressure: Option<f64>,
    pub service_life_years: Option<f64>,
    pub capex_per_kw: Option<f64>,
}

impl ParameterOverrides {
    /// Recognized parameter names.
    pub const NAMES: [&'static str; 9] = [
        "efficiency",
        "reversible_voltage",
        "transfer_coefficient",
        "exchange_current_density",
        "ohmic_resistance",
        "operating_temperature",
        "operating_pressure",
        "service_life_years",
        "capex_per_kw",
    ];

    /// Sets the override for the parameter called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ElectrolyzerError::UnknownParameter`] if `name` is not one of
    /// [`ParameterOverrides::NAMES`].
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), ElectrolyzerError> {
        let slot = match name {
            "efficiency" => &mut self.efficiency,
            "reversible_voltage" => &mut self.reversible_voltage,
            "transfer_coefficient" => &mut self.transfer_coefficient,
            "exchange_current_density" => &mut self.exchange_current_density,
            "ohmic_resistance" => &mut self.ohmic_resistance,
            "operating_temperature" => &mut self.operating_temperature,
            "operating_pressure" => &mut self.operating_pressure,
            "service_life_years" => &mut self.service_life_years,
            "capex_per_kw" => &mut self.capex_per_kw,
            _ => {
                return Err(ElectrolyzerError::UnknownParameter {
                    name: name.to_owned(),
                });
            }
        };
        *slot = Some(value);
        Ok(())
    }

    /// Builds overrides from `(name, value)` pairs; later pairs win.
    ///
    /// # Errors
    ///
    /// Returns [`ElectrolyzerError::UnknownParameter`] on the first unknown name.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, ElectrolyzerError> {
        let mut overrides = Self::default();
        for (name, value) in pairs {
            overrides.set(name, value)?;
        }
        Ok(overrides)
    }

    fn apply(&self, base: ParameterSet) -> ParameterSet {
        ParameterSet {
            efficiency: self.efficiency.unwrap_or(base.efficiency),
            reversible_voltage: self.reversible_voltage.unwrap_or(base.reversible_voltage),
            transfer_coefficient: self
                .transfer_coefficient
                .unwrap_or(base.transfer_coefficient),
            exchange_current_density: self
                .exchange_current_density
                .unwrap_or(base.exchange_current_density),
            ohmic_resistance: self.ohmic_resistance.unwrap_or(base.ohmic_resistance),
            operating_temperature: self
                .operating_temperature
                .unwrap_or(base.operating_temperature),
            operating_pressure: self.operating_pressure.unwrap_or(base.operating_pressure),
            service_life_years: self.service_life_years.unwrap_or(base.service_life_years),
            capex_per_kw: self.capex_per_kw.unwrap_or(base.capex_per_kw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::kelvin;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("AEL".parse::<Technology>(), Ok(Technology::Alkaline));
        assert_eq!("pemel".parse::<Technology>(), Ok(Technology::ProtonExchangeMembrane));
        assert_eq!(" Soel ".parse::<Technology>(), Ok(Technology::SolidOxide));

        for technology in Technology::ALL {
            assert_eq!(technology.to_string().parse::<Technology>(), Ok(technology));
        }
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = "INVALIDO".parse::<Technology>().unwrap_err();
        assert_eq!(err.tag, "INVALIDO");
        assert!("".parse::<Technology>().is_err());
        assert!("AEL2".parse::<Technology>().is_err());
    }

    #[test]
    fn canonical_alkaline_parameters() {
        let p = Technology::Alkaline.parameters();
        assert_relative_eq!(p.efficiency.get::<ratio>(), 0.68, epsilon = 1e-9);
        assert_relative_eq!(p.reversible_voltage.get::<volt>(), 1.23, epsilon = 1e-9);
        assert_relative_eq!(p.transfer_coefficient.get::<ratio>(), 0.5, epsilon = 1e-9);
        assert_relative_eq!(p.exchange_current_density.value, 1e-3);
        assert_relative_eq!(p.ohmic_resistance.value, 0.001);
        assert_relative_eq!(p.operating_temperature.get::<kelvin>(), 343.15, epsilon = 1e-9);
        assert_relative_eq!(p.operating_pressure.get::<bar>(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(p.service_life.get::<year>(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(p.capex_per_kw, 800.0);
    }

    #[test]
    fn canonical_pem_and_solid_oxide_parameters() {
        let pem = Technology::ProtonExchangeMembrane.parameters();
        assert_relative_eq!(pem.efficiency.get::<ratio>(), 0.78, epsilon = 1e-9);
        assert_relative_eq!(pem.exchange_current_density.value, 1e-4);
        assert_relative_eq!(pem.ohmic_resistance.value, 0.0008);
        assert_relative_eq!(
            pem.operating_temperature.get::<degree_celsius>(),
            60.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(pem.operating_pressure.get::<bar>(), 35.0, epsilon = 1e-9);
        assert_relative_eq!(pem.service_life.get::<year>(), 15.0, epsilon = 1e-9);
        assert_relative_eq!(pem.capex_per_kw, 1200.0);

        let so = Technology::SolidOxide.parameters();
        assert_relative_eq!(so.efficiency.get::<ratio>(), 0.89, epsilon = 1e-9);
        assert_relative_eq!(so.reversible_voltage.get::<volt>(), 0.95, epsilon = 1e-9);
        assert_relative_eq!(so.transfer_coefficient.get::<ratio>(), 0.7, epsilon = 1e-9);
        assert_relative_eq!(so.exchange_current_density.value, 1e-2);
        assert_relative_eq!(so.ohmic_resistance.value, 0.002);
        assert_relative_eq!(
            so.operating_temperature.get::<degree_celsius>(),
            750.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(so.operating_pressure.get::<bar>(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(so.service_life.get::<year>(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(so.capex_per_kw, 2000.0);
    }

    #[test]
    fn canonical_sets_are_valid() {
        for technology in Technology::ALL {
            let resolved =
                TechnologyParameters::resolve(technology, &ParameterOverrides::default()).unwrap();
            assert_eq!(resolved, technology.parameters());
        }
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let overrides =
            ParameterOverrides::from_pairs([("efficiency", 0.7), ("capex_per_kw", 650.0)])
                .unwrap();
        let p = TechnologyParameters::resolve(Technology::Alkaline, &overrides).unwrap();

        assert_relative_eq!(p.efficiency.get::<ratio>(), 0.7, epsilon = 1e-9);
        assert_relative_eq!(p.capex_per_kw, 650.0);
        assert_relative_eq!(p.reversible_voltage.get::<volt>(), 1.23, epsilon = 1e-9);
        assert_relative_eq!(p.exchange_current_density.value, 1e-3);
    }

    #[test]
    fn later_pairs_win() {
        let overrides =
            ParameterOverrides::from_pairs([("efficiency", 0.5), ("efficiency", 0.6)]).unwrap();
        assert_eq!(overrides.efficiency, Some(0.6));
    }

    #[test]
    fn unknown_override_names_are_rejected() {
        let err = ParameterOverrides::from_pairs([("tensao_reversivel", 1.2)]).unwrap_err();
        assert_eq!(
            err,
            ElectrolyzerError::UnknownParameter {
                name: "tensao_reversivel".to_owned()
            }
        );
    }

    #[test]
    fn invalid_override_values_are_rejected() {
        let cases = [
            ("efficiency", 1.2, ConstraintError::AboveMaximum),
            ("transfer_coefficient", 0.0, ConstraintError::BelowMinimum),
            ("exchange_current_density", 0.0, ConstraintError::Zero),
            ("ohmic_resistance", -0.001, ConstraintError::Negative),
            ("operating_temperature", -300.0, ConstraintError::Negative),
            ("service_life_years", f64::NAN, ConstraintError::NotANumber),
        ];

        for (name, value, expected) in cases {
            let overrides = ParameterOverrides::from_pairs([(name, value)]).unwrap();
            let err = TechnologyParameters::resolve(Technology::SolidOxide, &overrides)
                .expect_err(name);
            match err {
                ElectrolyzerError::InvalidParameter {
                    name: field,
                    source,
                    ..
                } => {
                    assert_eq!(field, name);
                    assert_eq!(source, expected);
                }
                other => panic!("unexpected error for {name}: {other:?}"),
            }
        }
    }

    #[test]
    fn overrides_from_toml() {
        let overrides: ParameterOverrides =
            toml::from_str("efficiency = 0.75\noperating_temperature = 80.0").unwrap();
        assert_eq!(overrides.efficiency, Some(0.75));
        assert_eq!(overrides.operating_temperature, Some(80.0));
        assert_eq!(overrides.capex_per_kw, None);

        assert!(toml::from_str::<ParameterOverrides>("voltage = 1.2").is_err());
    }
}
