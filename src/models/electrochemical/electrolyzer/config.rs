//! TOML configuration for building an [`Electrolyzer`].

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Power},
    power::kilowatt,
};

use super::{Electrolyzer, ElectrolyzerError, ParameterOverrides, StackGeometry};

/// Declarative description of one electrolyzer.
///
/// # Example
///
/// ```
/// use electrolysis_models::models::electrochemical::electrolyzer::ElectrolyzerConfig;
///
/// let config = ElectrolyzerConfig::from_toml(
///     r#"
///     technology = "PEMEL"
///     nominal_power_kw = 800.0
///
///     [overrides]
///     efficiency = 0.8
///     "#,
/// )
/// .unwrap();
///
/// let electrolyzer = config.build().unwrap();
/// assert_eq!(electrolyzer.technology().tag(), "PEMEL");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElectrolyzerConfig {
    /// Technology tag, parsed case-insensitively.
    pub technology: String,

    /// Nominal power in kW.
    pub nominal_power_kw: f64,

    /// Stack geometry; the notional default stack when absent.
    #[serde(default)]
    pub stack: Option<StackConfig>,

    /// Parameter overrides in canonical units.
    #[serde(default)]
    pub overrides: ParameterOverrides,
}

/// Stack geometry in plain units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    pub cell_area_m2: f64,
    pub cell_count: u32,
}

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),

    #[error("invalid electrolyzer configuration")]
    Electrolyzer(#[from] ElectrolyzerError),
}

impl ElectrolyzerConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML, missing fields or
    /// unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the electrolyzer described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ElectrolyzerError`] if the technology, nominal power, stack
    /// or any overridden parameter is invalid.
    pub fn build(&self) -> Result<Electrolyzer, ElectrolyzerError> {
        let nominal_power = Power::new::<kilowatt>(self.nominal_power_kw);
        let electrolyzer =
            Electrolyzer::from_tag(&self.technology, nominal_power, &self.overrides)?;

        match self.stack {
            Some(stack) => {
                let geometry = StackGeometry::new(
                    Area::new::<square_meter>(stack.cell_area_m2),
                    stack.cell_count,
                )?;
                Ok(electrolyzer.with_stack(geometry))
            }
            None => Ok(electrolyzer),
        }
    }
}

/// Parses `text` and builds the electrolyzer it describes.
///
/// # Errors
///
/// Returns [`ConfigError`] if parsing or building fails.
pub fn load(text: &str) -> Result<Electrolyzer, ConfigError> {
    Ok(ElectrolyzerConfig::from_toml(text)?.build()?)
}

impl FromStr for ElectrolyzerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml(s)
    }
}
