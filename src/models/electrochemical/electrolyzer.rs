//! Water electrolyzer model.
//!
//! [`Electrolyzer`] converts electrical power into hydrogen for the alkaline
//! (AEL), proton-exchange-membrane (PEMEL) and solid-oxide (SOEL)
//! technologies, using closed-form relations:
//!
//! - an LHV energy balance for production from power,
//! - Faraday's law for production from current,
//! - a reversible + Tafel + ohmic decomposition of the cell voltage.
//!
//! The equations live in the internal `core` module and are pure functions of
//! the [`TechnologyParameters`].
//! `Electrolyzer` wraps them with a small operating ledger that accumulates
//! operating time and hydrogen production through [`Electrolyzer::operate`].
//!
//! # Example
//!
//! ```
//! use electrolysis_models::{
//!     models::electrochemical::electrolyzer::{Electrolyzer, Technology},
//!     support::units::kilograms_per_hour,
//! };
//! use uom::si::{f64::Power, power::kilowatt};
//!
//! let mut electrolyzer =
//!     Electrolyzer::new(Technology::Alkaline, Power::new::<kilowatt>(1000.0)).unwrap();
//!
//! let rate = electrolyzer.hydrogen_production(Power::new::<kilowatt>(800.0));
//! assert!((kilograms_per_hour(rate) - 16.32).abs() < 0.01);
//!
//! let step = electrolyzer.operate_hourly(Power::new::<kilowatt>(800.0));
//! assert!(step.advisories.is_empty());
//! ```

mod config;
mod core;
mod error;
mod operation;
mod report;
mod technology;

use std::fmt;

use tracing::{debug, info, warn};
use uom::si::{
    electric_potential::volt,
    f64::{
        ElectricCurrent, ElectricPotential, Mass, MassRate, Power, Ratio, ThermodynamicTemperature,
        Time,
    },
    mass::kilogram,
    power::kilowatt,
    ratio::{percent, ratio},
    time::hour,
};

use crate::support::{
    constraint::{Constrained, Constraint, NonNegative, StrictlyPositive, UnitInterval},
    units::CurrentDensity,
};

use self::core::{
    constants::DEFAULT_FARADAY_EFFICIENCY, economics, efficiency, operating_point, production,
    voltage,
};

pub use self::core::{
    FaradayProduction, OperatingPoint, OperatingPointConfig, OperatingPointError, StackGeometry,
    VoltageBreakdown, constants,
    economics::{ANNUAL_DEGRADATION_RATE, DEFAULT_EXCHANGE_RATE, DEGRADATION_FLOOR},
    stack::{DEFAULT_CELL_AREA_M2, DEFAULT_CELL_COUNT, power_from_current},
};
pub use config::{ConfigError, ElectrolyzerConfig, StackConfig, load};
pub use error::{ElectrolyzerError, InvalidTechnology};
pub use operation::{Advisory, LoadLimits, MINIMUM_LOAD_FRACTION, OperatingRecord, OperatingStep};
pub use report::Summary;
pub use technology::{ParameterOverrides, Technology, TechnologyParameters};

use operation::OperatingState;

/// A water electrolyzer of one technology and nominal power.
///
/// Parameters and limits are fixed at creation.
/// Only [`operate`](Self::operate), [`operate_hourly`](Self::operate_hourly),
/// [`set_temperature`](Self::set_temperature) and
/// [`clear_history`](Self::clear_history) change the instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Electrolyzer {
    technology: Technology,
    parameters: TechnologyParameters,
    limits: LoadLimits,
    stack: StackGeometry,
    state: OperatingState,
}

impl Electrolyzer {
    /// Creates an electrolyzer with the canonical parameters of `technology`.
    ///
    /// # Errors
    ///
    /// Returns [`ElectrolyzerError::InvalidNominalPower`] if `nominal_power`
    /// is not strictly positive.
    pub fn new(technology: Technology, nominal_power: Power) -> Result<Self, ElectrolyzerError> {
        Self::with_overrides(technology, nominal_power, &ParameterOverrides::default())
    }

    /// Creates an electrolyzer with `overrides` applied to the canonical
    /// parameters of `technology`.
    ///
    /// # Errors
    ///
    /// Returns [`ElectrolyzerError`] if the nominal power is not strictly
    /// positive or an overridden parameter is invalid.
    pub fn with_overrides(
        technology: Technology,
        nominal_power: Power,
        overrides: &ParameterOverrides,
    ) -> Result<Self, ElectrolyzerError> {
        StrictlyPositive::check(&nominal_power).map_err(|source| {
            ElectrolyzerError::InvalidNominalPower {
                power: nominal_power,
                source,
            }
        })?;

        let parameters = TechnologyParameters::resolve(technology, overrides)?;

        info!(
            technology = technology.tag(),
            nominal_power_kw = nominal_power.get::<kilowatt>(),
            efficiency = parameters.efficiency.get::<ratio>(),
            "created electrolyzer"
        );

        Ok(Self {
            technology,
            parameters,
            limits: LoadLimits::for_nominal(nominal_power),
            stack: StackGeometry::default(),
            state: OperatingState::new(parameters.operating_temperature),
        })
    }

    /// Creates an electrolyzer from a technology tag such as `"PEMEL"`.
    ///
    /// # Errors
    ///
    /// Returns [`ElectrolyzerError::InvalidTechnology`] if the tag is unknown,
    /// or any error of [`Electrolyzer::with_overrides`].
    pub fn from_tag(
        tag: &str,
        nominal_power: Power,
        overrides: &ParameterOverrides,
    ) -> Result<Self, ElectrolyzerError> {
        let technology: Technology = tag.parse()?;
        Self::with_overrides(technology, nominal_power, overrides)
    }

    /// Replaces the notional stack geometry.
    #[must_use]
    pub fn with_stack(mut self, stack: StackGeometry) -> Self {
        self.stack = stack;
        self
    }

    #[must_use]
    pub fn technology(&self) -> Technology {
        self.technology
    }

    #[must_use]
    pub fn parameters(&self) -> &TechnologyParameters {
        &self.parameters
    }

    #[must_use]
    pub fn stack(&self) -> &StackGeometry {
        &self.stack
    }

    #[must_use]
    pub fn limits(&self) -> LoadLimits {
        self.limits
    }

    #[must_use]
    pub fn nominal_power(&self) -> Power {
        self.limits.nominal
    }

    #[must_use]
    pub fn minimum_power(&self) -> Power {
        self.limits.minimum
    }

    /// Effective power of the most recent step.
    #[must_use]
    pub fn current_power(&self) -> Power {
        self.state.current_power
    }

    /// Current operating temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.state.temperature
    }

    /// Cumulative operating time.
    #[must_use]
    pub fn operating_time(&self) -> Time {
        self.state.operating_time
    }

    /// Cumulative hydrogen produced.
    #[must_use]
    pub fn produced(&self) -> Mass {
        self.state.produced
    }

    /// Sets the operating temperature used by later voltage calculations
    /// and steps.
    pub fn set_temperature(&mut self, temperature: ThermodynamicTemperature) {
        self.state.temperature = temperature;
    }

    /// Hydrogen production rate at `power` from an LHV energy balance.
    ///
    /// Zero for non-positive power; power above nominal is clamped.
    #[must_use]
    pub fn hydrogen_production(&self, power: Power) -> MassRate {
        production::from_power(&self.parameters, self.limits.nominal, power)
    }

    /// Hydrogen production rate at stack `current` from Faraday's law.
    ///
    /// The Faraday efficiency defaults to
    /// [`DEFAULT_FARADAY_EFFICIENCY`](constants::DEFAULT_FARADAY_EFFICIENCY).
    #[must_use]
    pub fn hydrogen_from_current(
        &self,
        current: ElectricCurrent,
        faraday_efficiency: Option<Constrained<Ratio, UnitInterval>>,
    ) -> FaradayProduction {
        let faraday_efficiency = faraday_efficiency.map_or_else(
            || Ratio::new::<ratio>(DEFAULT_FARADAY_EFFICIENCY),
            Constrained::into_inner,
        );
        production::from_current(current, faraday_efficiency)
    }

    /// Cell voltage components at current density `j`.
    ///
    /// The temperature defaults to the current operating temperature.
    #[must_use]
    pub fn voltage_breakdown(
        &self,
        j: CurrentDensity,
        temperature: Option<ThermodynamicTemperature>,
    ) -> VoltageBreakdown {
        voltage::breakdown(&self.parameters, j, self.resolve_temperature(temperature))
    }

    /// Total cell voltage at current density `j`.
    #[must_use]
    pub fn cell_voltage(
        &self,
        j: CurrentDensity,
        temperature: Option<ThermodynamicTemperature>,
    ) -> ElectricPotential {
        self.voltage_breakdown(j, temperature).total()
    }

    /// Activation overpotential at current density `j`, floored at zero.
    #[must_use]
    pub fn activation_overpotential(
        &self,
        j: CurrentDensity,
        temperature: Option<ThermodynamicTemperature>,
    ) -> ElectricPotential {
        let temperature = self.resolve_temperature(temperature);
        voltage::activation_overpotential(&self.parameters, j, temperature)
    }

    /// Stack power for a stack current and cell voltage.
    #[must_use]
    pub fn stack_power(&self, current: ElectricCurrent, cell_voltage: ElectricPotential) -> Power {
        self.stack.power(current, cell_voltage)
    }

    /// Solves for the exact stack operating point at `power`.
    ///
    /// # Errors
    ///
    /// Returns [`OperatingPointError`] if the solve does not converge.
    pub fn operating_point(&self, power: Power) -> Result<OperatingPoint, OperatingPointError> {
        self.operating_point_with(power, &OperatingPointConfig::default())
    }

    /// Solves for the exact stack operating point at `power` with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`OperatingPointError`] if the solve does not converge.
    pub fn operating_point_with(
        &self,
        power: Power,
        config: &OperatingPointConfig,
    ) -> Result<OperatingPoint, OperatingPointError> {
        operating_point::solve(
            &self.parameters,
            &self.stack,
            self.state.temperature,
            power,
            config,
        )
    }

    /// Load-dependent efficiency at `power`.
    #[must_use]
    pub fn instantaneous_efficiency(&self, power: Power) -> Ratio {
        efficiency::instantaneous(&self.parameters, self.limits.nominal, power)
    }

    /// Capital cost, converted with `exchange_rate` from the table currency.
    #[must_use]
    pub fn capex(&self, exchange_rate: f64) -> f64 {
        economics::capex(&self.parameters, self.limits.nominal, exchange_rate)
    }

    /// Capital cost at [`DEFAULT_EXCHANGE_RATE`].
    #[must_use]
    pub fn capex_default_rate(&self) -> f64 {
        self.capex(DEFAULT_EXCHANGE_RATE)
    }

    /// Remaining fraction of nominal efficiency after `operating_time`.
    ///
    /// Advisory only: production calculations do not apply it.
    #[must_use]
    pub fn degradation_factor(&self, operating_time: Time) -> Ratio {
        economics::degradation_factor(operating_time)
    }

    /// Operates the unit at `requested` power for `interval`.
    ///
    /// Limit excursions are reported as [`Advisory`] flags and never fail.
    pub fn operate(
        &mut self,
        requested: Power,
        interval: Constrained<Time, NonNegative>,
    ) -> OperatingStep {
        self.step(requested, interval.into_inner())
    }

    /// Operates the unit at `requested` power for one hour.
    pub fn operate_hourly(&mut self, requested: Power) -> OperatingStep {
        self.step(requested, Time::new::<hour>(1.0))
    }

    fn step(&mut self, requested: Power, interval: Time) -> OperatingStep {
        let (power, advisory) = self.limits.resolve(requested);
        let advisories: Vec<Advisory> = advisory.into_iter().collect();
        for advisory in &advisories {
            warn!(technology = self.technology.tag(), %advisory, "operating limit");
        }

        let production_rate = self.hydrogen_production(power);
        let production: Mass = production_rate * interval;

        let temperature = self.state.temperature;
        let j = self
            .stack
            .current_density_estimate(power, self.parameters.reversible_voltage);
        let cell_voltage = voltage::breakdown(&self.parameters, j, temperature).total();

        self.state.advance(
            OperatingRecord {
                power,
                production,
                temperature,
                cell_voltage,
            },
            interval,
        );

        debug!(
            technology = self.technology.tag(),
            power_kw = power.get::<kilowatt>(),
            hours = interval.get::<hour>(),
            production_kg = production.get::<kilogram>(),
            cell_voltage_v = cell_voltage.get::<volt>(),
            "operating step"
        );

        OperatingStep {
            power,
            production_rate,
            production,
            cell_voltage,
            temperature,
            efficiency: self.instantaneous_efficiency(power),
            advisories,
        }
    }

    /// Snapshot of configuration and cumulative state.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            technology: self.technology,
            nominal_power: self.limits.nominal,
            nominal_efficiency: self.parameters.efficiency,
            operating_temperature: self.parameters.operating_temperature,
            operating_time: self.state.operating_time,
            produced: self.state.produced,
            current_power: self.state.current_power,
            capex: self.capex_default_rate(),
            service_life: self.parameters.service_life,
        }
    }

    /// Returns a copy of the operating history.
    #[must_use]
    pub fn history(&self) -> Vec<OperatingRecord> {
        self.state.history().to_vec()
    }

    /// Clears the operating history; cumulative counters are kept.
    pub fn clear_history(&mut self) {
        let cleared = self.state.history().len();
        self.state.clear_history();
        info!(technology = self.technology.tag(), cleared, "cleared operating history");
    }

    fn resolve_temperature(
        &self,
        temperature: Option<ThermodynamicTemperature>,
    ) -> ThermodynamicTemperature {
        temperature.unwrap_or(self.state.temperature)
    }
}

impl fmt::Display for Electrolyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} electrolyzer | {:.0} kW | η={:.1}% | cumulative production: {:.1} kg H₂",
            self.technology,
            self.limits.nominal.get::<kilowatt>(),
            self.parameters.efficiency.get::<percent>(),
            self.state.produced.get::<kilogram>(),
        )
    }
}
