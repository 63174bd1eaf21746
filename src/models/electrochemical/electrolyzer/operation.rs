//! Load limits, step results and the mutable operating ledger.

use std::fmt;

use uom::{
    ConstZero,
    si::{
        f64::{ElectricPotential, Mass, MassRate, Power, Ratio, ThermodynamicTemperature, Time},
        power::kilowatt,
    },
};

/// Minimum stable load as a fraction of nominal power.
pub const MINIMUM_LOAD_FRACTION: f64 = 0.2;

/// A limit excursion observed while resolving a power request.
///
/// Advisories never stop operation.
/// They are attached to the [`OperatingStep`] and logged at `warn` level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// A positive request below the minimum stable load.
    ///
    /// The unit still runs at the requested power.
    BelowMinimum { requested: Power, minimum: Power },

    /// A request above nominal power, clamped to nominal.
    AboveNominal { requested: Power, nominal: Power },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum { requested, minimum } => write!(
                f,
                "requested {:.1} kW is below the minimum load of {:.1} kW",
                requested.get::<kilowatt>(),
                minimum.get::<kilowatt>(),
            ),
            Self::AboveNominal { requested, nominal } => write!(
                f,
                "requested {:.1} kW exceeds nominal power, limited to {:.1} kW",
                requested.get::<kilowatt>(),
                nominal.get::<kilowatt>(),
            ),
        }
    }
}

/// Power limits of one electrolyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadLimits {
    /// Minimum stable load.
    pub minimum: Power,
    /// Nominal (maximum) power.
    pub nominal: Power,
}

impl LoadLimits {
    /// Derives the limits from nominal power, with the minimum at
    /// [`MINIMUM_LOAD_FRACTION`] of nominal.
    #[must_use]
    pub fn for_nominal(nominal: Power) -> Self {
        Self {
            minimum: nominal * MINIMUM_LOAD_FRACTION,
            nominal,
        }
    }

    /// Resolves a power request into the effective power.
    ///
    /// - Requests above nominal are clamped to nominal.
    /// - Positive requests below the minimum pass through unchanged.
    /// - Negative and NaN requests resolve to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use electrolysis_models::models::electrochemical::electrolyzer::{Advisory, LoadLimits};
    /// use uom::si::{f64::Power, power::kilowatt};
    ///
    /// let limits = LoadLimits::for_nominal(Power::new::<kilowatt>(1000.0));
    ///
    /// let (power, advisory) = limits.resolve(Power::new::<kilowatt>(1200.0));
    /// assert_eq!(power, limits.nominal);
    /// assert!(matches!(advisory, Some(Advisory::AboveNominal { .. })));
    ///
    /// let (power, advisory) = limits.resolve(Power::new::<kilowatt>(500.0));
    /// assert_eq!(power.get::<kilowatt>(), 500.0);
    /// assert!(advisory.is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self, requested: Power) -> (Power, Option<Advisory>) {
        if requested.is_nan() || requested <= Power::ZERO {
            return (Power::ZERO, None);
        }

        if requested > self.nominal {
            let advisory = Advisory::AboveNominal {
                requested,
                nominal: self.nominal,
            };
            return (self.nominal, Some(advisory));
        }

        if requested < self.minimum {
            let advisory = Advisory::BelowMinimum {
                requested,
                minimum: self.minimum,
            };
            return (requested, Some(advisory));
        }

        (requested, None)
    }
}

/// One entry of the operating history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingRecord {
    pub power: Power,
    pub production: Mass,
    pub temperature: ThermodynamicTemperature,
    pub cell_voltage: ElectricPotential,
}

/// Result of one operating step.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingStep {
    /// Effective power after limit resolution.
    pub power: Power,
    /// Hydrogen production rate at the effective power.
    pub production_rate: MassRate,
    /// Hydrogen produced over the interval.
    pub production: Mass,
    /// Estimated cell voltage.
    pub cell_voltage: ElectricPotential,
    /// Operating temperature during the step.
    pub temperature: ThermodynamicTemperature,
    /// Load-dependent efficiency at the effective power.
    pub efficiency: Ratio,
    /// Limit excursions observed while resolving the request.
    pub advisories: Vec<Advisory>,
}

/// Mutable state of an electrolyzer.
///
/// The cumulative counters are authoritative; the history is diagnostic and
/// may be cleared independently.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct OperatingState {
    pub(super) current_power: Power,
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) operating_time: Time,
    pub(super) produced: Mass,
    history: Vec<OperatingRecord>,
}

impl OperatingState {
    pub(super) fn new(temperature: ThermodynamicTemperature) -> Self {
        Self {
            current_power: Power::ZERO,
            temperature,
            operating_time: Time::ZERO,
            produced: Mass::ZERO,
            history: Vec::new(),
        }
    }

    /// Advances the counters by one step and appends `record` to the history.
    pub(super) fn advance(&mut self, record: OperatingRecord, interval: Time) {
        self.current_power = record.power;
        self.operating_time += interval;
        self.produced += record.production;
        self.history.push(record);
    }

    pub(super) fn history(&self) -> &[OperatingRecord] {
        &self.history
    }

    pub(super) fn clear_history(&mut self) {
        self.history.clear();
    }
}
