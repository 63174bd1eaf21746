use std::fmt;

use uom::si::{
    f64::{Mass, Power, Ratio, ThermodynamicTemperature, Time},
    mass::kilogram,
    power::kilowatt,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    time::{hour, year},
};

use super::Technology;

/// Read-only snapshot of an electrolyzer's configuration and cumulative state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub technology: Technology,
    pub nominal_power: Power,
    pub nominal_efficiency: Ratio,
    pub operating_temperature: ThermodynamicTemperature,
    pub operating_time: Time,
    pub produced: Mass,
    pub current_power: Power,
    /// Capital cost at [`DEFAULT_EXCHANGE_RATE`](super::DEFAULT_EXCHANGE_RATE).
    pub capex: f64,
    pub service_life: Time,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "technology:            {}", self.technology)?;
        writeln!(
            f,
            "nominal power:         {:.1} kW",
            self.nominal_power.get::<kilowatt>()
        )?;
        writeln!(
            f,
            "nominal efficiency:    {:.1} %",
            self.nominal_efficiency.get::<percent>()
        )?;
        writeln!(
            f,
            "operating temperature: {:.1} °C",
            self.operating_temperature.get::<degree_celsius>()
        )?;
        writeln!(
            f,
            "operating time:        {:.1} h",
            self.operating_time.get::<hour>()
        )?;
        writeln!(
            f,
            "hydrogen produced:     {:.2} kg",
            self.produced.get::<kilogram>()
        )?;
        writeln!(
            f,
            "current power:         {:.1} kW",
            self.current_power.get::<kilowatt>()
        )?;
        writeln!(f, "capex:                 {:.0}", self.capex)?;
        write!(
            f,
            "service life:          {:.0} years",
            self.service_life.get::<year>()
        )
    }
}
