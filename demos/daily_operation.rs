//! Creates one electrolyzer per technology, compares production and cell
//! voltage, and runs the alkaline unit through a 24-hour load profile.
//!
//! Run with `cargo run --example daily_operation`.

use std::error::Error;

use electrolysis_models::{
    models::electrochemical::electrolyzer::{Electrolyzer, Technology},
    support::units::{current_density, kilograms_per_hour},
};
use uom::si::{electric_potential::volt, f64::Power, mass::kilogram, power::kilowatt, time::hour};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().without_time().compact().init();

    let mut ael = Electrolyzer::new(Technology::Alkaline, Power::new::<kilowatt>(1000.0))?;
    let pemel = Electrolyzer::new(
        Technology::ProtonExchangeMembrane,
        Power::new::<kilowatt>(800.0),
    )?;
    let soel = Electrolyzer::new(Technology::SolidOxide, Power::new::<kilowatt>(500.0))?;

    println!("Electrolyzers:");
    for electrolyzer in [&ael, &pemel, &soel] {
        println!("  {electrolyzer}");
    }

    println!("\nHydrogen production (kg/h):");
    for kw in [200.0, 500.0, 800.0, 1000.0] {
        let power = Power::new::<kilowatt>(kw);
        println!(
            "  {kw:6.0} kW -> AEL: {:5.2} | PEMEL: {:5.2}",
            kilograms_per_hour(ael.hydrogen_production(power)),
            kilograms_per_hour(pemel.hydrogen_production(power)),
        );
    }

    println!("\nDaily operation (AEL):");
    ael.clear_history();
    for hour_of_day in 0..24 {
        let step = ael.operate_hourly(Power::new::<kilowatt>(daily_profile_kw(hour_of_day)));
        if hour_of_day % 6 == 0 {
            println!(
                "  hour {hour_of_day:2}: {:6.1} kW -> {:5.2} kg H2, {:.3} V/cell",
                step.power.get::<kilowatt>(),
                step.production.get::<kilogram>(),
                step.cell_voltage.get::<volt>(),
            );
        }
    }

    println!("\nSummary:\n{}", ael.summary());
    println!(
        "  {:.1} kg over {:.0} h",
        ael.produced().get::<kilogram>(),
        ael.operating_time().get::<hour>()
    );

    println!("\nCell voltage at j = 1000 A/m²:");
    let j = current_density(1000.0);
    for electrolyzer in [&ael, &pemel, &soel] {
        let breakdown = electrolyzer.voltage_breakdown(j, None);
        println!(
            "  {}: V={:.3} V (V_rev={:.2} V, V_act={:.3} V, V_ohm={:.3} V)",
            electrolyzer.technology(),
            breakdown.total().get::<volt>(),
            breakdown.reversible.get::<volt>(),
            breakdown.activation.get::<volt>(),
            breakdown.ohmic.get::<volt>(),
        );
    }

    println!("\nExact operating point at 800 kW:");
    let point = ael.operating_point(Power::new::<kilowatt>(800.0))?;
    println!(
        "  AEL: j={:.1} A/m², V={:.3} V/cell",
        point.current_density.value,
        point.cell_voltage.get::<volt>()
    );

    Ok(())
}

/// Daytime plateau around 800 kW and a night-time base around 300 kW,
/// with a small deterministic ripple.
fn daily_profile_kw(hour_of_day: u32) -> f64 {
    let ripple = (f64::from(hour_of_day) * 1.3).sin();
    if (8..=18).contains(&hour_of_day) {
        800.0 + 50.0 * ripple
    } else {
        300.0 + 30.0 * ripple
    }
}
