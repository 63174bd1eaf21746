//! Exact stack operating point for a given power.
//!
//! Finds the current density at which the stack draws a target power,
//! i.e. the root of `j·A·n·V(j) − P = 0`, by bisection.
//! Because `V(j) ≥ V_rev`, the root always lies in `[0, P / (V_rev·A·n)]`,
//! which is the bracket handed to the solver.

mod problem;

use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{ElectricCurrent, ElectricPotential, Power, ThermodynamicTemperature},
        power::watt,
    },
};

use crate::models::electrochemical::electrolyzer::TechnologyParameters;
use crate::support::units::{CurrentDensity, current_density};

use super::{StackGeometry, voltage};

use problem::{PowerMatchProblem, StackPowerModel};

/// Electrical state of the stack at one current density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Current density through each cell.
    pub current_density: CurrentDensity,
    /// Total stack current.
    pub stack_current: ElectricCurrent,
    /// Voltage across one cell.
    pub cell_voltage: ElectricPotential,
    /// Electrical power drawn by the stack.
    pub power: Power,
}

impl OperatingPoint {
    /// Evaluates the stack at current density `j` and temperature `t`.
    pub(crate) fn at(
        parameters: &TechnologyParameters,
        stack: &StackGeometry,
        j: CurrentDensity,
        t: ThermodynamicTemperature,
    ) -> Self {
        let cell_voltage = voltage::breakdown(parameters, j, t).total();
        let stack_current = stack.stack_current(j);

        Self {
            current_density: j,
            stack_current,
            cell_voltage,
            power: stack.power(stack_current, cell_voltage),
        }
    }
}

/// Solver configuration for the operating-point search.
#[derive(Debug, Clone, Copy)]
pub struct OperatingPointConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the current density.
    pub current_density_tol: CurrentDensity,

    /// Absolute tolerance on the power residual (achieved - target).
    pub power_tol: Power,
}

impl Default for OperatingPointConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            current_density_tol: current_density(1e-9),
            power_tol: Power::new::<watt>(1e-6),
        }
    }
}

impl OperatingPointConfig {
    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.current_density_tol.value,
            x_rel_tol: 0.0,
            residual_tol: self.power_tol.get::<watt>(),
        }
    }
}

/// Errors that can occur while solving for an operating point.
#[derive(Debug, Error)]
pub enum OperatingPointError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best power residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// Solves for the current density at which the stack draws `power`.
///
/// Power at or below zero returns the zero-current point without solving.
///
/// # Errors
///
/// Returns [`OperatingPointError`] if the solver fails or does not converge.
pub(crate) fn solve(
    parameters: &TechnologyParameters,
    stack: &StackGeometry,
    t: ThermodynamicTemperature,
    power: Power,
    config: &OperatingPointConfig,
) -> Result<OperatingPoint, OperatingPointError> {
    if power <= Power::ZERO || power.is_nan() {
        return Ok(OperatingPoint::at(
            parameters,
            stack,
            CurrentDensity::ZERO,
            t,
        ));
    }

    let upper = stack.current_density_estimate(power, parameters.reversible_voltage);

    let model = StackPowerModel::new(parameters, stack, t);
    let problem = PowerMatchProblem::new(power);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, upper.value],
        &config.bisection(),
        |_: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(OperatingPointError::MaxIters {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_potential::volt, power::kilowatt};

    use crate::models::electrochemical::electrolyzer::Technology;

    fn solve_default(technology: Technology, kw: f64) -> OperatingPoint {
        let parameters = technology.parameters();
        let stack = StackGeometry::default();
        solve(
            &parameters,
            &stack,
            parameters.operating_temperature,
            Power::new::<kilowatt>(kw),
            &OperatingPointConfig::default(),
        )
        .expect("operating point should converge")
    }

    #[test]
    fn matches_target_power() {
        for technology in Technology::ALL {
            for kw in [50.0, 400.0, 1000.0] {
                let point = solve_default(technology, kw);
                assert_relative_eq!(point.power.get::<kilowatt>(), kw, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn lies_below_reversible_voltage_estimate() {
        let parameters = Technology::Alkaline.parameters();
        let stack = StackGeometry::default();
        let power = Power::new::<kilowatt>(800.0);

        let point = solve_default(Technology::Alkaline, 800.0);
        let estimate = stack.current_density_estimate(power, parameters.reversible_voltage);

        assert!(point.current_density < estimate);
        assert!(point.cell_voltage > parameters.reversible_voltage);
    }

    #[test]
    fn consistent_with_stack_relations() {
        let point = solve_default(Technology::ProtonExchangeMembrane, 600.0);
        let stack = StackGeometry::default();

        assert_relative_eq!(
            point.stack_current.value,
            point.current_density.value * stack.cell_area().value,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            point.power.get::<kilowatt>(),
            point.stack_current.value * point.cell_voltage.get::<volt>() * 100.0 / 1000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn iteration_limit_is_reported() {
        let parameters = Technology::Alkaline.parameters();
        let config = OperatingPointConfig {
            max_iters: 2,
            ..OperatingPointConfig::default()
        };

        let result = solve(
            &parameters,
            &StackGeometry::default(),
            parameters.operating_temperature,
            Power::new::<kilowatt>(800.0),
            &config,
        );

        match result {
            Err(OperatingPointError::MaxIters { residual, .. }) => {
                assert!(residual.get::<watt>().abs() > config.power_tol.get::<watt>());
            }
            other => panic!("expected MaxIters, got {other:?}"),
        }
    }

    #[test]
    fn zero_power_is_zero_current() {
        let parameters = Technology::SolidOxide.parameters();
        let point = solve_default(Technology::SolidOxide, 0.0);
        assert_eq!(point.current_density, CurrentDensity::ZERO);
        assert_eq!(point.power, Power::ZERO);
        assert_eq!(point.cell_voltage, parameters.reversible_voltage);
    }
}
