//! Problem formulation for power matching.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::watt,
};

use crate::models::electrochemical::electrolyzer::{StackGeometry, TechnologyParameters};
use crate::support::units::{CurrentDensity, current_density};

use super::OperatingPoint;

/// Model adapter evaluating the stack at a trial current density.
pub(super) struct StackPowerModel<'a> {
    parameters: &'a TechnologyParameters,
    stack: &'a StackGeometry,
    temperature: ThermodynamicTemperature,
}

impl<'a> StackPowerModel<'a> {
    pub(super) fn new(
        parameters: &'a TechnologyParameters,
        stack: &'a StackGeometry,
        temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            parameters,
            stack,
            temperature,
        }
    }
}

impl Model for StackPowerModel<'_> {
    type Input = CurrentDensity;
    type Output = OperatingPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(OperatingPoint::at(
            self.parameters,
            self.stack,
            *input,
            self.temperature,
        ))
    }
}

/// Equation problem definition for power matching.
///
/// Computes the residual as `achieved_power - target_power`.
pub(super) struct PowerMatchProblem {
    target: Power,
}

impl PowerMatchProblem {
    pub(super) fn new(target: Power) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for PowerMatchProblem {
    type Input = CurrentDensity;
    type Output = OperatingPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(current_density(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = output.power.get::<watt>();
        let target = self.target.get::<watt>();
        Ok([achieved - target])
    }
}
