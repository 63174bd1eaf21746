use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, ElectricCurrent, ElectricPotential, Power},
    },
};

use crate::models::electrochemical::electrolyzer::ElectrolyzerError;
use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::CurrentDensity,
};

/// Notional cell area used when none is given, m².
pub const DEFAULT_CELL_AREA_M2: f64 = 100.0;

/// Notional number of series-connected cells used when none is given.
pub const DEFAULT_CELL_COUNT: u32 = 100;

/// Geometry of a series-connected electrolyzer stack.
///
/// The defaults describe a notional stack of 100 cells of 100 m² each.
/// They are used to relate stack power to current density, not to describe a
/// specific product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackGeometry {
    cell_area: Area,
    cell_count: u32,
}

impl StackGeometry {
    /// Creates a stack geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ElectrolyzerError::InvalidStack`] if the cell area is not
    /// strictly positive or the cell count is zero.
    pub fn new(cell_area: Area, cell_count: u32) -> Result<Self, ElectrolyzerError> {
        StrictlyPositive::check(&cell_area).map_err(|source| ElectrolyzerError::InvalidStack {
            field: "cell_area",
            source,
        })?;
        StrictlyPositive::check(&cell_count).map_err(|source| ElectrolyzerError::InvalidStack {
            field: "cell_count",
            source,
        })?;

        Ok(Self {
            cell_area,
            cell_count,
        })
    }

    /// Active area of one cell.
    #[must_use]
    pub fn cell_area(&self) -> Area {
        self.cell_area
    }

    /// Number of cells in series.
    #[must_use]
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// Total current through the stack at current density `j`.
    #[must_use]
    pub fn stack_current(&self, j: CurrentDensity) -> ElectricCurrent {
        j * self.cell_area
    }

    /// Electrical power drawn by the stack at `current` and `cell_voltage`.
    #[must_use]
    pub fn power(&self, current: ElectricCurrent, cell_voltage: ElectricPotential) -> Power {
        power_from_current(current, cell_voltage, self.cell_count)
    }

    /// Approximates the current density at which the stack draws `power`.
    ///
    /// `j ≈ P / (V_rev · A_cell · n_cells)`
    ///
    /// This treats every cell as if it ran at the reversible voltage, so it
    /// overestimates the current density; the overestimate grows with load.
    /// It is an upper bound on the exact operating point.
    #[must_use]
    pub fn current_density_estimate(
        &self,
        power: Power,
        reversible_voltage: ElectricPotential,
    ) -> CurrentDensity {
        if power <= Power::ZERO || power.is_nan() {
            return CurrentDensity::ZERO;
        }

        power / (reversible_voltage * self.cell_area * f64::from(self.cell_count))
    }
}

impl Default for StackGeometry {
    fn default() -> Self {
        Self {
            cell_area: Area::new::<square_meter>(DEFAULT_CELL_AREA_M2),
            cell_count: DEFAULT_CELL_COUNT,
        }
    }
}

/// Converts stack current and cell voltage into electrical power.
///
/// `P = I · V_cell · n_cells`
///
/// No clamping is applied.
pub fn power_from_current(
    current: ElectricCurrent,
    cell_voltage: ElectricPotential,
    cell_count: u32,
) -> Power {
    current * cell_voltage * f64::from(cell_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_current::ampere, electric_potential::volt, power::kilowatt};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn power_from_current_in_kilowatts() {
        let power = power_from_current(
            ElectricCurrent::new::<ampere>(5000.0),
            ElectricPotential::new::<volt>(1.8),
            100,
        );
        assert_relative_eq!(power.get::<kilowatt>(), 900.0, max_relative = 1e-12);

        let stack = StackGeometry::default();
        assert_eq!(
            stack.power(
                ElectricCurrent::new::<ampere>(5000.0),
                ElectricPotential::new::<volt>(1.8)
            ),
            power
        );
    }

    #[test]
    fn estimate_matches_reference_proxy() {
        // 800 kW on 100 cells of 100 m² at 1.23 V.
        let stack = StackGeometry::default();
        let j = stack.current_density_estimate(
            Power::new::<kilowatt>(800.0),
            ElectricPotential::new::<volt>(1.23),
        );
        assert_relative_eq!(j.value, 800_000.0 / (1.23 * 100.0 * 100.0), max_relative = 1e-12);
    }

    #[test]
    fn estimate_is_zero_without_power() {
        let stack = StackGeometry::default();
        let v_rev = ElectricPotential::new::<volt>(1.23);
        assert_eq!(
            stack.current_density_estimate(Power::ZERO, v_rev),
            CurrentDensity::ZERO
        );
        assert_eq!(
            stack.current_density_estimate(Power::new::<kilowatt>(-1.0), v_rev),
            CurrentDensity::ZERO
        );
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert_eq!(
            StackGeometry::new(Area::new::<square_meter>(0.0), 10),
            Err(ElectrolyzerError::InvalidStack {
                field: "cell_area",
                source: ConstraintError::Zero
            })
        );
        assert_eq!(
            StackGeometry::new(Area::new::<square_meter>(1.0), 0),
            Err(ElectrolyzerError::InvalidStack {
                field: "cell_count",
                source: ConstraintError::Zero
            })
        );
        assert!(StackGeometry::new(Area::new::<square_meter>(0.5), 1).is_ok());
    }
}
