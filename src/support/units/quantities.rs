use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P4, Z0},
};

/// Current density, A/m² in SI.
pub type CurrentDensity = Quantity<ISQ<N2, Z0, Z0, P1, Z0, Z0, Z0>, SI<f64>, f64>;

/// Area-specific resistance, Ω·m² in SI.
pub type AreaSpecificResistance = Quantity<ISQ<P4, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Molar flow rate, mol/s in SI.
pub type MolarFlowRate = Quantity<ISQ<Z0, Z0, N1, Z0, Z0, P1, Z0>, SI<f64>, f64>;
