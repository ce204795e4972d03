//! Energy and momentum diagnostics derived from a `SimulationState`
//!
//! Used for the kinetic-energy bars and for checking conservation.

use crate::simulation::states::{Body, SimulationState};

/// Total kinetic energy at or below this is treated as "both at rest"
pub const KINETIC_FLOOR: f64 = 1e-12;

/// `0.5 * m * (length * omega)^2`
pub fn kinetic_energy(b: &Body, length: f64) -> f64 {
    let v = length * b.omega;
    0.5 * b.m * v * v
}

/// Small-angle potential energy `0.5 * m * g * length * theta^2`
pub fn potential_energy(b: &Body, g: f64, length: f64) -> f64 {
    0.5 * b.m * g * length * b.theta * b.theta
}

pub fn total_energy(sys: &SimulationState, g: f64, length: f64) -> f64 {
    sys.bodies()
        .iter()
        .map(|b| kinetic_energy(b, length) + potential_energy(b, g, length))
        .sum()
}

/// `m1 * omega1 + m2 * omega2`, proportional to tangential momentum
pub fn momentum_proxy(sys: &SimulationState) -> f64 {
    sys.body1.m * sys.body1.omega + sys.body2.m * sys.body2.omega
}

/// Kinetic energy per body and each body's normalized share
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyShares {
    pub k1: f64,
    pub k2: f64,
    pub share1: f64,
    pub share2: f64,
}

/// Shares are `k_i / (k1 + k2)` clamped to `[0, 1]`, or zero for both when
/// the total is below [`KINETIC_FLOOR`]
pub fn kinetic_shares(sys: &SimulationState, length: f64) -> EnergyShares {
    let k1 = kinetic_energy(&sys.body1, length);
    let k2 = kinetic_energy(&sys.body2, length);
    let total = k1 + k2;

    let (share1, share2) = if total <= KINETIC_FLOOR {
        (0.0, 0.0)
    } else {
        ((k1 / total).clamp(0.0, 1.0), (k2 / total).clamp(0.0, 1.0))
    };

    EnergyShares { k1, k2, share1, share2 }
}
