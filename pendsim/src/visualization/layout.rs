//! Screen-space placement of rods, bobs and energy bars
//!
//! The pivot sits above the bottom of the swing; `theta = 0` hangs straight
//! down and positive angles swing to the right.

use crate::simulation::energy::EnergyShares;
use crate::simulation::states::NVec2;

/// Bob radius grows with the square root of the mass
const BOB_RADIUS_PER_SQRT_MASS: f64 = 0.14;

/// Position of a bob at angle `theta` on a rod of `length` hung from `pivot`
pub fn angle_to_point(pivot: NVec2, length: f64, theta: f64) -> NVec2 {
    pivot + length * NVec2::new(theta.sin(), -theta.cos())
}

pub fn bob_radius(m: f64) -> f64 {
    BOB_RADIUS_PER_SQRT_MASS * m.sqrt()
}

/// Bar heights for the kinetic-energy shares, scaled to `max_height`
pub fn bar_heights(shares: &EnergyShares, max_height: f64) -> [f64; 2] {
    [shares.share1 * max_height, shares.share2 * max_height]
}
