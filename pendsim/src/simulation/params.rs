//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the constants fixed for a scene:
//! - gravitational acceleration and the shared pendulum length,
//! - the proximity tolerance used by collision detection,
//! - the internal sub-step, collision cooldown and playback speed

use std::f64::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64,        // gravitational acceleration
    pub length: f64,   // pendulum length shared by both bodies
    pub eps: f64,      // |theta| below this counts as "at the bottom"
    pub h0: f64,       // internal sub-step
    pub cooldown: f64, // collision debounce duration
    pub speed: f64,    // simulated time per unit of wall time
}

impl Parameters {
    /// `g / length`, the coefficient of the linearized restoring torque
    pub fn stiffness(&self) -> f64 {
        self.g / self.length
    }

    /// Natural angular frequency `sqrt(g / length)`
    pub fn omega0(&self) -> f64 {
        self.stiffness().sqrt()
    }

    /// Small-angle period `2 pi / omega0`
    pub fn period(&self) -> f64 {
        TAU / self.omega0()
    }
}
