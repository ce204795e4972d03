//! Angular acceleration contributors for the pendulum pair
//!
//! Defines the `AngularAcceleration` trait, the `TorqueSet` that sums
//! contributions per body, and the linearized gravitational restoring torque

use crate::simulation::states::SimulationState;

/// Collection of angular acceleration terms
/// Each term implements [`AngularAcceleration`] and their contributions are
/// summed into a single angular acceleration per body
pub struct TorqueSet {
    terms: Vec<Box<dyn AngularAcceleration + Send + Sync>>,
}

impl TorqueSet {
    /// Create an empty torque set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a torque term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: AngularAcceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total angular accelerations at time `t` for both bodies
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &SimulationState, out: &mut [f64; 2]) {
        *out = [0.0; 2];
        for term in &self.terms {
            term.angular_acceleration(t, sys, out);
        }
    }
}

impl Default for TorqueSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for angular acceleration sources operating on [`SimulationState`]
/// Implementations add their contribution into `out[0]` (body1) and `out[1]` (body2)
pub trait AngularAcceleration {
    fn angular_acceleration(&self, t: f64, sys: &SimulationState, out: &mut [f64; 2]);
}

/// Small-angle gravity: `alpha = -(g / length) * theta`
pub struct LinearRestoring {
    pub g: f64,
    pub length: f64,
}

impl AngularAcceleration for LinearRestoring {
    fn angular_acceleration(&self, _t: f64, sys: &SimulationState, out: &mut [f64; 2]) {
        let k = self.g / self.length;
        for (a, b) in out.iter_mut().zip(sys.bodies()) {
            *a -= k * b.theta;
        }
    }
}
