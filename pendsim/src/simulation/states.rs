//! Core state types for the two-pendulum simulation.
//!
//! - `Body`             one pendulum bob: mass, angle from vertical, angular velocity
//! - `SimulationState`  both bodies, the simulation clock and the collision cooldown
//! - `StateSnapshot`    the read-only view handed to the host after each tick
//!
//! Angles are measured from the downward vertical, so `theta = 0` is the
//! bottom of the swing where the two bobs meet.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// One pendulum bob
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub m: f64,     // mass, fixed for the run
    pub theta: f64, // angle from vertical (rad)
    pub omega: f64, // angular velocity (rad / time)
}

impl Body {
    /// Bob hanging at the bottom of the swing with angular velocity `omega`
    pub fn at_bottom(m: f64, omega: f64) -> Self {
        Self { m, theta: 0.0, omega }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub body1: Body,
    pub body2: Body,
    pub t: f64,        // simulation time, only ever increases
    pub cooldown: f64, // time left before another collision may be detected
}

impl SimulationState {
    pub fn new(body1: Body, body2: Body) -> Self {
        Self {
            body1,
            body2,
            t: 0.0,
            cooldown: 0.0,
        }
    }

    pub fn angles(&self) -> [f64; 2] {
        [self.body1.theta, self.body2.theta]
    }

    pub fn angular_velocities(&self) -> [f64; 2] {
        [self.body1.omega, self.body2.omega]
    }

    pub fn bodies(&self) -> [&Body; 2] {
        [&self.body1, &self.body2]
    }

    pub fn bodies_mut(&mut self) -> [&mut Body; 2] {
        [&mut self.body1, &mut self.body2]
    }

    /// Count the cooldown down by `h`, never below zero
    pub fn decay_cooldown(&mut self, h: f64) {
        if self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - h).max(0.0);
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            t: self.t,
            theta1: self.body1.theta,
            theta2: self.body2.theta,
            omega1: self.body1.omega,
            omega2: self.body2.omega,
        }
    }
}

/// Post-tick values the presentation layer reads to place rods, bobs and bars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSnapshot {
    pub t: f64,
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
}
