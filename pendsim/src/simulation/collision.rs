//! Bottom-of-swing collision detection and elastic resolution
//!
//! ## Detection
//!
//! Runs once per sub-step, after the integrator. A collision fires only when
//! all three gates hold:
//!
//! - **near zero**: both `|theta|` are below `eps`
//! - **crossing**: each body's angle changed sign (or hit zero) during this
//!   sub-step, `theta_prev * theta_now <= 0`
//! - **cooldown clear**: no collision was resolved within the last `cooldown`
//!
//! A sub-step where only some of the gates hold is not a collision.
//!
//! ## Resolution
//!
//! ```text
//! v1' = (m1 - m2)/(m1 + m2) * v1 +      2 m2/(m1 + m2) * v2
//! v2' =      2 m1/(m1 + m2) * v1 + (m2 - m1)/(m1 + m2) * v2
//! ```
//!
//! Tangential velocity is `length * omega` and the length is shared, so the
//! transform applies to angular velocities directly.

use log::debug;

use crate::simulation::events::CollisionEvent;
use crate::simulation::states::SimulationState;

/// Outcome of each detection gate for one sub-step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gates {
    pub near_zero: bool,
    pub crossing: bool,
    pub cooldown_clear: bool,
}

impl Gates {
    pub fn fired(&self) -> bool {
        self.near_zero && self.crossing && self.cooldown_clear
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CollisionDetector {
    pub eps: f64, // proximity tolerance (rad)
}

impl CollisionDetector {
    /// Evaluate the gates given the angles from before this sub-step
    pub fn gates(&self, prev: [f64; 2], sys: &SimulationState) -> Gates {
        let now = sys.angles();
        Gates {
            near_zero: now.iter().all(|th| th.abs() < self.eps),
            crossing: prev.iter().zip(now.iter()).all(|(p, n)| p * n <= 0.0),
            cooldown_clear: sys.cooldown <= 0.0,
        }
    }

    pub fn detect(&self, prev: [f64; 2], sys: &SimulationState) -> bool {
        self.gates(prev, sys).fired()
    }
}

/// 1-D elastic collision between masses `m1` and `m2` moving at `v1` and `v2`
pub fn elastic_transform(v1: f64, v2: f64, m1: f64, m2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1p = ((m1 - m2) / total) * v1 + (2.0 * m2 / total) * v2;
    let v2p = (2.0 * m1 / total) * v1 + ((m2 - m1) / total) * v2;
    (v1p, v2p)
}

#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver {
    pub cooldown: f64, // debounce armed after every resolve
}

impl CollisionResolver {
    /// Apply the elastic transform to both angular velocities and arm the cooldown
    ///
    /// Both bobs are put back on the contact point (`theta = 0`) first; the
    /// detecting sub-step leaves each up to `omega * h` past it, and a bob
    /// brought to rest must sit exactly at the bottom to meet its partner again.
    ///
    /// `index` numbers the event; the returned [`CollisionEvent`] records the
    /// velocities on both sides of the hit.
    pub fn resolve(&self, sys: &mut SimulationState, index: u64) -> CollisionEvent {
        let before = sys.angular_velocities();

        for b in sys.bodies_mut() {
            b.theta = 0.0;
        }

        let (w1, w2) = elastic_transform(before[0], before[1], sys.body1.m, sys.body2.m);
        sys.body1.omega = w1;
        sys.body2.omega = w2;
        sys.cooldown = self.cooldown;

        debug!(
            "collision #{index} at t = {:.4}: omega ({:.5}, {:.5}) -> ({:.5}, {:.5})",
            sys.t, before[0], before[1], w1, w2
        );

        CollisionEvent {
            index,
            t: sys.t,
            before,
            after: [w1, w2],
        }
    }
}
