//! Fixed-step time integrator for the pendulum pair
//!
//! Semi-implicit (symplectic) Euler: angular velocity is kicked first from
//! the torque at the current angle, then the angle drifts with the *updated*
//! velocity. Driven by a `TorqueSet` and a fixed sub-step `h`.

use super::forces::TorqueSet;
use super::states::SimulationState;

/// Advance both bodies by one sub-step of length `h`
///
/// Updates `theta`, `omega` and `sys.t` in place and returns the angles as
/// they were before the step, which the collision detector needs for its
/// sign-change test.
pub fn semi_implicit_euler(sys: &mut SimulationState, torques: &TorqueSet, h: f64) -> [f64; 2] {
    let prev = sys.angles();

    // alpha_n from theta_n at time t_n
    let mut alpha = [0.0; 2];
    torques.accumulate_accels(sys.t, &*sys, &mut alpha);

    for (b, a) in sys.bodies_mut().into_iter().zip(alpha) {
        // Kick: omega_n+1 = omega_n + h * alpha_n
        b.omega += h * a;
        // Drift: theta_n+1 = theta_n + h * omega_n+1
        b.theta += h * b.omega;
    }

    sys.t += h;

    prev
}
