//! Frame driver: turns a host frame delta into fixed physics sub-steps
//!
//! The host calls [`advance`] once per displayed frame with whatever wall
//! time elapsed. The requested simulated time `speed * delta` is cut into
//! `steps = ceil(speed * delta / h0)` equal sub-steps of `h <= h0`, so the
//! sub-steps sum back to exactly the requested time and no single step is
//! ever larger than `h0`. Each sub-step runs integrate -> cooldown ->
//! detect -> resolve.

use log::trace;

use crate::error::SimError;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::StateSnapshot;

/// How one frame is split into sub-steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstepPlan {
    pub steps: u64, // number of sub-steps, 0 only for a zero delta
    pub h: f64,     // length of each sub-step in simulated time
}

/// Split `delta` of wall time at playback `speed` into sub-steps no longer than `h0`
pub fn plan_substeps(delta: f64, speed: f64, h0: f64) -> Result<SubstepPlan, SimError> {
    if !delta.is_finite() || delta < 0.0 {
        return Err(SimError::InvalidElapsed(delta));
    }

    let span = speed * delta;
    if span == 0.0 {
        return Ok(SubstepPlan { steps: 0, h: 0.0 });
    }

    // a step count that does not fit in u64 would saturate and stretch h past h0
    let count = (span / h0).ceil();
    if !span.is_finite() || !(count < u64::MAX as f64) {
        return Err(SimError::InvalidElapsed(delta));
    }

    let steps = (count as u64).max(1);
    Ok(SubstepPlan {
        steps,
        h: span / steps as f64,
    })
}

/// Advance the scenario by one host frame of `delta` wall time
///
/// All sub-steps run before this returns. On an invalid `delta` nothing is
/// mutated.
pub fn advance(scenario: &mut Scenario, delta: f64) -> Result<StateSnapshot, SimError> {
    let plan = plan_substeps(delta, scenario.parameters.speed, scenario.parameters.h0)?;
    trace!("tick: delta = {delta}, steps = {}, h = {}", plan.steps, plan.h);

    for _ in 0..plan.steps {
        let Scenario {
            system,
            torques,
            detector,
            resolver,
            collisions,
            ..
        } = &mut *scenario;

        let prev = semi_implicit_euler(system, torques, plan.h);
        system.decay_cooldown(plan.h);

        if detector.detect(prev, system) {
            let index = *collisions + 1;
            let event = resolver.resolve(system, index);
            scenario.publish(event);
        }
    }

    Ok(scenario.system.snapshot())
}
