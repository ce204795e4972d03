//! Build a fully-initialized pendulum scene from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - numerical and physical parameters (`Parameters`)
//! - the simulation state (`SimulationState`), already through the initial
//!   collision at `t = 0`
//! - the active torque set, collision detector and resolver
//! - the outgoing collision notifications (flash slot and listeners)
//!
//! The host drives it through [`Scenario::tick`], once per displayed frame.

use log::warn;

use crate::configuration::config::ScenarioConfig;
use crate::error::SimError;
use crate::simulation::collision::{CollisionDetector, CollisionResolver};
use crate::simulation::driver;
use crate::simulation::energy::{kinetic_shares, EnergyShares};
use crate::simulation::events::{CollisionEvent, CollisionListener, FlashSlot};
use crate::simulation::forces::{LinearRestoring, TorqueSet};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, SimulationState, StateSnapshot};

/// Runtime bundle for one two-pendulum scene
pub struct Scenario {
    pub parameters: Parameters,
    pub system: SimulationState,
    pub torques: TorqueSet,
    pub detector: CollisionDetector,
    pub resolver: CollisionResolver,
    pub flash: FlashSlot,
    pub(crate) collisions: u64, // detected collisions, the t = 0 contact excluded
    listeners: Vec<Box<dyn CollisionListener + Send>>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        cfg.validate()?;

        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            g: cfg.physics.g,
            length: cfg.physics.length,
            eps: p_cfg.eps,
            h0: p_cfg.h0,
            cooldown: p_cfg.cooldown,
            speed: p_cfg.speed,
        };

        // Body 1 arrives at the bottom carrying all the speed, body 2 waits there
        let omega = cfg.physics.initial_speed / parameters.length;
        let system = SimulationState::new(
            Body::at_bottom(cfg.bodies[0].m, omega),
            Body::at_bottom(cfg.bodies[1].m, 0.0),
        );

        Ok(Self::from_state(parameters, system))
    }

    /// Assemble a scene around an explicit state and resolve the contact at
    /// the current instant before any motion
    pub fn from_state(parameters: Parameters, system: SimulationState) -> Self {
        let mut scenario = Self::with_state(parameters, system);
        let Scenario { system, resolver, .. } = &mut scenario;
        resolver.resolve(system, 0);
        scenario
    }

    /// Assemble a scene around `system` exactly as given
    pub fn with_state(parameters: Parameters, system: SimulationState) -> Self {
        let torques = TorqueSet::new().with(LinearRestoring {
            g: parameters.g,
            length: parameters.length,
        });
        let detector = CollisionDetector { eps: parameters.eps };
        let resolver = CollisionResolver {
            cooldown: parameters.cooldown,
        };

        Self {
            parameters,
            system,
            torques,
            detector,
            resolver,
            flash: FlashSlot::default(),
            collisions: 0,
            listeners: Vec::new(),
        }
    }

    /// Advance by one host frame of `delta` wall time, see [`driver::advance`]
    pub fn tick(&mut self, delta: f64) -> Result<StateSnapshot, SimError> {
        driver::advance(self, delta)
    }

    /// Detected collisions so far, the t = 0 contact excluded
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.system.snapshot()
    }

    pub fn energy_shares(&self) -> EnergyShares {
        kinetic_shares(&self.system, self.parameters.length)
    }

    /// Register a consumer notified of every detected collision
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: CollisionListener + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Take the pending flash, if a collision happened since the last call
    pub fn take_flash(&mut self) -> Option<CollisionEvent> {
        self.flash.take()
    }

    pub(crate) fn publish(&mut self, event: CollisionEvent) {
        self.collisions += 1;
        self.flash.post(event);
        for listener in self.listeners.iter_mut() {
            if let Err(err) = listener.on_collision(&event) {
                warn!("collision listener failed on event #{}: {err:#}", event.index);
            }
        }
    }
}
