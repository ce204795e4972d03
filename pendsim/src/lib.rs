pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod error;

pub use simulation::states::{Body, SimulationState, StateSnapshot, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{AngularAcceleration, TorqueSet, LinearRestoring};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::collision::{elastic_transform, CollisionDetector, CollisionResolver, Gates};
pub use simulation::events::{CollisionEvent, CollisionListener, FlashSlot};
pub use simulation::energy::{kinetic_energy, kinetic_shares, momentum_proxy, potential_energy, total_energy, EnergyShares};
pub use simulation::driver::{advance, plan_substeps, SubstepPlan};
pub use simulation::scenario::Scenario;

pub use configuration::config::{PhysicsConfig, BodyConfig, ParametersConfig, RunConfig, ScenarioConfig};

pub use visualization::headless::{FrameRecord, HeadlessHost};

pub use error::SimError;
