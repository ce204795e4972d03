pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod events;
pub mod energy;
pub mod driver;
pub mod scenario;
