//! Collision notifications for the presentation layer
//!
//! The physics step never waits on a consumer. Each resolved collision is
//! posted to a single-slot [`FlashSlot`] (polled by the host once per frame)
//! and pushed to any registered [`CollisionListener`]s; a listener error is
//! logged and dropped.

/// One resolved collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub index: u64,       // 1 for the first detected collision
    pub t: f64,           // simulation time of the resolving sub-step
    pub before: [f64; 2], // angular velocities going in
    pub after: [f64; 2],  // angular velocities coming out
}

/// Push-style consumer of collision events (flash effects, sound, logging)
pub trait CollisionListener {
    fn on_collision(&mut self, event: &CollisionEvent) -> anyhow::Result<()>;
}

/// Holds the latest collision until the host takes it
#[derive(Debug, Default, Clone)]
pub struct FlashSlot {
    pending: Option<CollisionEvent>,
}

impl FlashSlot {
    /// Store `event`, replacing one the host has not taken yet
    pub fn post(&mut self, event: CollisionEvent) {
        self.pending = Some(event);
    }

    pub fn take(&mut self) -> Option<CollisionEvent> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
