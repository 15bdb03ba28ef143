//! Time-to-live component for automatic entity despawning.
//!
//! The [`Ttl`] component counts down time each frame. When the remaining time
//! reaches zero, the entity is automatically despawned. There is no callback;
//! it's a "fire and forget" mechanism.
//!
//! The transition sticker burst is built on this: every sticker is spawned
//! with `Ttl::new(STICKER_SECONDS)`, and despawning the whole group early
//! (when a new transition supersedes the burst) also discards the pending
//! countdowns, so a stale burst can never outlive its screen.
//!
//! # Related
//!
//! - [`crate::systems::ttl::ttl_system`] – system that updates and despawns entities

use bevy_ecs::prelude::Component;

/// Time-to-live component that automatically despawns entities after a duration.
///
/// The countdown respects [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).
#[derive(Component)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    /// Create a new Ttl with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
