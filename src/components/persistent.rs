//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component will not be despawned when
//! switching screens. Use this for the floating background, the radio
//! widget, observers, and registered systems.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across screen changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
