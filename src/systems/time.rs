//! Time update systems.
//!
//! - [`update_world_time`] updates the shared
//!   [`WorldTime`](crate::resources::worldtime::WorldTime) resource once per
//!   frame, applying `time_scale` to the provided delta.
//! - [`update_timers`] advances [`Timer`](crate::components::timer::Timer)
//!   components and triggers a [`TimerEvent`] when one expires. Timer
//!   entities are one-shot: the entity despawns with the event, so a timer
//!   can never fire twice, and despawning the owner early cancels it.

use bevy_ecs::prelude::*;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
}

/// Advance timers and fire [`TimerEvent`] for the ones that expired.
///
/// Each expired timer entity is despawned after its event triggers, so the
/// signal is delivered exactly once.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut timer) in query.iter_mut() {
        timer.elapsed += dt;
        if timer.elapsed >= timer.duration {
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal.clone(),
            });
            commands.entity(entity).try_despawn();
        }
    }
}
