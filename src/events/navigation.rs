//! Screen transition event and observer.
//!
//! Systems can request a change of [`Screen`] by updating [`NextScreen`].
//! Emitting a [`ScreenChangedEvent`] then triggers the observer in this
//! module, which applies the transition to [`NavigationState`] and invokes
//! the appropriate hooks stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change screens from the mechanics of
//! despawning the old panel, spawning the new one, and firing the sticker
//! overlay, and avoids borrowing conflicts. Because current screen and
//! direction are written together before any hook runs, the transition is
//! observably atomic.

use crate::resources::navigation::{NavigationState, NextScreen, NextScreens};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending screen transition should be applied.
///
/// Emitting this event causes [`observe_screen_change_event`] to read
/// [`NextScreen`]. If it contains a pending screen, the observer updates the
/// authoritative [`NavigationState`], runs the panel/overlay hooks, and
/// clears the pending value; otherwise nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScreenChangedEvent {}

/// Observer that applies a pending screen transition.
///
/// Contract
/// - Reads the intention from [`NextScreen`].
/// - If pending, derives the direction from the screen order, writes screen
///   and direction into [`NavigationState`] together, then:
///   - runs the `"clean_panels"` hook (despawns the old panel and any
///     stickers still on screen — this is what cancels a stale hide timer)
///   - runs the new screen's `"enter_<screen>"` hook
///   - runs the `"transition_stickers"` hook for the overlay burst
///   - resets [`NextScreen`]
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_screen_change_event(
    _trigger: On<ScreenChangedEvent>,
    mut commands: Commands,
    mut next_screen: Option<ResMut<NextScreen>>,
    mut nav: Option<ResMut<NavigationState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("ScreenChangedEvent triggered");

    if let (Some(next_screen), Some(nav)) = (next_screen.as_deref_mut(), nav.as_deref_mut()) {
        match next_screen.get() {
            NextScreens::Pending(target) => {
                info!("Transitioning from {:?} to {:?}", nav.current(), target);
                nav.apply(target);
                next_screen.reset();

                if let Some(clean_id) = systems_store.get("clean_panels") {
                    commands.run_system(*clean_id);
                } else {
                    warn!("clean_panels hook not found in SystemsStore");
                }

                let enter_key = format!("enter_{}", target.key());
                if let Some(enter_id) = systems_store.get(&enter_key) {
                    commands.run_system(*enter_id);
                } else {
                    warn!("{} hook not found in SystemsStore", enter_key);
                }

                if let Some(stickers_id) = systems_store.get("transition_stickers") {
                    commands.run_system(*stickers_id);
                } else {
                    warn!("transition_stickers hook not found in SystemsStore");
                }
            }
            NextScreens::Unchanged => {
                debug!("No screen change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_screen_change_event. next_screen: {:?}, nav: {:?}",
            next_screen.is_some(),
            nav.is_some()
        );
    }
}
