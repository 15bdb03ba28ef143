//! Navigation systems.
//!
//! [`check_pending_screen`] watches the [`NextScreen`] resource each frame
//! and triggers the [`ScreenChangedEvent`] when a transition is pending; the
//! observer in `crate::events::navigation` does the actual work.

use crate::events::navigation::ScreenChangedEvent;
use crate::resources::navigation::{NextScreen, NextScreens};
use bevy_ecs::prelude::*;

/// Trigger the screen-change event when a transition is pending.
pub fn check_pending_screen(mut commands: Commands, next_screen: Res<NextScreen>) {
    if let NextScreens::Pending(_target) = next_screen.get() {
        commands.trigger(ScreenChangedEvent {});
    }
}
