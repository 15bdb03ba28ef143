//! Timer expiration events.
//!
//! When a [`Timer`](crate::components::timer::Timer) component reaches its
//! duration, a [`TimerEvent`] is triggered. Observers subscribe to the
//! signal names they care about.
//!
//! The invitation has one timed transition: the fake loading sequence. A
//! timer entity with signal `"loading_done"` is spawned when the loading
//! screen enters; [`loading_timer_observer`] reacts to it by requesting the
//! intro screen and raising the music intent (the auto-play attempt, which
//! the audio thread may still reject).
//!
//! # Related
//!
//! - [`crate::components::timer::Timer`] – the timer component
//! - [`crate::systems::time::update_timers`] – the system that emits these events

use crate::resources::navigation::{NavigationState, NextScreen, Screen};
use crate::resources::playback::PlaybackIntent;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

/// Signal name of the loading screen's auto-advance timer.
pub const LOADING_DONE_SIGNAL: &str = "loading_done";

/// Event emitted when a timer expires.
///
/// The `entity` field identifies the entity that held the timer, and
/// `signal` contains the user-defined signal name from the timer component.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer expired.
    pub entity: Entity,
    /// The signal name configured on the timer.
    pub signal: String,
}

/// Observer for the loading screen's auto-advance.
///
/// Fires once (the timer entity despawns on expiry): requests the intro
/// screen and raises the playback intent. If the user somehow navigated
/// away already, the late signal is dropped.
pub fn loading_timer_observer(
    trigger: On<TimerEvent>,
    nav: Res<NavigationState>,
    mut next_screen: ResMut<NextScreen>,
    mut intent: ResMut<PlaybackIntent>,
) {
    if trigger.signal != LOADING_DONE_SIGNAL {
        return;
    }
    if nav.current() != Screen::Loading {
        debug!("loading_done fired after leaving the loading screen; ignoring");
        return;
    }
    info!("Loading finished; advancing to intro and starting music");
    next_screen.set(Screen::Intro);
    intent.request_play();
}
