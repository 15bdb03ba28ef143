//! Input systems.
//!
//! Input handling is split in two so the action policy stays testable
//! without a window:
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - [`apply_input_actions`] turns the per-frame state into requests:
//!   screen transitions via [`NextScreen`], the music toggle, the debug
//!   overlay toggle, and the quit flag.
//!
//! Navigation policy: the loading screen ignores input; the intro screen
//! only starts (forward to the theme, also raising the music intent); every
//! later screen goes forward/backward to its neighbors in the screen order,
//! with nothing past the last screen.

use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;
use crate::resources::navigation::{NavigationState, NextScreen, Screen};
use crate::resources::playback::PlaybackIntent;
use crate::resources::worldsignals::WorldSignals;

/// Poll Raylib for keyboard and pointer input and update the `InputState`
/// resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSendMut<raylib::RaylibHandle>) {
    let mut any_key = false;

    macro_rules! poll {
        ($state:expr) => {{
            $state.active = rl.is_key_down($state.key_binding);
            $state.just_pressed = rl.is_key_pressed($state.key_binding);
            $state.just_released = rl.is_key_released($state.key_binding);
            any_key |= $state.just_pressed;
        }};
    }

    poll!(input.advance);
    poll!(input.back);
    poll!(input.start);
    poll!(input.music_toggle);
    poll!(input.quit);
    poll!(input.mode_debug);

    input.any_key_just_pressed = any_key;
    input.pointer_just_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
        || rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_RIGHT)
        || rl.get_touch_point_count() > 0;
}

/// Turn the per-frame input state into navigation/playback/debug requests.
pub fn apply_input_actions(
    input: Res<InputState>,
    nav: Res<NavigationState>,
    mut next_screen: ResMut<NextScreen>,
    mut intent: ResMut<PlaybackIntent>,
    mut signals: ResMut<WorldSignals>,
    mut commands: Commands,
) {
    if input.quit.just_pressed {
        signals.set_flag("quit_game");
    }
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.music_toggle.just_pressed {
        intent.toggle();
    }

    match nav.current() {
        Screen::Loading => {
            // The fake loading sequence is not skippable.
        }
        Screen::Intro => {
            if input.start.just_pressed || input.advance.just_pressed {
                // Make sure music is playing when the user starts
                // (idempotent if the auto-start already succeeded).
                intent.request_play();
                next_screen.set(Screen::Theme);
            }
        }
        current => {
            if input.advance.just_pressed {
                if let Some(target) = current.next() {
                    next_screen.set(target);
                }
            } else if input.back.just_pressed {
                if let Some(target) = current.prev() {
                    next_screen.set(target);
                }
            }
        }
    }
}
