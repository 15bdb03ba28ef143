//! Per-frame input resource.
//!
//! Captures the subset of keyboard and pointer state the invitation cares
//! about and exposes it to systems via the [`InputState`] resource. The
//! invite is driven with the arrow keys (navigate), Enter (start), M (music
//! toggle), Escape (quit), and F11 (debug overlay); any click also counts as
//! an interaction for the one-shot music auto-start.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame input state relevant to the invitation.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Move to the next screen.
    pub advance: BoolState,
    /// Move to the previous screen.
    pub back: BoolState,
    /// The "start" action on the intro screen.
    pub start: BoolState,
    /// Flip the music playback intent.
    pub music_toggle: BoolState,
    /// Quit the invitation.
    pub quit: BoolState,
    /// Toggle the debug overlay.
    pub mode_debug: BoolState,
    /// Any mouse button or touch went down this frame.
    pub pointer_just_pressed: bool,
    /// Any bound key went down this frame (used together with the pointer
    /// for the one-shot interaction detector).
    pub any_key_just_pressed: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            advance: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            back: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            start: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            music_toggle: BoolState::bound_to(KeyboardKey::KEY_M),
            quit: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            pointer_just_pressed: false,
            any_key_just_pressed: false,
        }
    }
}
