//! Music playback reconciliation systems.
//!
//! The desired playback state lives in
//! [`PlaybackIntent`](crate::resources::playback::PlaybackIntent); the audio
//! thread owns the actual stream. Three systems keep them honest:
//!
//! - [`reconcile_playback`] pushes the desired state to the audio thread
//!   whenever it differs from the last applied value (play/resume on true,
//!   pause on false — stopping never fails).
//! - [`playback_feedback`] drains the thread's replies; a
//!   [`MusicPlayFailed`](crate::events::audio::AudioMessage::MusicPlayFailed)
//!   logs a warning and rolls the intent back to false, exactly once per
//!   rejection, so the indicator reflects reality instead of the wish.
//! - [`first_interaction_system`] raises the intent on the first pointer or
//!   key press after startup, exactly once (guarded flag in the resource) —
//!   the silent retry opportunity after an auto-start rejection.
//!
//! [`update_radio_indicator`] recolors the radio widget from the current
//! desired state: the only user-visible trace of a playback failure.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use raylib::prelude::Color;

use crate::components::group::Group;
use crate::components::tint::Tint;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::input::InputState;
use crate::resources::playback::PlaybackIntent;

/// Track id the invite's single looping song is registered under.
pub const MUSIC_ID: &str = "boteco_fm";

/// Entity group of the radio widget sprite whose tint mirrors the state.
pub const RADIO_GROUP: &str = "radio";

/// Push the desired playback state to the audio thread when it changed.
pub fn reconcile_playback(
    mut intent: ResMut<PlaybackIntent>,
    mut writer: MessageWriter<AudioCmd>,
) {
    if !intent.needs_apply() {
        return;
    }
    if intent.is_playing() {
        let first_start = intent.mark_applied();
        if first_start {
            writer.write(AudioCmd::PlayMusic {
                id: MUSIC_ID.into(),
                looped: true,
            });
        } else {
            writer.write(AudioCmd::ResumeMusic {
                id: MUSIC_ID.into(),
            });
        }
    } else {
        intent.mark_applied();
        writer.write(AudioCmd::PauseMusic {
            id: MUSIC_ID.into(),
        });
    }
}

/// React to audio thread replies: roll the intent back on a rejected play.
pub fn playback_feedback(
    mut intent: ResMut<PlaybackIntent>,
    mut reader: MessageReader<AudioMessage>,
) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicPlayFailed { id, error } => {
                warn!(
                    "Playback of '{}' was rejected ({}); muting until the next interaction",
                    id, error
                );
                intent.reject();
            }
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("Music '{}' failed to load: {}", id, error);
            }
            AudioMessage::MusicPlayStarted { id } => {
                debug!("Music '{}' playing", id);
            }
            _ => {}
        }
    }
}

/// One-shot global interaction hook: the first pointer or key press raises
/// the playback intent, then the guard stays consumed for the rest of the
/// session.
pub fn first_interaction_system(input: Res<InputState>, mut intent: ResMut<PlaybackIntent>) {
    if intent.interaction_consumed() {
        return;
    }
    if input.pointer_just_pressed || input.any_key_just_pressed {
        if intent.consume_first_interaction() {
            info!("First interaction detected; starting music");
            intent.request_play();
        }
    }
}

/// Recolor the radio widget from the desired playback state.
pub fn update_radio_indicator(
    intent: Res<PlaybackIntent>,
    mut query: Query<(&Group, &mut Tint)>,
) {
    let color = if intent.is_playing() {
        Color::LIME
    } else {
        Color::RED
    };
    for (group, mut tint) in query.iter_mut() {
        if group.0 == RADIO_GROUP {
            tint.color = color;
        }
    }
}
