//! Background music playback intent.
//!
//! [`PlaybackIntent`] stores the *desired* playback state, which is not the
//! same thing as what the audio thread is actually doing: a play request can
//! be rejected (the track may still be loading when the loading screen's
//! auto-start fires). The reconcile/feedback systems in
//! `crate::systems::playback` keep desire and reality in sync, rolling the
//! intent back to false on rejection so the on-screen indicator never lies.

use bevy_ecs::prelude::Resource;

/// Desired playback state plus the bookkeeping the playback systems need.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlaybackIntent {
    /// Whether the music should be playing.
    playing: bool,
    /// Last desired value actually pushed to the audio thread. `None` until
    /// the first reconcile pass.
    applied: Option<bool>,
    /// Whether a play command has ever been issued (first start uses play,
    /// later starts use resume).
    started: bool,
    /// One-shot guard for the global first-interaction auto-start.
    interaction_consumed: bool,
}

impl PlaybackIntent {
    /// Create a new intent: not playing, nothing applied, interaction armed.
    pub fn new() -> Self {
        PlaybackIntent {
            playing: false,
            applied: None,
            started: false,
            interaction_consumed: false,
        }
    }

    /// Desired playback state.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Request playback. Idempotent.
    pub fn request_play(&mut self) {
        self.playing = true;
    }

    /// Flip the desired state unconditionally (user toggle).
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Stop playback.
    pub fn request_stop(&mut self) {
        self.playing = false;
    }

    /// Whether the desired state differs from what was last applied.
    pub fn needs_apply(&self) -> bool {
        self.applied != Some(self.playing)
    }

    /// Record that the current desired state has been pushed to the audio
    /// thread. Returns true if this is the first start ever, so the caller
    /// can pick play-from-zero over resume.
    pub fn mark_applied(&mut self) -> bool {
        self.applied = Some(self.playing);
        let first = self.playing && !self.started;
        if self.playing {
            self.started = true;
        }
        first
    }

    /// Roll back after the audio thread rejected a play request: desired and
    /// applied both become false, and a later start goes through the
    /// play-from-zero path again.
    pub fn reject(&mut self) {
        self.playing = false;
        self.applied = Some(false);
        self.started = false;
    }

    /// One-shot first-interaction trigger. Returns true exactly once, on the
    /// first call; the guard stays consumed forever after.
    pub fn consume_first_interaction(&mut self) -> bool {
        if self.interaction_consumed {
            return false;
        }
        self.interaction_consumed = true;
        true
    }

    /// Whether the first-interaction path has already fired.
    pub fn interaction_consumed(&self) -> bool {
        self.interaction_consumed
    }
}

impl Default for PlaybackIntent {
    fn default() -> Self {
        Self::new()
    }
}
