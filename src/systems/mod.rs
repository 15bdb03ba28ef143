//! Invitation systems.
//!
//! This module groups all ECS systems that advance the invitation, input,
//! and rendering.
//!
//! Submodules overview
//! - [`audio`] – the audio thread and the bridge systems (poll/forward queues)
//! - [`input`] – read hardware input and translate it into requests
//! - [`navigation`] – check for pending screen transitions and trigger events
//! - [`playback`] – reconcile the music intent with the audio thread
//! - [`render`] – draw background, entities, and debug overlay using Raylib
//! - [`stickers`] – spawn the transition sticker bursts
//! - [`time`] – update simulation time and delta, process timers
//! - [`ttl`] – despawn entities whose time-to-live ran out
//! - [`tween`] – animate position, rotation, and scale over time

pub mod audio;
pub mod input;
pub mod navigation;
pub mod playback;
pub mod render;
pub mod stickers;
pub mod time;
pub mod ttl;
pub mod tween;
