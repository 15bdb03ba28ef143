//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, navigation
//! state, asset stores, and utilities. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `debugmode` – presence toggles optional debug overlays and logs
//! - `fontstore` – loaded fonts keyed by string IDs
//! - `gameconfig` – window and audio settings loaded from config.ini
//! - `input` – per-frame keyboard/pointer state relevant to the invite
//! - `invite` – invitation content (texts, sticker sets, floating items)
//! - `navigation` – authoritative and pending screen plus direction
//! - `playback` – desired music playback state and its bookkeeping
//! - `screensize` – window dimensions in pixels
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldsignals` – global string/flag signals (quit flag and friends)
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod debugmode;
pub mod fontstore;
pub mod gameconfig;
pub mod input;
pub mod invite;
pub mod navigation;
pub mod playback;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod worldsignals;
pub mod worldtime;
