//! Event types and observers used by the invitation.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without tight coupling or direct
//! dependencies.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`navigation`] – screen transition notifications and the applying observer
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off
//! - [`timer`] – timer expirations, including the loading auto-advance
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod audio;
pub mod navigation;
pub mod switchdebug;
pub mod timer;
