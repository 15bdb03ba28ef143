//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the invitation's world. Components define data such as position,
//! rendering, animation, and lifetime.
//!
//! Submodules overview:
//! - [`backdrop`] – flat card rectangle drawn behind panel content
//! - [`dynamictext`] – text component for rendering strings
//! - [`group`] – tag component for grouping entities by name
//! - [`persistent`] – marker for entities that persist across screen changes
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor for sprites
//! - [`screenposition`] – screen-space position (pivot) for an entity
//! - [`sprite`] – 2D sprite rendering component
//! - [`timer`] – countdown timer that emits events when finished
//! - [`tint`] – color modulation for sprites, text, and backdrops
//! - [`ttl`] – time-to-live for automatic despawning
//! - [`tween`] – animated interpolation of position, rotation, and scale
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod backdrop;
pub mod dynamictext;
pub mod group;
pub mod persistent;
pub mod rotation;
pub mod scale;
pub mod screenposition;
pub mod sprite;
pub mod timer;
pub mod tint;
pub mod ttl;
pub mod tween;
pub mod zindex;
