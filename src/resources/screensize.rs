//! Screen size resource.
//!
//! Stores the window dimensions in pixels. Layout code (panel placement,
//! sticker slots, floating item spawns) reads this instead of querying the
//! window directly.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
