//! Card backdrop component.
//!
//! The panels are drawn as flat cards: a filled rectangle with a border,
//! placed behind the panel's text and icons. [`Backdrop`] carries the card's
//! size and colors; position, rotation, and z-order come from the usual
//! components on the same entity.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Flat rectangle drawn at the entity's position, centered on its pivot.
#[derive(Component, Clone, Copy, Debug)]
pub struct Backdrop {
    /// Card width in pixels.
    pub width: f32,
    /// Card height in pixels.
    pub height: f32,
    /// Fill color.
    pub fill: Color,
    /// Border color.
    pub border: Color,
    /// Border thickness in pixels; 0 disables the border.
    pub border_thickness: f32,
}

impl Backdrop {
    pub fn new(width: f32, height: f32, fill: Color) -> Self {
        Self {
            width,
            height,
            fill,
            border: Color::BLACK,
            border_thickness: 0.0,
        }
    }

    pub fn with_border(mut self, color: Color, thickness: f32) -> Self {
        self.border = color;
        self.border_thickness = thickness;
        self
    }

    /// Center pivot of the card, used by the renderer.
    pub fn origin(&self) -> Vector2 {
        Vector2 {
            x: self.width * 0.5,
            y: self.height * 0.5,
        }
    }
}
