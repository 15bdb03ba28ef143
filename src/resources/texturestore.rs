//! Texture store resource.
//!
//! Loaded textures keyed by string IDs. Textures are loaded during setup;
//! any key that failed to load simply stays absent, and the render system
//! skips sprites whose key is unknown, so a missing image degrades to a gap
//! on screen rather than an error.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
#[derive(Resource)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Add a texture with the given key.
    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.map.insert(id.into(), texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(id.as_ref())
    }

    /// Pixel dimensions of a loaded texture, if present.
    pub fn size(&self, id: impl AsRef<str>) -> Option<(f32, f32)> {
        self.map
            .get(id.as_ref())
            .map(|t| (t.width as f32, t.height as f32))
    }

    /// Number of loaded textures.
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
