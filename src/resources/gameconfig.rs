//! Application configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 900
//! height = 640
//! target_fps = 60
//!
//! [audio]
//! music = ./assets/audio/boteco_fm.ogg
//! volume = 0.8
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 900;
const DEFAULT_WINDOW_HEIGHT: u32 = 640;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VOLUME: f32 = 0.8;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Application configuration resource.
///
/// Stores window settings and audio options. `load_from_file` is called once
/// at startup; a missing file leaves the defaults in place.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Optional override for the music track path; `None` means use the
    /// path from the invite content.
    pub music_path: Option<String>,
    /// Music volume in [0.0, 1.0].
    pub volume: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            music_path: None,
            volume: DEFAULT_VOLUME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [audio] section
        if let Some(path) = config.get("audio", "music") {
            self.music_path = Some(path);
        }
        if let Some(volume) = config.getfloat("audio", "volume").ok().flatten() {
            self.volume = (volume as f32).clamp(0.0, 1.0);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, volume={}",
            self.window_width, self.window_height, self.target_fps, self.volume
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [audio] section
        config.set("audio", "music", self.music_path.clone());
        config.set("audio", "volume", Some(self.volume.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = GameConfig::new();
        assert!(config.window_width > 0);
        assert!(config.window_height > 0);
        assert!(config.target_fps > 0);
        assert!(config.music_path.is_none());
        assert!((0.0..=1.0).contains(&config.volume));
    }

    #[test]
    fn test_with_path_keeps_defaults() {
        let config = GameConfig::with_path("./elsewhere.ini");
        assert_eq!(config.config_path, PathBuf::from("./elsewhere.ini"));
        assert_eq!(config.window_width, GameConfig::new().window_width);
    }

    #[test]
    fn test_load_missing_file_is_an_error_but_defaults_survive() {
        let mut config = GameConfig::with_path("./no/such/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.volume, DEFAULT_VOLUME);
    }
}
