//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource provides a world-wide signal map for
//! cross-system communication without entity queries. The invite uses it for
//! the quit flag the main loop polls and for small strings the debug overlay
//! prints, but any system may stash values here.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// String signals addressed by string keys.
    pub strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
    /// Get a string signal by key.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_roundtrip() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("quit"));
        signals.set_flag("quit");
        assert!(signals.has_flag("quit"));
        signals.clear_flag("quit");
        assert!(!signals.has_flag("quit"));
    }

    #[test]
    fn test_strings_roundtrip() {
        let mut signals = WorldSignals::default();
        signals.set_string("screen", "intro");
        assert_eq!(signals.get_string("screen").map(String::as_str), Some("intro"));
        assert!(signals.get_string("missing").is_none());
    }
}
