use bevy_ecs::prelude::Component;

/// Tag component for grouping entities by name.
///
/// The invite uses four groups: `"panel"` for the current screen's entities,
/// `"stickers"` for the transition burst, `"background"` for the floating
/// decorations, and `"radio"` for the playback widget.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);
