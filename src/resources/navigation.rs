//! Screen navigation resources.
//!
//! These resources track the authoritative current screen of the invitation
//! and any pending transition requested by systems. See
//! `crate::events::navigation::observe_screen_change_event` for how a
//! transition is applied and hooks are invoked.
//!
//! The screen sequence is a closed, totally ordered set: [`SCREEN_ORDER`] is
//! the single source of truth for ordering, and [`Direction`] is derived
//! from index comparison on every transition.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// The screens of the invitation, in presentation order.
///
/// The set is closed: a transition target outside this enum is
/// unrepresentable, so no runtime validation is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Loading,
    Intro,
    Theme,
    Attractions,
    Food,
    Experiences,
    Location,
}

/// Presentation order of the screens. Index position defines what
/// "forward" and "backward" mean for the transition animation.
pub const SCREEN_ORDER: [Screen; 7] = [
    Screen::Loading,
    Screen::Intro,
    Screen::Theme,
    Screen::Attractions,
    Screen::Food,
    Screen::Experiences,
    Screen::Location,
];

impl Screen {
    /// Position of this screen in [`SCREEN_ORDER`].
    pub fn index(self) -> usize {
        SCREEN_ORDER
            .iter()
            .position(|s| *s == self)
            .expect("every Screen variant is listed in SCREEN_ORDER")
    }

    /// The adjacent screen forward in the order, if any.
    pub fn next(self) -> Option<Screen> {
        SCREEN_ORDER.get(self.index() + 1).copied()
    }

    /// The adjacent screen backward in the order, if any.
    pub fn prev(self) -> Option<Screen> {
        self.index().checked_sub(1).map(|i| SCREEN_ORDER[i])
    }

    /// Stable string key for this screen, used to look up enter hooks in the
    /// systems store and sticker lists in the invite content.
    pub fn key(self) -> &'static str {
        match self {
            Screen::Loading => "loading",
            Screen::Intro => "intro",
            Screen::Theme => "theme",
            Screen::Attractions => "attractions",
            Screen::Food => "food",
            Screen::Experiences => "experiences",
            Screen::Location => "location",
        }
    }
}

/// Which of the two mirrored entry animations a transition uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Direction of a transition from `from` to `to`.
///
/// Forward iff the target sits at the same or a later index; requesting the
/// current screen again is not expected to happen and defaults to forward.
pub fn direction_between(from: Screen, to: Screen) -> Direction {
    if to.index() >= from.index() {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

/// Representation of a requested next screen.
///
/// Use [`NextScreen::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextScreens::Unchanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextScreens {
    #[default]
    Unchanged,
    Pending(Screen),
}

/// Authoritative current screen plus the direction of the transition that
/// brought it in.
///
/// Both fields are written together by the screen-change observer, so no
/// system ever observes a new direction with the old screen or vice versa.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationState {
    current: Screen,
    direction: Direction,
}

impl NavigationState {
    /// Create a new state initialized to [`Screen::Loading`], facing forward.
    pub fn new() -> Self {
        NavigationState {
            current: Screen::Loading,
            direction: Direction::Forward,
        }
    }

    /// Read-only access to the current screen.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Direction of the most recent transition.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Apply a transition immediately, deriving the direction from the
    /// screen order.
    ///
    /// Prefer requesting transitions via [`NextScreen`] and the event
    /// observer so panel/overlay hooks run.
    pub fn apply(&mut self, target: Screen) {
        self.direction = direction_between(self.current, target);
        self.current = target;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Intent to change to a new screen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextScreen {
    next: NextScreens,
}

impl NextScreen {
    /// Create a new value initialized to [`NextScreens::Unchanged`].
    pub fn new() -> Self {
        NextScreen {
            next: NextScreens::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> NextScreens {
        self.next
    }

    /// Request a transition to `target` by marking it as pending.
    ///
    /// The `check_pending_screen` system will handle the change event
    /// emission.
    pub fn set(&mut self, target: Screen) {
        self.next = NextScreens::Pending(target);
    }

    /// Reset to [`NextScreens::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextScreens::Unchanged;
    }
}

impl Default for NextScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_total_and_stable() {
        for (i, screen) in SCREEN_ORDER.iter().enumerate() {
            assert_eq!(screen.index(), i);
        }
    }

    #[test]
    fn test_adjacency_matches_order() {
        assert_eq!(Screen::Loading.next(), Some(Screen::Intro));
        assert_eq!(Screen::Intro.next(), Some(Screen::Theme));
        assert_eq!(Screen::Experiences.next(), Some(Screen::Location));
        assert_eq!(Screen::Location.next(), None);

        assert_eq!(Screen::Loading.prev(), None);
        assert_eq!(Screen::Theme.prev(), Some(Screen::Intro));
        assert_eq!(Screen::Location.prev(), Some(Screen::Experiences));
    }

    #[test]
    fn test_direction_forward_iff_later_index() {
        for from in SCREEN_ORDER {
            for to in SCREEN_ORDER {
                let dir = direction_between(from, to);
                if to.index() > from.index() {
                    assert_eq!(dir, Direction::Forward, "{:?} -> {:?}", from, to);
                } else if to.index() < from.index() {
                    assert_eq!(dir, Direction::Backward, "{:?} -> {:?}", from, to);
                } else {
                    // Same screen: not expected in practice, defaults forward.
                    assert_eq!(dir, Direction::Forward);
                }
            }
        }
    }

    #[test]
    fn test_apply_updates_screen_and_direction_together() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.current(), Screen::Loading);

        nav.apply(Screen::Intro);
        assert_eq!(nav.current(), Screen::Intro);
        assert_eq!(nav.direction(), Direction::Forward);

        nav.apply(Screen::Theme);
        nav.apply(Screen::Intro);
        assert_eq!(nav.current(), Screen::Intro);
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn test_next_screen_pending_and_reset() {
        let mut next = NextScreen::new();
        assert_eq!(next.get(), NextScreens::Unchanged);

        next.set(Screen::Theme);
        assert_eq!(next.get(), NextScreens::Pending(Screen::Theme));

        next.reset();
        assert_eq!(next.get(), NextScreens::Unchanged);
    }

    #[test]
    fn test_screen_keys_are_unique() {
        let mut keys: Vec<&str> = SCREEN_ORDER.iter().map(|s| s.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), SCREEN_ORDER.len());
    }
}
