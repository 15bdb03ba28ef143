// Counts a number of seconds and then sends an event.
use bevy_ecs::prelude::Component;

#[derive(Component)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub signal: String,
}
impl Timer {
    pub fn new(duration: f32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
        }
    }
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let t = Timer::new(2.5, "loading_done");
        assert_eq!(t.elapsed, 0.0);
        assert_eq!(t.duration, 2.5);
        assert_eq!(t.signal, "loading_done");
    }

    #[test]
    fn test_reset() {
        let mut t = Timer::new(1.0, "x");
        t.elapsed = 0.7;
        t.reset();
        assert_eq!(t.elapsed, 0.0);
    }
}
