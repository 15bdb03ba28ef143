//! Tween animation systems.
//!
//! These systems update entity properties over time based on tween components:
//! - [`tween_position_system`] – animates [`ScreenPosition`](crate::components::screenposition::ScreenPosition)
//! - [`tween_rotation_system`] – animates [`Rotation`](crate::components::rotation::Rotation)
//! - [`tween_scale_system`] – animates [`Scale`](crate::components::scale::Scale)
//!
//! Each tween component specifies start/end values, duration, easing function,
//! and loop mode. The systems read delta time from [`WorldTime`](crate::resources::worldtime::WorldTime)
//! and interpolate the property accordingly.

use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::tween::{Easing, LoopMode, TweenPosition, TweenRotation, TweenScale};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use raylib::math::Vector2;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance tween time and handle looping/completion.
pub(crate) fn advance(
    time: &mut f32,
    duration: f32,
    forward: &mut bool,
    playing: &mut bool,
    mode: LoopMode,
    dt: f32,
) {
    let dir = if *forward { 1.0 } else { -1.0 };
    *time += dt * dir;

    let finished_forward = *forward && *time >= duration;
    let finished_backward = !*forward && *time <= 0.0;

    if finished_forward || finished_backward {
        match mode {
            LoopMode::Once => {
                *playing = false;
                *time = time.clamp(0.0, duration);
            }
            LoopMode::Loop => {
                *time = if finished_forward { 0.0 } else { duration };
            }
            LoopMode::PingPong => {
                *forward = !*forward;
                *time = time.clamp(0.0, duration);
            }
        }
    }
}

/// Animate entity positions based on [`TweenPosition`] components.
pub fn tween_position_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut ScreenPosition, &mut TweenPosition)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut sp, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let loop_mode = tw.loop_mode;
        let mut t = tw.time;
        let mut forward = tw.forward;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut forward, &mut playing, loop_mode, dt);
        tw.time = t;
        tw.forward = forward;
        tw.playing = playing;
        let t = ease(tw.easing, tw.time / duration);
        sp.pos = lerp_v2(tw.from, tw.to, t);
    }
}

/// Animate entity rotations based on [`TweenRotation`] components.
pub fn tween_rotation_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Rotation, &mut TweenRotation)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut rot, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let loop_mode = tw.loop_mode;
        let mut t = tw.time;
        let mut forward = tw.forward;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut forward, &mut playing, loop_mode, dt);
        tw.time = t;
        tw.forward = forward;
        tw.playing = playing;
        let t = ease(tw.easing, tw.time / duration);
        rot.degrees = lerp_f32(tw.from, tw.to, t);
    }
}

/// Animate entity scales based on [`TweenScale`] components.
pub fn tween_scale_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Scale, &mut TweenScale)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut scale, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let loop_mode = tw.loop_mode;
        let mut t = tw.time;
        let mut forward = tw.forward;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut forward, &mut playing, loop_mode, dt);
        tw.time = t;
        tw.forward = forward;
        tw.playing = playing;
        let t = ease(tw.easing, tw.time / duration);
        scale.scale = lerp_v2(tw.from, tw.to, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL_EASINGS: [Easing; 7] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
    ];

    #[test]
    fn test_ease_endpoints() {
        for easing in ALL_EASINGS {
            assert!(
                approx_eq(ease(easing, 0.0), 0.0),
                "{:?} at t=0.0 should be 0.0",
                easing
            );
            assert!(
                approx_eq(ease(easing, 1.0), 1.0),
                "{:?} at t=1.0 should be 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        for easing in ALL_EASINGS {
            assert!(approx_eq(ease(easing, -0.5), 0.0));
            assert!(approx_eq(ease(easing, 1.5), 1.0));
        }
    }

    #[test]
    fn test_ease_quad_values() {
        assert!(approx_eq(ease(Easing::QuadIn, 0.5), 0.25));
        assert!(approx_eq(ease(Easing::QuadOut, 0.5), 0.75));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.5), 0.5));
    }

    #[test]
    fn test_ease_cubic_values() {
        assert!(approx_eq(ease(Easing::CubicIn, 0.5), 0.125));
        assert!(approx_eq(ease(Easing::CubicOut, 0.5), 0.875));
        assert!(approx_eq(ease(Easing::CubicInOut, 0.5), 0.5));
    }

    #[test]
    fn test_ease_monotonicity() {
        for easing in ALL_EASINGS {
            let mut prev = ease(easing, 0.0);
            for i in 1..=100 {
                let t = i as f32 / 100.0;
                let curr = ease(easing, t);
                assert!(
                    curr >= prev - EPSILON,
                    "{:?} should be monotonic at t={}",
                    easing,
                    t
                );
                prev = curr;
            }
        }
    }

    #[test]
    fn test_lerp_f32_basic() {
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.0), 0.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 1.0), 10.0));
        assert!(approx_eq(lerp_f32(-10.0, 10.0, 0.25), -5.0));
    }

    #[test]
    fn test_lerp_v2_component_independence() {
        let a = Vector2 { x: 0.0, y: 100.0 };
        let b = Vector2 { x: 100.0, y: 0.0 };
        let result = lerp_v2(a, b, 0.25);
        assert!(approx_eq(result.x, 25.0));
        assert!(approx_eq(result.y, 75.0));
    }

    #[test]
    fn test_advance_forward_normal() {
        let mut time = 0.0;
        let mut forward = true;
        let mut playing = true;
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Once, 0.1);
        assert!(approx_eq(time, 0.1));
        assert!(forward);
        assert!(playing);
    }

    #[test]
    fn test_advance_once_stops_at_end() {
        let mut time = 0.9;
        let mut forward = true;
        let mut playing = true;
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Once, 0.2);
        assert!(approx_eq(time, 1.0)); // clamped
        assert!(!playing); // stopped
    }

    #[test]
    fn test_advance_loop_wraps_forward() {
        let mut time = 0.9;
        let mut forward = true;
        let mut playing = true;
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Loop, 0.2);
        assert!(approx_eq(time, 0.0)); // wrapped
        assert!(playing);
    }

    #[test]
    fn test_advance_pingpong_reverses_at_end() {
        let mut time = 0.9;
        let mut forward = true;
        let mut playing = true;
        advance(
            &mut time,
            1.0,
            &mut forward,
            &mut playing,
            LoopMode::PingPong,
            0.2,
        );
        assert!(approx_eq(time, 1.0)); // clamped to end
        assert!(!forward); // direction reversed
        assert!(playing);
    }

    #[test]
    fn test_advance_pingpong_reverses_at_start() {
        let mut time = 0.1;
        let mut forward = false;
        let mut playing = true;
        advance(
            &mut time,
            1.0,
            &mut forward,
            &mut playing,
            LoopMode::PingPong,
            0.2,
        );
        assert!(approx_eq(time, 0.0)); // clamped to start
        assert!(forward); // direction reversed
        assert!(playing);
    }
}
