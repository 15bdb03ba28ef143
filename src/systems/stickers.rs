//! Transition sticker overlay system.
//!
//! Whenever a screen transition is applied, the navigation observer runs
//! [`spawn_transition_stickers`] (after the panel cleanup hook, which has
//! already despawned any stickers left over from the previous screen — that
//! despawn is what cancels a still-pending hide). If the new screen has a
//! non-empty sticker list in the invite content, one entity per image is
//! spawned with:
//!
//! - a position slot cycled from a fixed table of five placements (more than
//!   five stickers reuse slots and stack, which is intentional),
//! - a random tilt of 5–20 degrees whose sign alternates with the index,
//!   resampled on every reveal,
//! - a pop-in scale tween and a small vertical bob,
//! - a [`Ttl`] of [`STICKER_SECONDS`] so the whole burst hides on its own.
//!
//! Screens without a sticker entry spawn nothing, so the overlay is empty
//! immediately and no countdown is left behind.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::group::Group;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::ttl::Ttl;
use crate::components::tween::{Easing, LoopMode, TweenPosition, TweenRotation, TweenScale};
use crate::components::zindex::ZIndex;
use crate::resources::invite::InviteContent;
use crate::resources::navigation::NavigationState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use log::debug;

/// Seconds a sticker burst stays on screen.
pub const STICKER_SECONDS: f32 = 2.0;

/// Largest edge of a sticker on screen, in pixels.
pub const STICKER_MAX_SIZE: f32 = 180.0;

/// Entity group holding the current burst.
pub const STICKER_GROUP: &str = "stickers";

/// The five preset placements, as fractions of the screen size.
/// Corner-ish spots plus the center, cycled by sticker index.
const STICKER_SLOTS: [(f32, f32); 5] = [
    (0.15, 0.18),
    (0.85, 0.82),
    (0.82, 0.22),
    (0.18, 0.75),
    (0.50, 0.50),
];

/// Placement slot for the sticker at `index`, cycling through the preset
/// table.
pub fn slot_fraction(index: usize) -> (f32, f32) {
    STICKER_SLOTS[index % STICKER_SLOTS.len()]
}

/// Tilt for the sticker at `index`: magnitude 5–20 degrees, sign alternating
/// with index parity. Purely cosmetic; resampled on each reveal.
pub fn sticker_rotation(index: usize, rng: &mut Rng) -> f32 {
    let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
    sign * (5.0 + rng.f32() * 15.0)
}

/// Spawn the sticker burst for the current screen.
///
/// Registered in the systems store as `"transition_stickers"` and run by the
/// screen-change observer after the panel cleanup hook.
pub fn spawn_transition_stickers(
    mut commands: Commands,
    nav: Res<NavigationState>,
    content: Res<InviteContent>,
    screen_size: Res<ScreenSize>,
    textures: Option<Res<TextureStore>>,
    mut rng: Local<Rng>,
) {
    let Some(keys) = content.stickers_for(nav.current()) else {
        debug!("No stickers for {:?}", nav.current());
        return;
    };

    let w = screen_size.w as f32;
    let h = screen_size.h as f32;

    for (index, tex_key) in keys.iter().enumerate() {
        let (fx, fy) = slot_fraction(index);
        let pos = Vector2 { x: w * fx, y: h * fy };

        // Source size comes from the loaded texture; a missing texture still
        // gets an entity (the renderer skips it) so the burst timing is the
        // same either way.
        let (tex_w, tex_h) = textures
            .as_deref()
            .and_then(|t| t.size(tex_key))
            .unwrap_or((STICKER_MAX_SIZE, STICKER_MAX_SIZE));
        let fit = STICKER_MAX_SIZE / tex_w.max(tex_h).max(1.0);

        let tilt = sticker_rotation(index, &mut rng);

        commands.spawn((
            Group(STICKER_GROUP),
            ScreenPosition::from_vec(pos),
            ZIndex(50),
            Sprite::centered(tex_key.clone(), tex_w, tex_h),
            Scale::uniform(0.0),
            Rotation::default(),
            TweenScale::new(
                Vector2 { x: 0.0, y: 0.0 },
                Vector2 { x: fit, y: fit },
                0.5,
            )
            .with_easing(Easing::CubicOut),
            TweenRotation::new(0.0, tilt, 0.5).with_easing(Easing::CubicOut),
            TweenPosition::new(
                pos,
                Vector2 {
                    x: pos.x,
                    y: pos.y - 20.0,
                },
                0.9,
            )
            .with_easing(Easing::QuadInOut)
            .with_loop_mode(LoopMode::PingPong),
            Ttl::new(STICKER_SECONDS),
        ));
    }
    debug!(
        "Spawned {} stickers for {:?}",
        keys.len(),
        nav.current()
    );
}
