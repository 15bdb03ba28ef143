//! Render system.
//!
//! Exclusive system that draws the whole frame with Raylib: the checkered
//! bar-floor background, then every drawable entity (card backdrops, sprites,
//! text) sorted by [`ZIndex`], then the debug overlay when
//! [`DebugMode`](crate::resources::debugmode::DebugMode) is present.
//!
//! Everything is drawn in screen space. A sprite whose texture key is not in
//! the [`TextureStore`] is skipped silently, and a text whose font key is not
//! in the [`FontStore`] falls back to the default font — missing assets
//! degrade the picture, never the program.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::backdrop::Backdrop;
use crate::components::dynamictext::DynamicText;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::navigation::NavigationState;
use crate::resources::playback::PlaybackIntent;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

const BACKGROUND: Color = Color::new(255, 253, 240, 255); // cream bar tiles
const CHECKER: Color = Color::new(204, 204, 204, 90);
const GRIME: Color = Color::new(40, 30, 0, 40);
const CHECKER_STEP: i32 = 40;

enum DrawItem {
    Card {
        backdrop: Backdrop,
        pos: Vector2,
        rotation: f32,
        tint: Option<Color>,
    },
    Image {
        sprite: Sprite,
        pos: Vector2,
        rotation: f32,
        scale: Vector2,
        tint: Color,
    },
    Text {
        text: DynamicText,
        pos: Vector2,
        rotation: f32,
        scale: f32,
        tint: Option<Tint>,
    },
}

/// Draw one frame.
pub fn render_system(world: &mut World) {
    // Collect the draw list before touching the window so the drawing pass
    // only holds shared borrows.
    let mut items: Vec<(ZIndex, DrawItem)> = Vec::new();

    let mut backdrops = world.query::<(
        &Backdrop,
        &ScreenPosition,
        Option<&ZIndex>,
        Option<&Rotation>,
        Option<&Tint>,
    )>();
    for (backdrop, pos, z, rot, tint) in backdrops.iter(world) {
        items.push((
            z.copied().unwrap_or(ZIndex(0)),
            DrawItem::Card {
                backdrop: *backdrop,
                pos: pos.pos,
                rotation: rot.map(|r| r.degrees).unwrap_or(0.0),
                tint: tint.map(|t| t.color),
            },
        ));
    }

    let mut sprites = world.query::<(
        &Sprite,
        &ScreenPosition,
        Option<&ZIndex>,
        Option<&Rotation>,
        Option<&Scale>,
        Option<&Tint>,
    )>();
    for (sprite, pos, z, rot, scale, tint) in sprites.iter(world) {
        items.push((
            z.copied().unwrap_or(ZIndex(0)),
            DrawItem::Image {
                sprite: sprite.clone(),
                pos: pos.pos,
                rotation: rot.map(|r| r.degrees).unwrap_or(0.0),
                scale: scale.map(|s| s.scale).unwrap_or(Vector2 { x: 1.0, y: 1.0 }),
                tint: tint.map(|t| t.color).unwrap_or(Color::WHITE),
            },
        ));
    }

    let mut texts = world.query::<(
        &DynamicText,
        &ScreenPosition,
        Option<&ZIndex>,
        Option<&Rotation>,
        Option<&Scale>,
        Option<&Tint>,
    )>();
    for (text, pos, z, rot, scale, tint) in texts.iter(world) {
        items.push((
            z.copied().unwrap_or(ZIndex(0)),
            DrawItem::Text {
                text: text.clone(),
                pos: pos.pos,
                rotation: rot.map(|r| r.degrees).unwrap_or(0.0),
                scale: scale.map(|s| s.scale.x).unwrap_or(1.0),
                tint: tint.copied(),
            },
        ));
    }

    items.sort_by_key(|(z, _)| *z);

    let debug = world.contains_resource::<DebugMode>();
    let debug_line = if debug {
        let nav = world.resource::<NavigationState>();
        let intent = world.resource::<PlaybackIntent>();
        let entity_count = world.entity_count();
        Some(format!(
            "screen={:?} dir={:?} music={} entities={}",
            nav.current(),
            nav.direction(),
            if intent.is_playing() { "on" } else { "off" },
            entity_count
        ))
    } else {
        None
    };

    let screen = *world.resource::<ScreenSize>();

    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing in render_system");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing in render_system");

    {
        let textures = world.resource::<TextureStore>();
        let fonts = world.non_send_resource::<FontStore>();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        draw_floor(&mut d, screen);

        for (_z, item) in items.iter() {
            match item {
                DrawItem::Card {
                    backdrop,
                    pos,
                    rotation,
                    tint,
                } => {
                    let origin = backdrop.origin();
                    if backdrop.border_thickness > 0.0 {
                        let t = backdrop.border_thickness;
                        d.draw_rectangle_pro(
                            Rectangle {
                                x: pos.x,
                                y: pos.y,
                                width: backdrop.width + 2.0 * t,
                                height: backdrop.height + 2.0 * t,
                            },
                            Vector2 {
                                x: origin.x + t,
                                y: origin.y + t,
                            },
                            *rotation,
                            backdrop.border,
                        );
                    }
                    let fill = (*tint).unwrap_or(backdrop.fill);
                    d.draw_rectangle_pro(
                        Rectangle {
                            x: pos.x,
                            y: pos.y,
                            width: backdrop.width,
                            height: backdrop.height,
                        },
                        origin,
                        *rotation,
                        fill,
                    );
                }
                DrawItem::Image {
                    sprite,
                    pos,
                    rotation,
                    scale,
                    tint,
                } => {
                    if let Some(tex) = textures.get(&sprite.tex_key) {
                        let src = Rectangle {
                            x: sprite.offset.x,
                            y: sprite.offset.y,
                            width: sprite.width,
                            height: sprite.height,
                        };
                        let dest = Rectangle {
                            x: pos.x,
                            y: pos.y,
                            width: sprite.width * scale.x,
                            height: sprite.height * scale.y,
                        };
                        let origin = Vector2 {
                            x: sprite.origin.x * scale.x,
                            y: sprite.origin.y * scale.y,
                        };
                        d.draw_texture_pro(tex, src, dest, origin, *rotation, *tint);
                    }
                    // Unknown texture key: degrade silently.
                }
                DrawItem::Text {
                    text,
                    pos,
                    rotation,
                    scale,
                    tint,
                } => {
                    let color = match tint {
                        Some(t) => t.multiply(text.color),
                        None => text.color,
                    };
                    let size = text.font_size * scale;
                    let spacing = size * 0.05;
                    match fonts.get(&text.font) {
                        Some(font) => {
                            d.draw_text_pro(
                                font,
                                &text.content,
                                *pos,
                                Vector2 { x: 0.0, y: 0.0 },
                                *rotation,
                                size,
                                spacing,
                                color,
                            );
                        }
                        None => {
                            let font = d.get_font_default();
                            d.draw_text_pro(
                                &font,
                                &text.content,
                                *pos,
                                Vector2 { x: 0.0, y: 0.0 },
                                *rotation,
                                size,
                                spacing,
                                color,
                            );
                        }
                    }
                }
            }
        }

        if let Some(line) = debug_line {
            let fps = d.get_fps();
            d.draw_text(&format!("{} | FPS: {}", line, fps), 10, 10, 10, Color::BLACK);
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Checkered bar-floor tiles with a grime gradient at the bottom.
fn draw_floor(d: &mut RaylibDrawHandle, screen: ScreenSize) {
    let cols = screen.w / CHECKER_STEP + 1;
    let rows = screen.h / CHECKER_STEP + 1;
    for row in 0..rows {
        for col in 0..cols {
            if (row + col) % 2 == 0 {
                d.draw_rectangle(
                    col * CHECKER_STEP,
                    row * CHECKER_STEP,
                    CHECKER_STEP,
                    CHECKER_STEP,
                    CHECKER,
                );
            }
        }
    }
    d.draw_rectangle_gradient_v(
        0,
        screen.h / 2,
        screen.w,
        screen.h - screen.h / 2,
        Color::BLANK,
        GRIME,
    );
}
