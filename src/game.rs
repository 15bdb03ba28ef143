//! High-level invitation setup and screen panels.
//!
//! This module owns:
//! - [`setup`] – one-shot loading of fonts, textures, and the music track,
//!   plus spawning of the persistent entities (floating background, radio
//!   widget).
//! - [`register_hooks`] – registration of the per-screen enter hooks, the
//!   panel cleanup hook, and the sticker overlay hook in the
//!   [`SystemsStore`], where the screen-change observer looks them up.
//! - The `enter_*` hooks themselves: each spawns its screen's panel entities
//!   in the `"panel"` group, animated in from the side selected by the
//!   transition [`Direction`].

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::warn;
use raylib::prelude::*;

use crate::components::backdrop::Backdrop;
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::persistent::Persistent;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::timer::Timer;
use crate::components::tint::Tint;
use crate::components::tween::{Easing, LoopMode, TweenPosition, TweenRotation, TweenScale};
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::timer::LOADING_DONE_SIGNAL;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::invite::InviteContent;
use crate::resources::navigation::{Direction, NavigationState};
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::systems::playback::{MUSIC_ID, RADIO_GROUP};
use crate::systems::stickers::spawn_transition_stickers;

/// Seconds the fake loading screen stays up before auto-advancing.
pub const LOADING_SECONDS: f32 = 2.5;

/// Entity group of the current screen's panel.
pub const PANEL_GROUP: &str = "panel";

/// Entity group of the floating background decorations.
pub const BACKGROUND_GROUP: &str = "background";

/// How far panels slide in, in pixels, and how steep the entry tilt is.
const ENTER_SLIDE: f32 = 300.0;
const ENTER_TILT: f32 = 5.0;
const ENTER_SECONDS: f32 = 0.45;

const BOTECO_RED: Color = Color::new(183, 28, 28, 255);
const BOTECO_YELLOW: Color = Color::new(251, 192, 45, 255);
const BUTTON_GREEN: Color = Color::new(56, 142, 60, 255);
const CARD_WHITE: Color = Color::new(255, 255, 255, 255);
const INK: Color = Color::new(33, 33, 33, 255);
const INK_SOFT: Color = Color::new(97, 97, 97, 255);

/// Entry animation preset for the given direction: horizontal offset and
/// tilt. Forward enters from the right leaning one way, backward mirrors it.
pub fn enter_preset(direction: Direction) -> (f32, f32) {
    match direction {
        Direction::Forward => (ENTER_SLIDE, ENTER_TILT),
        Direction::Backward => (-ENTER_SLIDE, -ENTER_TILT),
    }
}

/// Build the slide-in tween pair for a panel piece resting at `rest` with
/// `rest_tilt` degrees of permanent tilt.
fn slide_in(
    rest: Vector2,
    rest_tilt: f32,
    direction: Direction,
) -> (TweenPosition, TweenRotation) {
    let (dx, tilt) = enter_preset(direction);
    (
        TweenPosition::new(
            Vector2 {
                x: rest.x + dx,
                y: rest.y,
            },
            rest,
            ENTER_SECONDS,
        )
        .with_easing(Easing::CubicOut),
        TweenRotation::new(rest_tilt + tilt, rest_tilt, ENTER_SECONDS)
            .with_easing(Easing::CubicOut),
    )
}

/// One-shot startup: load assets, queue the music, and spawn the persistent
/// entities. Screen entities are spawned by the enter hooks instead.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    content: Res<InviteContent>,
    screen: Res<ScreenSize>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut fonts: NonSendMut<FontStore>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
    mut rng: Local<Rng>,
) {
    // Fonts: a display face for headings and a marker face for body text.
    // Missing files fall back to the default font at render time.
    for (key, path) in [
        ("display", "./assets/fonts/display.ttf"),
        ("marker", "./assets/fonts/marker.ttf"),
    ] {
        match rl.load_font(&th, path) {
            Ok(font) => fonts.add(key, font),
            Err(e) => warn!("Failed to load font '{}' from {}: {}", key, path, e),
        }
    }

    // Textures: stickers, attraction icons, floating items, and the radio
    // case. Every key maps to assets/textures/<key>.png; failures are logged
    // and the key stays absent (the renderer skips it).
    let mut tex_store = TextureStore::new();
    let mut keys: Vec<String> = Vec::new();
    keys.extend(content.stickers.values().flatten().cloned());
    keys.extend(content.attractions.iter().map(|a| a.icon.clone()));
    keys.extend(content.floating_items.iter().map(|f| f.tex.clone()));
    keys.push("radio".into());
    keys.sort();
    keys.dedup();
    for key in keys {
        let path = format!("./assets/textures/{}.png", key);
        match rl.load_texture(&th, &path) {
            Ok(tex) => tex_store.insert(key, tex),
            Err(e) => warn!("Failed to load texture '{}': {}", key, e),
        }
    }
    commands.insert_resource(tex_store);

    // Queue the looping song; loading is asynchronous on the audio thread,
    // so an early play request can still be rejected.
    let music_path = config
        .music_path
        .clone()
        .unwrap_or_else(|| content.music_path.clone());
    audio_cmd_writer.write(AudioCmd::LoadMusic {
        id: MUSIC_ID.into(),
        path: music_path,
    });
    audio_cmd_writer.write(AudioCmd::VolumeMusic {
        id: MUSIC_ID.into(),
        vol: config.volume,
    });

    spawn_floating_background(&mut commands, &content, *screen, &mut rng);
    spawn_radio_widget(&mut commands, *screen);
}

/// Spawn the floating decorations: one drifting, bobbing, slowly spinning
/// sprite per configured item, behind everything else.
fn spawn_floating_background(
    commands: &mut Commands,
    content: &InviteContent,
    screen: ScreenSize,
    rng: &mut Rng,
) {
    let w = screen.w as f32;
    let h = screen.h as f32;
    for item in content.floating_items.iter() {
        let x = rng.f32() * w;
        let y = 60.0 + rng.f32() * (h - 120.0);
        commands.spawn((
            Persistent,
            Group(BACKGROUND_GROUP),
            ScreenPosition::new(x, y),
            ZIndex(-10),
            Sprite::centered(item.tex.clone(), 64.0, 64.0),
            Scale::uniform(item.scale),
            Rotation::default(),
            TweenPosition::new(
                Vector2 { x, y: y - 50.0 },
                Vector2 { x, y: y + 50.0 },
                item.speed,
            )
            .with_easing(Easing::QuadInOut)
            .with_loop_mode(LoopMode::PingPong)
            .with_time_offset(item.delay),
            TweenRotation::new(0.0, 360.0, item.speed * 4.0)
                .with_loop_mode(LoopMode::Loop)
                .with_time_offset(item.delay),
            TweenScale::new(
                Vector2 {
                    x: item.scale,
                    y: item.scale,
                },
                Vector2 {
                    x: item.scale * 1.1,
                    y: item.scale * 1.1,
                },
                item.speed * 0.5,
            )
            .with_easing(Easing::QuadInOut)
            .with_loop_mode(LoopMode::PingPong)
            .with_time_offset(item.delay),
        ));
    }
}

/// Spawn the persistent radio widget in the top-right corner: the wooden
/// case, the indicator lamp recolored by the playback systems, and the
/// toggle hint.
fn spawn_radio_widget(commands: &mut Commands, screen: ScreenSize) {
    let x = screen.w as f32 - 110.0;
    let y = 46.0;

    commands.spawn((
        Persistent,
        Group(RADIO_GROUP),
        ScreenPosition::new(x, y),
        ZIndex(90),
        Backdrop::new(170.0, 56.0, Color::new(121, 85, 72, 255))
            .with_border(Color::new(62, 39, 35, 255), 4.0),
        Rotation::new(2.0),
    ));
    commands.spawn((
        Persistent,
        Group(RADIO_GROUP),
        ScreenPosition::new(x - 60.0, y),
        ZIndex(91),
        Backdrop::new(18.0, 18.0, CARD_WHITE),
        Tint::new(255, 0, 0, 255), // recolored every frame from the intent
        Rotation::new(2.0),
    ));
    commands.spawn((
        Persistent,
        Group(RADIO_GROUP),
        ScreenPosition::new(x - 40.0, y - 16.0),
        ZIndex(91),
        DynamicText::new("BOTECO FM", "marker", 16.0, Color::new(255, 236, 179, 255)),
        Rotation::new(2.0),
    ));
    commands.spawn((
        Persistent,
        Group(RADIO_GROUP),
        ScreenPosition::new(x - 40.0, y + 2.0),
        ZIndex(91),
        DynamicText::new("[M] tocar/pausar", "marker", 12.0, Color::new(215, 204, 200, 255)),
        Rotation::new(2.0),
    ));
}

/// Despawn the previous screen's panel and any stickers still visible.
///
/// Runs from the screen-change observer before the enter hook. Despawning
/// the sticker group here is what invalidates a pending hide countdown when
/// a new transition supersedes it.
pub fn clean_panels(mut commands: Commands, query: Query<(Entity, &Group)>) {
    for (entity, group) in query.iter() {
        if group.0 == PANEL_GROUP || group.0 == crate::systems::stickers::STICKER_GROUP {
            commands.entity(entity).try_despawn();
        }
    }
}

/// Register every hook the screen-change observer needs and insert the
/// filled [`SystemsStore`]. Registered systems are entities in bevy_ecs
/// 0.18, so each is marked [`Persistent`] to survive panel cleanups.
pub fn register_hooks(world: &mut World) {
    let mut store = SystemsStore::new();

    macro_rules! register {
        ($name:literal, $system:path) => {{
            let id = world.register_system($system);
            world.entity_mut(id.entity()).insert(Persistent);
            store.insert($name, id);
        }};
    }

    register!("setup", setup);
    register!("clean_panels", clean_panels);
    register!("transition_stickers", spawn_transition_stickers);
    register!("enter_loading", enter_loading);
    register!("enter_intro", enter_intro);
    register!("enter_theme", enter_theme);
    register!("enter_attractions", enter_attractions);
    register!("enter_food", enter_food);
    register!("enter_experiences", enter_experiences);
    register!("enter_location", enter_location);

    world.insert_resource(store);
    world.flush();
}

fn center(screen: &ScreenSize) -> Vector2 {
    Vector2 {
        x: screen.w as f32 * 0.5,
        y: screen.h as f32 * 0.5,
    }
}

/// Loading screen: spinner, headline, and the one-shot auto-advance timer.
///
/// The timer entity lives in the panel group, so leaving the screen early
/// (not reachable through the UI, but cheap to get right) also cancels it.
pub fn enter_loading(mut commands: Commands, screen: Res<ScreenSize>) {
    let c = center(&screen);

    commands.spawn((
        Group(PANEL_GROUP),
        Timer::new(LOADING_SECONDS, LOADING_DONE_SIGNAL),
    ));
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::new(c.x, c.y - 50.0),
        ZIndex(10),
        Backdrop::new(48.0, 48.0, BOTECO_RED),
        Rotation::default(),
        TweenRotation::new(0.0, 360.0, 2.0).with_loop_mode(LoopMode::Loop),
    ));
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::new(c.x - 150.0, c.y + 20.0),
        ZIndex(10),
        Backdrop::new(320.0, 44.0, Color::new(0, 0, 0, 128)),
    ));
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::new(c.x - 135.0, c.y + 8.0),
        ZIndex(11),
        DynamicText::new("Gelando a cerveja...", "display", 26.0, Color::WHITE),
    ));
}

/// Intro screen: the big tilted title card and the start button.
pub fn enter_intro(
    mut commands: Commands,
    nav: Res<NavigationState>,
    content: Res<InviteContent>,
    screen: Res<ScreenSize>,
) {
    let dir = nav.direction();
    let c = center(&screen);

    let (pos_tw, rot_tw) = slide_in(c, -2.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(c),
        ZIndex(10),
        Backdrop::new(420.0, 340.0, CARD_WHITE).with_border(Color::BLACK, 4.0),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let title = Vector2 {
        x: c.x - 180.0,
        y: c.y - 120.0,
    };
    let (pos_tw, rot_tw) = slide_in(title, -2.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(title),
        ZIndex(11),
        DynamicText::new(content.title.clone(), "display", 44.0, BOTECO_RED),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let subtitle = Vector2 {
        x: c.x - 160.0,
        y: c.y - 40.0,
    };
    let (pos_tw, rot_tw) = slide_in(subtitle, 1.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(subtitle),
        ZIndex(11),
        DynamicText::new(
            "O convite mais fubanga do ano!",
            "marker",
            22.0,
            INK_SOFT,
        ),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let button = Vector2 {
        x: c.x,
        y: c.y + 90.0,
    };
    let (pos_tw, rot_tw) = slide_in(button, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(button),
        ZIndex(11),
        Backdrop::new(360.0, 64.0, BUTTON_GREEN).with_border(Color::new(27, 94, 32, 255), 4.0),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
    let label = Vector2 {
        x: c.x - 140.0,
        y: c.y + 78.0,
    };
    let (pos_tw, rot_tw) = slide_in(label, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(label),
        ZIndex(12),
        DynamicText::new("[ENTER] DISGRAÇA É ISSO?", "display", 24.0, Color::WHITE),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
}

/// Shared chrome for the middle screens: card, heading, underline, nav hint.
fn spawn_step_frame(
    commands: &mut Commands,
    dir: Direction,
    c: Vector2,
    title: &str,
) {
    let (pos_tw, rot_tw) = slide_in(c, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(c),
        ZIndex(10),
        Backdrop::new(460.0, 420.0, CARD_WHITE).with_border(Color::new(224, 224, 224, 255), 2.0),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let heading = Vector2 {
        x: c.x - 110.0,
        y: c.y - 180.0,
    };
    let (pos_tw, rot_tw) = slide_in(heading, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(heading),
        ZIndex(11),
        DynamicText::new(title, "display", 30.0, INK),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let underline = Vector2 {
        x: c.x,
        y: c.y - 140.0,
    };
    let (pos_tw, rot_tw) = slide_in(underline, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(underline),
        ZIndex(11),
        Backdrop::new(80.0, 4.0, BOTECO_RED),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let hint = Vector2 {
        x: c.x - 170.0,
        y: c.y + 180.0,
    };
    let (pos_tw, rot_tw) = slide_in(hint, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(hint),
        ZIndex(11),
        DynamicText::new("[<-] voltar   [->] avançar", "marker", 18.0, INK_SOFT),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
}

/// Theme screen: the dashed theme card and the dress-code warning.
pub fn enter_theme(
    mut commands: Commands,
    nav: Res<NavigationState>,
    content: Res<InviteContent>,
    screen: Res<ScreenSize>,
) {
    let dir = nav.direction();
    let c = center(&screen);
    spawn_step_frame(&mut commands, dir, c, "O Tema É:");

    let card = Vector2 {
        x: c.x,
        y: c.y - 40.0,
    };
    let (pos_tw, rot_tw) = slide_in(card, 1.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(card),
        ZIndex(11),
        Backdrop::new(400.0, 140.0, Color::new(255, 249, 196, 255))
            .with_border(Color::new(249, 168, 37, 255), 4.0),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let theme = Vector2 {
        x: c.x - 180.0,
        y: c.y - 70.0,
    };
    let (pos_tw, rot_tw) = slide_in(theme, 1.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(theme),
        ZIndex(12),
        DynamicText::new(content.theme.clone(), "marker", 30.0, BOTECO_RED),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let dress = Vector2 {
        x: c.x - 185.0,
        y: c.y - 20.0,
    };
    let (pos_tw, rot_tw) = slide_in(dress, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(dress),
        ZIndex(12),
        DynamicText::new(content.dress_code.clone(), "marker", 14.0, INK),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let aside = Vector2 {
        x: c.x - 160.0,
        y: c.y + 120.0,
    };
    let (pos_tw, rot_tw) = slide_in(aside, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(aside),
        ZIndex(11),
        DynamicText::new(
            "(Se não vier a caráter vai passar vergonha)",
            "marker",
            14.0,
            INK_SOFT,
        ),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
}

/// Attractions screen: one row per attraction, icon plus name.
pub fn enter_attractions(
    mut commands: Commands,
    nav: Res<NavigationState>,
    content: Res<InviteContent>,
    screen: Res<ScreenSize>,
) {
    let dir = nav.direction();
    let c = center(&screen);
    spawn_step_frame(&mut commands, dir, c, "Atrações");

    for (i, attraction) in content.attractions.iter().enumerate() {
        let row_y = c.y - 90.0 + i as f32 * 70.0;
        let row = Vector2 { x: c.x, y: row_y };
        let (pos_tw, rot_tw) = slide_in(row, 0.0, dir);
        commands.spawn((
            Group(PANEL_GROUP),
            ScreenPosition::from_vec(row),
            ZIndex(11),
            Backdrop::new(400.0, 56.0, Color::new(245, 245, 245, 255))
                .with_border(BOTECO_RED, 2.0),
            Rotation::default(),
            pos_tw,
            rot_tw,
        ));

        let icon = Vector2 {
            x: c.x - 165.0,
            y: row_y,
        };
        let (pos_tw, rot_tw) = slide_in(icon, 0.0, dir);
        commands.spawn((
            Group(PANEL_GROUP),
            ScreenPosition::from_vec(icon),
            ZIndex(12),
            Sprite::centered(attraction.icon.clone(), 32.0, 32.0),
            Scale::default(),
            Rotation::default(),
            pos_tw,
            rot_tw,
        ));

        let name = Vector2 {
            x: c.x - 135.0,
            y: row_y - 10.0,
        };
        let (pos_tw, rot_tw) = slide_in(name, 0.0, dir);
        commands.spawn((
            Group(PANEL_GROUP),
            ScreenPosition::from_vec(name),
            ZIndex(12),
            DynamicText::new(attraction.name.clone(), "marker", 20.0, INK),
            Rotation::default(),
            pos_tw,
            rot_tw,
        ));
    }
}

/// Food screen: the blackboard menu and the pricing note.
pub fn enter_food(
    mut commands: Commands,
    nav: Res<NavigationState>,
    content: Res<InviteContent>,
    screen: Res<ScreenSize>,
) {
    let dir = nav.direction();
    let c = center(&screen);
    spawn_step_frame(&mut commands, dir, c, "Comes & Bebes");

    let board = Vector2 {
        x: c.x,
        y: c.y - 40.0,
    };
    let (pos_tw, rot_tw) = slide_in(board, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(board),
        ZIndex(11),
        Backdrop::new(400.0, 190.0, Color::new(20, 20, 20, 255))
            .with_border(Color::new(97, 97, 97, 255), 4.0),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let menu = [
        "Cerveja",
        "Destilados Duvidosos",
        "Cachorro-quente e coisaradas",
        "Terá Opção Vegana",
    ];
    for (i, line) in menu.iter().enumerate() {
        let item = Vector2 {
            x: c.x - 175.0,
            y: c.y - 110.0 + i as f32 * 40.0,
        };
        let (pos_tw, rot_tw) = slide_in(item, 0.0, dir);
        commands.spawn((
            Group(PANEL_GROUP),
            ScreenPosition::from_vec(item),
            ZIndex(12),
            DynamicText::new(
                format!("[x] {}", line),
                "marker",
                18.0,
                Color::new(129, 199, 132, 255),
            ),
            Rotation::default(),
            pos_tw,
            rot_tw,
        ));
    }

    let note = Vector2 {
        x: c.x,
        y: c.y + 110.0,
    };
    let (pos_tw, rot_tw) = slide_in(note, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(note),
        ZIndex(11),
        Backdrop::new(420.0, 60.0, Color::new(187, 222, 251, 255))
            .with_border(Color::new(100, 181, 246, 255), 2.0),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
    let note_text = Vector2 {
        x: c.x - 195.0,
        y: c.y + 95.0,
    };
    let (pos_tw, rot_tw) = slide_in(note_text, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(note_text),
        ZIndex(12),
        DynamicText::new(content.price_note.clone(), "marker", 13.0, Color::new(13, 71, 161, 255)),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
}

/// Experiences screen: the numbered clipboard.
pub fn enter_experiences(
    mut commands: Commands,
    nav: Res<NavigationState>,
    content: Res<InviteContent>,
    screen: Res<ScreenSize>,
) {
    let dir = nav.direction();
    let c = center(&screen);
    spawn_step_frame(&mut commands, dir, c, "Experiências");

    // Clipboard clip
    let clip = Vector2 {
        x: c.x,
        y: c.y - 120.0,
    };
    let (pos_tw, rot_tw) = slide_in(clip, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(clip),
        ZIndex(11),
        Backdrop::new(96.0, 16.0, Color::new(158, 158, 158, 255)),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    for (i, exp) in content.experiences.iter().enumerate() {
        let base_y = c.y - 90.0 + i as f32 * 62.0;

        let title = Vector2 {
            x: c.x - 185.0,
            y: base_y,
        };
        let (pos_tw, rot_tw) = slide_in(title, 0.0, dir);
        commands.spawn((
            Group(PANEL_GROUP),
            ScreenPosition::from_vec(title),
            ZIndex(12),
            DynamicText::new(
                format!("#{} {}", i + 1, exp.title),
                "marker",
                18.0,
                BOTECO_RED,
            ),
            Rotation::default(),
            pos_tw,
            rot_tw,
        ));

        let desc = Vector2 {
            x: c.x - 160.0,
            y: base_y + 24.0,
        };
        let (pos_tw, rot_tw) = slide_in(desc, 0.0, dir);
        commands.spawn((
            Group(PANEL_GROUP),
            ScreenPosition::from_vec(desc),
            ZIndex(12),
            DynamicText::new(exp.desc.clone(), "marker", 13.0, INK_SOFT),
            Rotation::default(),
            pos_tw,
            rot_tw,
        ));
    }
}

/// Location screen: address, date, and the group-chat link.
pub fn enter_location(
    mut commands: Commands,
    nav: Res<NavigationState>,
    content: Res<InviteContent>,
    screen: Res<ScreenSize>,
) {
    let dir = nav.direction();
    let c = center(&screen);

    let (pos_tw, rot_tw) = slide_in(c, 1.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(c),
        ZIndex(10),
        Backdrop::new(460.0, 440.0, BOTECO_YELLOW).with_border(Color::BLACK, 4.0),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let heading = Vector2 {
        x: c.x - 100.0,
        y: c.y - 190.0,
    };
    let (pos_tw, rot_tw) = slide_in(heading, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(heading),
        ZIndex(11),
        DynamicText::new("LOCALIZAÇÃO", "display", 30.0, INK),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));

    let address_card = Vector2 {
        x: c.x,
        y: c.y - 90.0,
    };
    let (pos_tw, rot_tw) = slide_in(address_card, -1.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(address_card),
        ZIndex(11),
        Backdrop::new(410.0, 110.0, CARD_WHITE).with_border(Color::new(189, 189, 189, 255), 2.0),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
    for (i, (line, size, color)) in [
        ("Endereço".to_string(), 20.0, BOTECO_RED),
        (content.address.clone(), 15.0, INK),
        (content.city.clone(), 14.0, INK_SOFT),
    ]
    .into_iter()
    .enumerate()
    {
        let pos = Vector2 {
            x: c.x - 185.0,
            y: c.y - 130.0 + i as f32 * 30.0,
        };
        let (pos_tw, rot_tw) = slide_in(pos, -1.0, dir);
        commands.spawn((
            Group(PANEL_GROUP),
            ScreenPosition::from_vec(pos),
            ZIndex(12),
            DynamicText::new(line, "marker", size, color),
            Rotation::default(),
            pos_tw,
            rot_tw,
        ));
    }

    let date_card = Vector2 {
        x: c.x,
        y: c.y + 40.0,
    };
    let (pos_tw, rot_tw) = slide_in(date_card, 1.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(date_card),
        ZIndex(11),
        Backdrop::new(410.0, 90.0, BOTECO_RED),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
    for (i, (line, size)) in [
        (format!("DATA  {}", content.date_line), 20.0),
        (content.time_line.clone(), 13.0),
    ]
    .into_iter()
    .enumerate()
    {
        let pos = Vector2 {
            x: c.x - 185.0,
            y: c.y + 15.0 + i as f32 * 30.0,
        };
        let (pos_tw, rot_tw) = slide_in(pos, 1.0, dir);
        commands.spawn((
            Group(PANEL_GROUP),
            ScreenPosition::from_vec(pos),
            ZIndex(12),
            DynamicText::new(line, "marker", size, Color::WHITE),
            Rotation::default(),
            pos_tw,
            rot_tw,
        ));
    }

    let link_card = Vector2 {
        x: c.x,
        y: c.y + 155.0,
    };
    let (pos_tw, rot_tw) = slide_in(link_card, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(link_card),
        ZIndex(11),
        Backdrop::new(410.0, 80.0, BUTTON_GREEN).with_border(Color::new(27, 94, 32, 255), 4.0),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
    for (i, (line, size)) in [
        ("BROTA NO GRUPO DO ZAP".to_string(), 20.0),
        (content.group_link.clone(), 12.0),
    ]
    .into_iter()
    .enumerate()
    {
        let pos = Vector2 {
            x: c.x - 185.0,
            y: c.y + 130.0 + i as f32 * 28.0,
        };
        let (pos_tw, rot_tw) = slide_in(pos, 0.0, dir);
        commands.spawn((
            Group(PANEL_GROUP),
            ScreenPosition::from_vec(pos),
            ZIndex(12),
            DynamicText::new(line, "marker", size, Color::WHITE),
            Rotation::default(),
            pos_tw,
            rot_tw,
        ));
    }

    let back_hint = Vector2 {
        x: c.x - 185.0,
        y: c.y - 195.0,
    };
    let (pos_tw, rot_tw) = slide_in(back_hint, 0.0, dir);
    commands.spawn((
        Group(PANEL_GROUP),
        ScreenPosition::from_vec(back_hint),
        ZIndex(11),
        DynamicText::new("[<-]", "marker", 18.0, Color::new(0, 0, 0, 128)),
        Rotation::default(),
        pos_tw,
        rot_tw,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_preset_is_mirrored() {
        let (fwd_dx, fwd_tilt) = enter_preset(Direction::Forward);
        let (back_dx, back_tilt) = enter_preset(Direction::Backward);
        assert_eq!(fwd_dx, -back_dx);
        assert_eq!(fwd_tilt, -back_tilt);
        assert!(fwd_dx > 0.0);
        assert!(fwd_tilt > 0.0);
    }

    #[test]
    fn test_slide_in_lands_on_rest_pose() {
        let rest = Vector2 { x: 100.0, y: 200.0 };
        let (pos_tw, rot_tw) = slide_in(rest, -2.0, Direction::Forward);
        assert_eq!(pos_tw.to.x, rest.x);
        assert_eq!(pos_tw.to.y, rest.y);
        assert_eq!(pos_tw.from.x, rest.x + ENTER_SLIDE);
        assert_eq!(rot_tw.to, -2.0);
        assert_eq!(rot_tw.from, -2.0 + ENTER_TILT);
    }

    #[test]
    fn test_slide_in_backward_comes_from_the_left() {
        let rest = Vector2 { x: 100.0, y: 200.0 };
        let (pos_tw, rot_tw) = slide_in(rest, 0.0, Direction::Backward);
        assert_eq!(pos_tw.from.x, rest.x - ENTER_SLIDE);
        assert_eq!(rot_tw.from, -ENTER_TILT);
    }
}
