//! Convite main entry point.
//!
//! An animated party invitation written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The invite walks through a fixed sequence of screens (loading → intro →
//! theme → attractions → food → experiences → location) with looping bar
//! music, floating background props, and sticker bursts on transitions.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (sprites, text, tweens, timers, etc.)
//! - [`events`] – Event types (screen transitions, timers, audio bridge)
//! - [`game`] – High-level setup and the per-screen panel hooks
//! - [`resources`] – ECS resources (navigation, playback intent, stores, ...)
//! - [`systems`] – ECS systems (rendering, input, tweens, audio bridge, ...)
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, resources (fonts, audio)
//! 2. Register observers and the per-screen hooks, run setup
//! 3. Enter the loading screen; a timer advances to the intro on its own
//! 4. Run the frame schedule: input, navigation, audio bridge, tweens, render
//! 5. Clean up the audio thread on exit
//!
//! # Controls
//!
//! Arrow keys navigate, Enter starts, M toggles the music, F11 toggles the
//! debug overlay, Escape quits.

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::navigation::{ScreenChangedEvent, observe_screen_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::events::timer::loading_timer_observer;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::invite::InviteContent;
use crate::resources::navigation::{NavigationState, NextScreen, Screen};
use crate::resources::playback::PlaybackIntent;
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::input::{apply_input_actions, update_input_state};
use crate::systems::navigation::check_pending_screen;
use crate::systems::playback::{
    first_interaction_system, playback_feedback, reconcile_playback, update_radio_indicator,
};
use crate::systems::render::render_system;
use crate::systems::time::{update_timers, update_world_time};
use crate::systems::ttl::ttl_system;
use crate::systems::tween::{tween_position_system, tween_rotation_system, tween_scale_system};
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Animated invitation for the Boteco do Kainã party.
#[derive(Parser)]
#[command(version, about = "Convite animado — Boteco do Kainã")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the music muted (volume 0).
    #[arg(long)]
    muted: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if cli.muted {
        config.volume = 0.0;
    }

    let window_width = config.window_width;
    let window_height = config.window_height;

    log::info!("Abrindo o boteco...");
    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Boteco do Kainã")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by the input system, not the window
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ScreenSize {
        w: window_width as i32,
        h: window_height as i32,
    });
    world.insert_resource(InviteContent::load_or_default("./assets/invite.json"));
    world.insert_resource(config);
    world.insert_resource(InputState::default());

    // Init audio
    setup_audio(&mut world); // sets up AudioBridge and the message queues
    // it must go before the setup hook sends load commands

    world.insert_resource(NavigationState::new());
    world.insert_resource(NextScreen::new());
    world.insert_resource(PlaybackIntent::new());
    world.insert_non_send_resource(FontStore::new());

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn((Observer::new(observe_screen_change_event), Persistent));
    world.spawn((Observer::new(loading_timer_observer), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    // Ensure the observers are registered before anything can trigger them.
    world.flush();

    // Register the screen hooks and run one-shot setup (assets, persistent
    // entities, music load).
    game::register_hooks(&mut world);
    let setup_id = *world
        .resource::<SystemsStore>()
        .get("setup")
        .expect("setup system not found in SystemsStore");
    world
        .run_system(setup_id)
        .expect("Failed to run setup system");
    world.flush();

    // Enter the loading screen through the regular transition path.
    {
        let mut next_screen = world.resource_mut::<NextScreen>();
        next_screen.set(Screen::Loading);
    }
    world.trigger(ScreenChangedEvent {});
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(apply_input_actions.after(update_input_state));
    update.add_systems(first_interaction_system.after(update_input_state));
    update.add_systems(check_pending_screen.after(apply_input_actions));
    update.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // Then, pull audio thread messages and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(
        reconcile_playback
            .after(first_interaction_system)
            .after(apply_input_actions),
    );
    update.add_systems(playback_feedback.after(update_bevy_audio_messages));
    update.add_systems(update_radio_indicator.after(playback_feedback));
    update.add_systems(update_timers);
    update.add_systems(tween_position_system);
    update.add_systems(tween_rotation_system);
    update.add_systems(tween_scale_system);
    update.add_systems(ttl_system);
    update.add_systems(
        render_system
            .after(tween_position_system)
            .after(tween_rotation_system)
            .after(tween_scale_system)
            .after(ttl_system),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    shutdown_audio(&mut world);
}
