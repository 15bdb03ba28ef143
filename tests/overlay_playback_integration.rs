//! Integration tests for the transition sticker overlay and the playback
//! reconciliation: timed hide, cancel-and-restart, play rejection rollback,
//! and the one-shot first-interaction hook.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use convite::components::group::Group;
use convite::components::persistent::Persistent;
use convite::components::ttl::Ttl;
use convite::events::audio::{AudioCmd, AudioMessage};
use convite::events::navigation::observe_screen_change_event;
use convite::events::timer::loading_timer_observer;
use convite::game::register_hooks;
use convite::resources::input::InputState;
use convite::resources::invite::InviteContent;
use convite::resources::navigation::{NavigationState, NextScreen, Screen};
use convite::resources::playback::PlaybackIntent;
use convite::resources::screensize::ScreenSize;
use convite::resources::worldsignals::WorldSignals;
use convite::resources::worldtime::WorldTime;
use convite::systems::navigation::check_pending_screen;
use convite::systems::playback::{
    first_interaction_system, playback_feedback, reconcile_playback,
};
use convite::systems::stickers::{STICKER_GROUP, STICKER_SECONDS};
use convite::systems::time::update_world_time;
use convite::systems::ttl::ttl_system;

const EPSILON: f32 = 1e-4;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ScreenSize { w: 900, h: 640 });
    world.insert_resource(InviteContent::new());
    world.insert_resource(InputState::default());
    world.insert_resource(NavigationState::new());
    world.insert_resource(NextScreen::new());
    world.insert_resource(PlaybackIntent::new());
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();

    world.spawn((Observer::new(observe_screen_change_event), Persistent));
    world.spawn((Observer::new(loading_timer_observer), Persistent));
    world.flush();

    register_hooks(&mut world);
    world
}

/// Request a transition and apply it.
fn enter(world: &mut World, screen: Screen) {
    world.resource_mut::<NextScreen>().set(screen);
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_screen);
    schedule.run(world);
}

/// Advance time and run the TTL countdown.
fn tick_ttl(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(ttl_system);
    schedule.run(world);
}

fn sticker_ttls(world: &mut World) -> Vec<f32> {
    let mut query = world.query::<(&Group, &Ttl)>();
    query
        .iter(world)
        .filter(|(group, _)| group.0 == STICKER_GROUP)
        .map(|(_, ttl)| ttl.remaining)
        .collect()
}

fn run_reconcile(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(reconcile_playback);
    schedule.run(world);
}

fn drain_cmds(world: &mut World) -> Vec<AudioCmd> {
    world
        .resource_mut::<Messages<AudioCmd>>()
        .drain()
        .collect()
}

// ==================== STICKER OVERLAY ====================

#[test]
fn entering_a_decorated_screen_spawns_its_full_burst() {
    let mut world = make_world();
    let expected = world
        .resource::<InviteContent>()
        .stickers_for(Screen::Theme)
        .map(|s| s.len())
        .unwrap();

    enter(&mut world, Screen::Theme);

    let ttls = sticker_ttls(&mut world);
    assert_eq!(ttls.len(), expected);
    for remaining in ttls {
        assert!((remaining - STICKER_SECONDS).abs() < EPSILON);
    }
}

#[test]
fn burst_hides_after_exactly_the_fixed_duration() {
    let mut world = make_world();
    enter(&mut world, Screen::Theme);

    tick_ttl(&mut world, STICKER_SECONDS - 0.1);
    assert!(!sticker_ttls(&mut world).is_empty());

    tick_ttl(&mut world, 0.1);
    assert!(sticker_ttls(&mut world).is_empty());
}

#[test]
fn a_new_transition_supersedes_the_pending_hide() {
    let mut world = make_world();
    enter(&mut world, Screen::Theme);
    tick_ttl(&mut world, STICKER_SECONDS * 0.75);

    // Superseding transition: the old burst is gone immediately and the new
    // one starts a fresh countdown, unaffected by the old one.
    enter(&mut world, Screen::Attractions);
    let expected = world
        .resource::<InviteContent>()
        .stickers_for(Screen::Attractions)
        .map(|s| s.len())
        .unwrap();
    let ttls = sticker_ttls(&mut world);
    assert_eq!(ttls.len(), expected);
    for remaining in ttls.iter() {
        assert!((remaining - STICKER_SECONDS).abs() < EPSILON);
    }

    // Had the old countdown leaked, the burst would vanish at 2.0s total.
    tick_ttl(&mut world, STICKER_SECONDS * 0.75);
    assert_eq!(sticker_ttls(&mut world).len(), expected);

    tick_ttl(&mut world, STICKER_SECONDS * 0.25);
    assert!(sticker_ttls(&mut world).is_empty());
}

#[test]
fn undecorated_screens_spawn_no_stickers_and_clear_old_ones() {
    let mut world = make_world();
    enter(&mut world, Screen::Intro);
    assert!(sticker_ttls(&mut world).is_empty());

    enter(&mut world, Screen::Theme);
    assert!(!sticker_ttls(&mut world).is_empty());

    // Going back to an undecorated screen hides everything immediately,
    // with no countdown left behind.
    enter(&mut world, Screen::Intro);
    assert!(sticker_ttls(&mut world).is_empty());
}

// ==================== PLAYBACK RECONCILIATION ====================

#[test]
fn first_play_request_issues_a_looped_play_command() {
    let mut world = make_world();
    world.resource_mut::<PlaybackIntent>().request_play();

    run_reconcile(&mut world);

    let cmds = drain_cmds(&mut world);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(
        &cmds[0],
        AudioCmd::PlayMusic { looped: true, .. }
    ));

    // Nothing more to apply until the intent changes again.
    run_reconcile(&mut world);
    assert!(drain_cmds(&mut world).is_empty());
}

#[test]
fn toggle_pauses_and_resumes_instead_of_restarting() {
    let mut world = make_world();
    world.resource_mut::<PlaybackIntent>().request_play();
    run_reconcile(&mut world);
    drain_cmds(&mut world);

    world.resource_mut::<PlaybackIntent>().toggle();
    run_reconcile(&mut world);
    let cmds = drain_cmds(&mut world);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(&cmds[0], AudioCmd::PauseMusic { .. }));

    world.resource_mut::<PlaybackIntent>().toggle();
    run_reconcile(&mut world);
    let cmds = drain_cmds(&mut world);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(&cmds[0], AudioCmd::ResumeMusic { .. }));
}

#[test]
fn play_rejection_rolls_the_intent_back_to_false() {
    let mut world = make_world();
    world.resource_mut::<PlaybackIntent>().request_play();
    run_reconcile(&mut world);
    drain_cmds(&mut world);

    world
        .resource_mut::<Messages<AudioMessage>>()
        .write(AudioMessage::MusicPlayFailed {
            id: "boteco_fm".into(),
            error: "track not loaded".into(),
        });

    let mut schedule = Schedule::default();
    schedule.add_systems(playback_feedback);
    schedule.run(&mut world);

    let intent = world.resource::<PlaybackIntent>();
    assert!(!intent.is_playing());
    // The rollback is already applied; no pause command gets issued for it.
    run_reconcile(&mut world);
    assert!(drain_cmds(&mut world).is_empty());
}

#[test]
fn rejected_then_retried_play_starts_from_zero_again() {
    let mut world = make_world();
    world.resource_mut::<PlaybackIntent>().request_play();
    run_reconcile(&mut world);
    drain_cmds(&mut world);

    world
        .resource_mut::<Messages<AudioMessage>>()
        .write(AudioMessage::MusicPlayFailed {
            id: "boteco_fm".into(),
            error: "track not loaded".into(),
        });
    let mut schedule = Schedule::default();
    schedule.add_systems(playback_feedback);
    schedule.run(&mut world);

    world.resource_mut::<PlaybackIntent>().request_play();
    run_reconcile(&mut world);
    let cmds = drain_cmds(&mut world);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(
        &cmds[0],
        AudioCmd::PlayMusic { looped: true, .. }
    ));
}

// ==================== FIRST INTERACTION ====================

#[test]
fn first_interaction_raises_intent_exactly_once() {
    let mut world = make_world();

    {
        let mut input = world.resource_mut::<InputState>();
        input.pointer_just_pressed = true;
    }
    let mut schedule = Schedule::default();
    schedule.add_systems(first_interaction_system);
    schedule.run(&mut world);
    assert!(world.resource::<PlaybackIntent>().is_playing());

    // The user pauses; a later interaction must not auto-resume.
    world.resource_mut::<PlaybackIntent>().request_stop();
    {
        let mut input = world.resource_mut::<InputState>();
        input.pointer_just_pressed = true;
        input.any_key_just_pressed = true;
    }
    let mut schedule = Schedule::default();
    schedule.add_systems(first_interaction_system);
    schedule.run(&mut world);
    assert!(!world.resource::<PlaybackIntent>().is_playing());
}

#[test]
fn frames_without_interaction_leave_the_guard_armed() {
    let mut world = make_world();

    let mut schedule = Schedule::default();
    schedule.add_systems(first_interaction_system);
    schedule.run(&mut world);
    assert!(!world.resource::<PlaybackIntent>().is_playing());
    assert!(!world.resource::<PlaybackIntent>().interaction_consumed());

    {
        let mut input = world.resource_mut::<InputState>();
        input.any_key_just_pressed = true;
    }
    let mut schedule = Schedule::default();
    schedule.add_systems(first_interaction_system);
    schedule.run(&mut world);
    assert!(world.resource::<PlaybackIntent>().is_playing());
    assert!(world.resource::<PlaybackIntent>().interaction_consumed());
}
