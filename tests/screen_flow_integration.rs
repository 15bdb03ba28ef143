//! Integration tests for the screen state machine: the loading auto-advance,
//! user-driven navigation, direction computation, and panel replacement.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use convite::components::dynamictext::DynamicText;
use convite::components::group::Group;
use convite::components::persistent::Persistent;
use convite::components::timer::Timer;
use convite::events::audio::{AudioCmd, AudioMessage};
use convite::events::navigation::observe_screen_change_event;
use convite::events::timer::loading_timer_observer;
use convite::game::{register_hooks, LOADING_SECONDS, PANEL_GROUP};
use convite::resources::input::InputState;
use convite::resources::invite::InviteContent;
use convite::resources::navigation::{Direction, NavigationState, NextScreen, Screen};
use convite::resources::playback::PlaybackIntent;
use convite::resources::screensize::ScreenSize;
use convite::resources::worldsignals::WorldSignals;
use convite::resources::worldtime::WorldTime;
use convite::systems::input::apply_input_actions;
use convite::systems::navigation::check_pending_screen;
use convite::systems::time::{update_timers, update_world_time};
use convite::systems::ttl::ttl_system;

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

/// Advance time and run the frame systems that matter for navigation.
fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems((update_timers, check_pending_screen, ttl_system).chain());
    schedule.run(world);
}

/// Enter the invite the way main() does: through the transition path.
fn boot(world: &mut World) {
    world.resource_mut::<NextScreen>().set(Screen::Loading);
    tick(world, 0.0);
}

/// Press one key for a frame and run the input policy plus the transition.
fn press(world: &mut World, set: impl FnOnce(&mut InputState)) {
    {
        let mut input = world.resource_mut::<InputState>();
        *input = InputState::default();
        set(&mut input);
    }
    let mut schedule = Schedule::default();
    schedule.add_systems((apply_input_actions, check_pending_screen).chain());
    schedule.run(world);
    *world.resource_mut::<InputState>() = InputState::default();
}

fn current(world: &mut World) -> (Screen, Direction) {
    let nav = world.resource::<NavigationState>();
    (nav.current(), nav.direction())
}

fn panel_texts(world: &mut World) -> Vec<String> {
    let mut query = world.query::<(&Group, &DynamicText)>();
    query
        .iter(world)
        .filter(|(group, _)| group.0 == PANEL_GROUP)
        .map(|(_, text)| text.content.clone())
        .collect()
}

#[test]
fn boot_lands_on_loading_with_a_pending_timer() {
    let mut world = make_world();
    boot(&mut world);

    assert_eq!(current(&mut world).0, Screen::Loading);
    let mut timers = world.query::<&Timer>();
    let timers: Vec<_> = timers.iter(&world).collect();
    assert_eq!(timers.len(), 1);
    assert_eq!(timers[0].duration, LOADING_SECONDS);
    assert!(!world.resource::<PlaybackIntent>().is_playing());
}

#[test]
fn loading_advances_to_intro_exactly_once_and_raises_intent() {
    let mut world = make_world();
    boot(&mut world);

    // Just before the delay: still loading, still silent.
    tick(&mut world, LOADING_SECONDS - 0.1);
    assert_eq!(current(&mut world).0, Screen::Loading);
    assert!(!world.resource::<PlaybackIntent>().is_playing());

    // Delay elapses: the timer fires, the next tick applies the transition.
    tick(&mut world, 0.1);
    tick(&mut world, 0.0);
    let (screen, direction) = current(&mut world);
    assert_eq!(screen, Screen::Intro);
    assert_eq!(direction, Direction::Forward);
    assert!(world.resource::<PlaybackIntent>().is_playing());

    // The timer entity is gone, so nothing fires again.
    let mut timers = world.query::<&Timer>();
    assert_eq!(timers.iter(&world).count(), 0);
    tick(&mut world, LOADING_SECONDS * 2.0);
    assert_eq!(current(&mut world).0, Screen::Intro);
}

#[test]
fn start_moves_forward_and_back_mirrors() {
    let mut world = make_world();
    boot(&mut world);
    tick(&mut world, LOADING_SECONDS);
    tick(&mut world, 0.0);
    assert_eq!(current(&mut world).0, Screen::Intro);

    press(&mut world, |input| input.start.just_pressed = true);
    assert_eq!(current(&mut world), (Screen::Theme, Direction::Forward));

    press(&mut world, |input| input.back.just_pressed = true);
    assert_eq!(current(&mut world), (Screen::Intro, Direction::Backward));
}

#[test]
fn full_walk_forward_then_one_back() {
    let mut world = make_world();
    boot(&mut world);
    tick(&mut world, LOADING_SECONDS);
    tick(&mut world, 0.0);
    assert_eq!(current(&mut world).0, Screen::Intro);

    // Five forward steps from the intro land on the final screen, each
    // reporting a forward direction.
    let expected = [
        Screen::Theme,
        Screen::Attractions,
        Screen::Food,
        Screen::Experiences,
        Screen::Location,
    ];
    for screen in expected {
        press(&mut world, |input| input.advance.just_pressed = true);
        assert_eq!(current(&mut world), (screen, Direction::Forward));
    }

    // The final screen has no forward target.
    press(&mut world, |input| input.advance.just_pressed = true);
    assert_eq!(current(&mut world).0, Screen::Location);

    press(&mut world, |input| input.back.just_pressed = true);
    assert_eq!(current(&mut world), (Screen::Experiences, Direction::Backward));
}

#[test]
fn loading_ignores_user_input() {
    let mut world = make_world();
    boot(&mut world);

    press(&mut world, |input| input.advance.just_pressed = true);
    press(&mut world, |input| input.start.just_pressed = true);
    press(&mut world, |input| input.back.just_pressed = true);
    assert_eq!(current(&mut world).0, Screen::Loading);
}

#[test]
fn panels_are_replaced_on_each_transition() {
    let mut world = make_world();
    boot(&mut world);
    tick(&mut world, LOADING_SECONDS);
    tick(&mut world, 0.0);

    press(&mut world, |input| input.start.just_pressed = true);
    let texts = panel_texts(&mut world);
    assert!(texts.iter().any(|t| t.contains("O Tema É:")));

    press(&mut world, |input| input.advance.just_pressed = true);
    let texts = panel_texts(&mut world);
    assert!(texts.iter().any(|t| t.contains("Atrações")));
    assert!(!texts.iter().any(|t| t.contains("O Tema É:")));
}

#[test]
fn start_raises_playback_intent_even_after_a_rollback() {
    let mut world = make_world();
    boot(&mut world);
    tick(&mut world, LOADING_SECONDS);
    tick(&mut world, 0.0);

    // Pretend the auto-start was rejected meanwhile.
    world.resource_mut::<PlaybackIntent>().reject();
    assert!(!world.resource::<PlaybackIntent>().is_playing());

    press(&mut world, |input| input.start.just_pressed = true);
    assert_eq!(current(&mut world).0, Screen::Theme);
    assert!(world.resource::<PlaybackIntent>().is_playing());
}

#[test]
fn quit_key_sets_the_quit_flag() {
    let mut world = make_world();
    boot(&mut world);

    press(&mut world, |input| input.quit.just_pressed = true);
    assert!(world.resource::<WorldSignals>().has_flag("quit_game"));
}
