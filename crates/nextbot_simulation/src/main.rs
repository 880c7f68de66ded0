//! Headless симуляция NEXTBOT
//!
//! Агент гонится за случайно блуждающей целью (seeded RNG), ловит её,
//! прогоняет aftermath и перезапускает уровень. Composition root: тут живут
//! PresentationState (через plugin) и обработка LevelReloadRequested.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::Rng;

use nextbot_simulation::{
    create_headless_app, set_log_level, spawn_encounter, AftermathStep, AgentTuning, AudioEmitter,
    ClipHandle, DeterministicRng, EncounterConfig, EncounterEvent, HeadlessNavigationPlugin,
    LevelReloadRequested, LogLevel, PresentationState, PursuitEncounterController, PursuitTarget,
    SimulationPlugin,
};

const TICKS: usize = 60 * 120; // 2 минуты симуляции @ 60Hz

/// Блуждающая цель (заменяет player input в headless)
#[derive(Component, Debug)]
struct Wanderer {
    speed: f32,
    heading: Vec3,
    turn_timer: f32,
}

/// Счётчик перезапусков уровня
#[derive(Resource, Default)]
struct LevelCounter {
    loaded: u32,
}

fn level_config() -> EncounterConfig {
    EncounterConfig {
        grace_duration: 2.0,
        tuning: AgentTuning {
            move_speed: 3.5,
            ..Default::default()
        },
        ..Default::default()
    }
    .with_audio(
        Some(ClipHandle::new("res://audio/chase_music.ogg")),
        Some(ClipHandle::new("res://audio/jumpscare.ogg")),
    )
}

fn spawn_level(commands: &mut Commands, counter: &mut LevelCounter) {
    counter.loaded += 1;

    if let Err(err) = spawn_encounter(commands, level_config(), Vec3::ZERO) {
        nextbot_simulation::log_error(&format!("Level {}: invalid encounter config: {}", counter.loaded, err));
        return;
    }

    commands.spawn((
        PursuitTarget,
        Transform::from_translation(Vec3::new(25.0, 0.0, 0.0)),
        Wanderer {
            speed: 2.5,
            heading: Vec3::X,
            turn_timer: 0.0,
        },
    ));
}

fn setup_level(mut commands: Commands, mut counter: ResMut<LevelCounter>) {
    spawn_level(&mut commands, &mut counter);
}

/// Система: случайное блуждание цели (seeded → детерминированно)
fn wander_targets(
    mut targets: Query<(&mut Transform, &mut Wanderer)>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, mut wanderer) in targets.iter_mut() {
        wanderer.turn_timer -= delta;
        if wanderer.turn_timer <= 0.0 {
            let angle = rng.rng.gen::<f32>() * std::f32::consts::TAU;
            wanderer.heading = Vec3::new(angle.cos(), 0.0, angle.sin());
            wanderer.turn_timer = 1.0 + rng.rng.gen::<f32>() * 2.0;
        }
        transform.translation += wanderer.heading * wanderer.speed * delta;
    }
}

/// Система: reload уровня — уничтожаем энкаунтер целиком и создаём заново
fn restart_level(
    mut reloads: EventReader<LevelReloadRequested>,
    mut commands: Commands,
    encounters: Query<Entity, With<PursuitEncounterController>>,
    targets: Query<Entity, With<PursuitTarget>>,
    mut presentation: ResMut<PresentationState>,
    mut counter: ResMut<LevelCounter>,
) {
    if reloads.read().count() == 0 {
        return;
    }

    for entity in encounters.iter().chain(targets.iter()) {
        commands.entity(entity).despawn();
    }
    presentation.clear();

    spawn_level(&mut commands, &mut counter);
    println!("Level reloaded (#{})", counter.loaded);
}

fn report_events(
    mut events: EventReader<EncounterEvent>,
    presentation: Res<PresentationState>,
    mut emitters: Query<&mut AudioEmitter>,
) {
    for event in events.read() {
        match event {
            EncounterEvent::Caught { encounter, survival_time } => {
                println!(
                    "Caught by {:?} after {:.2}s (HUD: {:?})",
                    encounter, survival_time, presentation.survival_timer
                );
            }
            EncounterEvent::AftermathAdvanced { encounter, step } => {
                // Headless аудио: stinger считаем доигравшим к экрану счёта
                if *step == AftermathStep::ScoreShown {
                    if let Ok(mut emitter) = emitters.get_mut(*encounter) {
                        emitter.finish_one_shot();
                    }
                }
                println!(
                    "Aftermath → {:?} (jumpscare: {}, score: {:?})",
                    step, presentation.jumpscare_visible, presentation.score_text
                );
            }
        }
    }
}

fn main() {
    let seed = 42;
    println!("Starting NEXTBOT headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    set_log_level(LogLevel::Info); // Debug (chase music on/off) слишком шумный для 2 минут
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)))
        .init_resource::<LevelCounter>()
        .add_plugins((SimulationPlugin, HeadlessNavigationPlugin))
        .add_systems(Startup, setup_level)
        .add_systems(FixedUpdate, wander_targets)
        .add_systems(Update, (report_events, restart_level).chain());

    for tick in 0..TICKS {
        app.update();

        if tick % 600 == 0 {
            let world = app.world_mut();
            let states: Vec<_> = world
                .query::<&PursuitEncounterController>()
                .iter(world)
                .map(|controller| controller.state())
                .collect();
            println!("Tick {}: {:?}", tick, states);
        }
    }

    let levels = app.world().resource::<LevelCounter>().loaded;
    println!("Simulation complete! Levels loaded: {}", levels);
}
