//! Тесты детерминизма энкаунтера
//!
//! Одинаковый seed + ManualDuration → идентичное состояние контроллеров и позиций

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use nextbot_simulation::encounter::systems::tick_encounters;
use nextbot_simulation::*;
use rand::Rng;

/// Цель дёргается случайно (seeded RNG)
fn jitter_targets(
    mut targets: Query<&mut Transform, With<PursuitTarget>>,
    mut rng: ResMut<DeterministicRng>,
) {
    for mut transform in targets.iter_mut() {
        transform.translation.x += rng.rng.gen_range(-0.3..0.3);
        transform.translation.z += rng.rng.gen_range(-0.3..0.3);
    }
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const AGENT_COUNT: usize = 10;
    const TICK_COUNT: usize = 600;

    let snapshot1 = run_simulation(SEED, AGENT_COUNT, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, AGENT_COUNT, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const AGENT_COUNT: usize = 10;
    const TICK_COUNT: usize = 600;

    let snapshots: Vec<_> = (0..3)
        .map(|_| run_simulation(SEED, AGENT_COUNT, TICK_COUNT))
        .collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

/// Запускает энкаунтеры и возвращает snapshot (контроллеры + позиции)
fn run_simulation(seed: u64, agent_count: usize, tick_count: usize) -> (Vec<u8>, Vec<u8>) {
    let mut app = create_headless_app(seed);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)))
        .add_plugins((SimulationPlugin, HeadlessNavigationPlugin))
        .add_systems(FixedUpdate, jitter_targets.before(tick_encounters));

    app.world_mut()
        .spawn((PursuitTarget, Transform::from_translation(Vec3::new(0.0, 0.0, 12.0))));

    for i in 0..agent_count {
        let config = EncounterConfig {
            grace_duration: 0.5 * i as f32,
            ..Default::default()
        };
        let controller = PursuitEncounterController::new(config).unwrap();
        app.world_mut().spawn((
            controller,
            Transform::from_translation(Vec3::new(i as f32 * 3.0 - 15.0, 0.0, -10.0)),
        ));
    }

    for _ in 0..tick_count {
        app.update();
    }

    let world = app.world_mut();
    (
        world_snapshot::<PursuitEncounterController>(world),
        world_snapshot::<Transform>(world),
    )
}
