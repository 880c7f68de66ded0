//! Headless навигация (stand-in для NavMesh агента хоста)
//!
//! В игре путь строит навигация движка: она читает MovementCommand + NavigationTuning.
//! Для headless прогонов и тестов агент просто идёт по прямой к destination
//! со скоростью move_speed. turn_rate/deceleration тут не моделируются.

use bevy::prelude::*;

use crate::components::{MovementCommand, NavigationTuning};
use crate::encounter::systems::tick_encounters;

/// Headless Navigation Plugin
///
/// follow_movement_commands в FixedUpdate ДО tick_encounters
/// (энкаунтер видит позицию агента после движения в этом тике).
pub struct HeadlessNavigationPlugin;

impl Plugin for HeadlessNavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, follow_movement_commands.before(tick_encounters));
    }
}

/// Система: двигает агентов к MovementCommand::MoveToPosition
pub fn follow_movement_commands(
    mut agents: Query<(&mut Transform, &MovementCommand, &NavigationTuning)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, command, navigation) in agents.iter_mut() {
        let Some(target) = command.destination() else {
            continue;
        };

        // Тюнинг ещё не применён — навигация не знает скорость
        if !navigation.applied {
            continue;
        }

        transform.translation = step_towards(
            transform.translation,
            target,
            navigation.tuning.move_speed * delta,
        );
    }
}

/// Шаг по прямой к цели, без перелёта
pub fn step_towards(from: Vec3, to: Vec3, max_step: f32) -> Vec3 {
    let to_target = to - from;
    let distance = to_target.length();

    if distance <= max_step || distance < 0.001 {
        to
    } else {
        from + to_target / distance * max_step
    }
}
