//! Movement компоненты: команды навигации и тюнинг агента

use bevy::prelude::*;

use crate::encounter::components::AgentTuning;

/// Команда движения для агента (выполняется навигацией хоста)
///
/// Архитектура:
/// - Encounter система пишет MovementCommand (high-level intent)
/// - Навигация хоста читает Changed<MovementCommand> и строит путь
/// - Headless: `navigation::follow_movement_commands` двигает Transform напрямую
#[derive(Component, Debug, Clone, PartialEq)]
pub enum MovementCommand {
    /// Стоять на месте
    Idle,
    /// Двигаться к позиции (world coordinates)
    MoveToPosition { target: Vec3 },
}

impl Default for MovementCommand {
    fn default() -> Self {
        Self::Idle
    }
}

impl MovementCommand {
    pub fn destination(&self) -> Option<Vec3> {
        match self {
            MovementCommand::MoveToPosition { target } => Some(*target),
            MovementCommand::Idle => None,
        }
    }
}

/// Тюнинг локомоции для навигации хоста (speed / angular speed / acceleration)
///
/// Пишется encounter'ом один раз при init (PathingProvider::apply_tuning).
/// `applied == false` — навигация ещё не получила тюнинг.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct NavigationTuning {
    pub tuning: AgentTuning,
    pub applied: bool,
}
