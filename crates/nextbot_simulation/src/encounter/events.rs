//! Encounter Events — события для хоста (UI, аудио, scene management)
//!
//! ECS tick_encounters → EncounterEvent / LevelReloadRequested → хост

use bevy::prelude::*;

use super::components::AftermathStep;

/// Переходы энкаунтера (для UI/телеметрии хоста)
#[derive(Event, Debug, Clone, PartialEq)]
pub enum EncounterEvent {
    /// Агент поймал цель
    Caught {
        /// Entity агента (владелец PursuitEncounterController)
        encounter: Entity,
        /// Survival time на момент поимки (секунды)
        survival_time: f64,
    },

    /// Aftermath перешёл на следующий шаг
    AftermathAdvanced {
        encounter: Entity,
        step: AftermathStep,
    },
}

/// Запрос перезагрузки уровня (Step D aftermath)
///
/// Хост уничтожает энкаунтер целиком и создаёт новый — единственный путь
/// обратно в Pursuing.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelReloadRequested {
    pub encounter: Entity,
}
