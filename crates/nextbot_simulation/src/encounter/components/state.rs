//! Encounter FSM состояния.
//!
//! Pursuing → Caught → Aftermath { StingerPlaying → ScoreShown → RestartPending }
//!
//! Переходы только вперёд. Назад в Pursuing — только через reload уровня
//! (новый экземпляр контроллера).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Шаги aftermath последовательности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum AftermathStep {
    /// Stinger играет, jumpscare показан, ждём aftermath_stinger_delay
    StingerPlaying,
    /// Счёт показан, ждём score_display_duration
    ScoreShown,
    /// Reload уровня запрошен, ждём пока хост уничтожит энкаунтер
    RestartPending,
}

impl AftermathStep {
    /// Следующий шаг (None для терминального RestartPending)
    pub fn next(self) -> Option<Self> {
        match self {
            AftermathStep::StingerPlaying => Some(AftermathStep::ScoreShown),
            AftermathStep::ScoreShown => Some(AftermathStep::RestartPending),
            AftermathStep::RestartPending => None,
        }
    }
}

/// Состояние энкаунтера
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub enum EncounterState {
    /// Преследование: re-path, proximity audio, catch checks (с grace period)
    #[default]
    Pursuing,

    /// Поимка засчитана. Живёт внутри одного тика — дальше сразу Aftermath
    Caught {
        /// Survival time на момент поимки (секунды)
        survival_time: f64,
    },

    /// Скриптовая последовательность после поимки
    Aftermath {
        step: AftermathStep,
        survival_time: f64,
    },
}

impl EncounterState {
    pub fn is_pursuing(&self) -> bool {
        matches!(self, EncounterState::Pursuing)
    }

    /// Survival time, замороженный в момент поимки
    pub fn survival_time(&self) -> Option<f64> {
        match self {
            EncounterState::Pursuing => None,
            EncounterState::Caught { survival_time }
            | EncounterState::Aftermath { survival_time, .. } => Some(*survival_time),
        }
    }

    pub fn aftermath_step(&self) -> Option<AftermathStep> {
        match self {
            EncounterState::Aftermath { step, .. } => Some(*step),
            _ => None,
        }
    }
}
