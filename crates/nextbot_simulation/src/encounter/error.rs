//! Ошибки энкаунтера (только конфиг — runtime ошибок игроку не показываем).

use thiserror::Error;

/// Невалидный `EncounterConfig`, отклоняется при создании контроллера
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("range `{field}` must be non-negative, got {value}")]
    NegativeRange { field: &'static str, value: f32 },

    #[error("duration `{field}` must be non-negative, got {value}")]
    NegativeDuration { field: &'static str, value: f32 },

    #[error("tuning `{field}` must be non-negative, got {value}")]
    NegativeTuning { field: &'static str, value: f32 },

    #[error("`{field}` must be a finite number")]
    NonFinite { field: &'static str },
}
