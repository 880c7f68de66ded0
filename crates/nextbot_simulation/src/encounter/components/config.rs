//! Конфиг энкаунтера: дистанции, тайминги, тюнинг агента, аудио клипы.
//!
//! Все значения задаются один раз при создании энкаунтера и не меняются
//! до перезагрузки уровня. Валидация — `EncounterConfig::validate()`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::encounter::error::ConfigError;

/// Ссылка на аудио ассет (путь ресурса на стороне хоста)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub struct ClipHandle(pub String);

impl ClipHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Аудио клипы энкаунтера. Оба опциональны: нет клипа — эффект пропускается.
#[derive(Debug, Clone, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct EncounterAudio {
    /// Chase music (loop), включается по proximity
    pub chase: Option<ClipHandle>,
    /// One-shot stinger при поимке
    pub stinger: Option<ClipHandle>,
}

/// Тюнинг локомоции агента — передаётся pathing provider'у один раз при init
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct AgentTuning {
    /// Скорость движения (m/s)
    pub move_speed: f32,
    /// Скорость поворота (deg/s), большое значение = резкие развороты
    pub turn_rate: f32,
    /// Торможение/ускорение (m/s²)
    pub deceleration: f32,
}

impl Default for AgentTuning {
    fn default() -> Self {
        Self {
            move_speed: 3.5,
            turn_rate: 1000.0,
            deceleration: 8.0,
        }
    }
}

/// Как считать дистанцию агент ↔ цель
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum DistanceMode {
    /// Полная 3D дистанция
    #[default]
    Spatial,
    /// Дистанция в плоскости XZ (Y — вверх)
    Planar,
}

impl DistanceMode {
    pub fn distance(self, a: Vec3, b: Vec3) -> f32 {
        match self {
            DistanceMode::Spatial => a.distance(b),
            DistanceMode::Planar => Vec2::new(a.x, a.z).distance(Vec2::new(b.x, b.z)),
        }
    }
}

/// Формат survival time для экрана счёта
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum ScoreFormat {
    /// Целые секунды, дробная часть отбрасывается (12.7 → "12")
    #[default]
    Truncate,
    /// Округление до целых секунд (12.7 → "13")
    Round,
    /// Фиксированное число знаков после запятой (F2: 12.7 → "12.70")
    Fixed(u8),
}

impl ScoreFormat {
    pub fn format(self, survival_time: f64) -> String {
        match self {
            ScoreFormat::Truncate => format!("{}", survival_time.trunc() as u64),
            ScoreFormat::Round => format!("{}", survival_time.round() as u64),
            ScoreFormat::Fixed(decimals) => {
                format!("{:.*}", decimals as usize, survival_time)
            }
        }
    }
}

/// Параметры энкаунтера (immutable на время жизни контроллера, владеет контроллер)
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
pub struct EncounterConfig {
    /// Дистанция включения/выключения chase music (один порог, без debounce)
    pub music_range: f32,
    /// Дистанция поимки
    pub catch_range: f32,
    /// Макс. разница по Y, при которой поимка засчитывается. None = без проверки
    pub catch_vertical_tolerance: Option<f32>,
    /// Время от старта энкаунтера, в течение которого поимка подавлена (секунды)
    pub grace_duration: f32,
    /// Задержка между поимкой и экраном счёта (секунды)
    pub aftermath_stinger_delay: f32,
    /// Сколько висит экран счёта до перезагрузки уровня (секунды)
    pub score_display_duration: f32,
    /// Минимальный интервал между set_destination (секунды)
    pub path_refresh_interval: f32,
    /// Минимальное смещение цели для нового set_destination. None = только по времени
    pub position_epsilon: Option<f32>,
    pub distance_mode: DistanceMode,
    pub score_format: ScoreFormat,
    /// Формат live таймера выживания в HUD
    pub timer_format: ScoreFormat,
    pub tuning: AgentTuning,
    pub audio: EncounterAudio,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            music_range: 10.0,
            catch_range: 2.0,
            catch_vertical_tolerance: Some(3.0),
            grace_duration: 1.0,
            aftermath_stinger_delay: 1.0,
            score_display_duration: 3.0,
            path_refresh_interval: 0.2,
            position_epsilon: Some(0.1),
            distance_mode: DistanceMode::Spatial,
            score_format: ScoreFormat::Truncate,
            timer_format: ScoreFormat::Fixed(2),
            tuning: AgentTuning::default(),
            audio: EncounterAudio::default(),
        }
    }
}

impl EncounterConfig {
    /// Проверяет что все ranges/durations конечны и неотрицательны
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("music_range", self.music_range)?;
        check_range("catch_range", self.catch_range)?;
        if let Some(tolerance) = self.catch_vertical_tolerance {
            check_range("catch_vertical_tolerance", tolerance)?;
        }
        if let Some(epsilon) = self.position_epsilon {
            check_range("position_epsilon", epsilon)?;
        }

        check_duration("grace_duration", self.grace_duration)?;
        check_duration("aftermath_stinger_delay", self.aftermath_stinger_delay)?;
        check_duration("score_display_duration", self.score_display_duration)?;
        check_duration("path_refresh_interval", self.path_refresh_interval)?;

        check_tuning("move_speed", self.tuning.move_speed)?;
        check_tuning("turn_rate", self.tuning.turn_rate)?;
        check_tuning("deceleration", self.tuning.deceleration)?;

        Ok(())
    }

    /// Builder-хелпер для тестов и спавна
    pub fn with_audio(mut self, chase: Option<ClipHandle>, stinger: Option<ClipHandle>) -> Self {
        self.audio = EncounterAudio { chase, stinger };
        self
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn check_range(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::NegativeRange { field, value });
    }
    Ok(())
}

fn check_duration(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::NegativeDuration { field, value });
    }
    Ok(())
}

fn check_tuning(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::NegativeTuning { field, value });
    }
    Ok(())
}
