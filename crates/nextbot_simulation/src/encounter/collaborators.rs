//! Внешние collaborators энкаунтера.
//!
//! Контроллер не знает про NavMesh, аудио движок или UI — только эти trait'ы.
//! ECS реализации: `encounter::systems::adapters`.

use bevy::prelude::Vec3;

use super::components::{AgentTuning, ClipHandle};

/// Навигация агента (path planning живёт на стороне хоста)
pub trait PathingProvider {
    /// Применить тюнинг локомоции (вызывается один раз при init)
    fn apply_tuning(&mut self, tuning: &AgentTuning);

    fn set_destination(&mut self, position: Vec3);

    /// Текущая world позиция агента
    fn agent_position(&self) -> Vec3;
}

/// Аудио источник агента
pub trait AudioDevice {
    fn play(&mut self, clip: &ClipHandle, looped: bool);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Presentation layer (HUD таймер, jumpscare, экран счёта). Вызовы идемпотентны.
pub trait Presentation {
    /// Live таймер выживания (обновляется пока идёт погоня)
    fn show_survival_timer(&mut self, text: &str);
    fn show_jumpscare(&mut self);
    fn show_score(&mut self, text: &str);
}

/// Жизненный цикл уровня
pub trait LevelControl {
    fn reload_current_level(&mut self);
}

/// Collaborators на один тик.
///
/// Pathing обязателен (позиция агента берётся из него), остальные опциональны:
/// отсутствие одного не блокирует эффекты других.
pub struct Collaborators<'a> {
    pub pathing: &'a mut dyn PathingProvider,
    pub audio: Option<&'a mut dyn AudioDevice>,
    pub presentation: Option<&'a mut dyn Presentation>,
    pub level: Option<&'a mut dyn LevelControl>,
}

impl<'a> Collaborators<'a> {
    /// Только pathing, без опциональных эффектов
    pub fn new(pathing: &'a mut dyn PathingProvider) -> Self {
        Self {
            pathing,
            audio: None,
            presentation: None,
            level: None,
        }
    }

    pub fn with_audio(mut self, audio: &'a mut dyn AudioDevice) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_presentation(mut self, presentation: &'a mut dyn Presentation) -> Self {
        self.presentation = Some(presentation);
        self
    }

    pub fn with_level(mut self, level: &'a mut dyn LevelControl) -> Self {
        self.level = Some(level);
        self
    }
}

/// Трекинг отсутствующих collaborators: warning в лог один раз на collaborator,
/// чтобы не спамить каждый тик.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingCollaborators {
    audio_warned: bool,
    presentation_warned: bool,
    level_warned: bool,
}

impl MissingCollaborators {
    pub fn audio(&mut self, effect: &str) {
        if !self.audio_warned {
            self.audio_warned = true;
            crate::log_warning(&format!("Encounter: no audio device, skipping {}", effect));
        }
    }

    pub fn presentation(&mut self, effect: &str) {
        if !self.presentation_warned {
            self.presentation_warned = true;
            crate::log_warning(&format!("Encounter: no presentation, skipping {}", effect));
        }
    }

    pub fn level(&mut self) {
        if !self.level_warned {
            self.level_warned = true;
            crate::log_warning("Encounter: no level control, reload skipped");
        }
    }
}
