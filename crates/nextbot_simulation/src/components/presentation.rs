//! Presentation state (HUD таймер + jumpscare + экран счёта)
//!
//! Один resource на весь мир, создаётся в composition root (plugin).
//! Несколько энкаунтеров одновременно → last writer wins (известное ограничение,
//! сценарий с несколькими агентами не поддерживается).

use bevy::prelude::*;

use crate::encounter::collaborators::Presentation;

#[derive(Resource, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PresentationState {
    /// HUD таймер выживания (замирает на поимке)
    pub survival_timer: Option<String>,
    pub jumpscare_visible: bool,
    /// Текст экрана счёта (None = экран скрыт)
    pub score_text: Option<String>,
}

impl PresentationState {
    /// Сброс при reload уровня
    pub fn clear(&mut self) {
        self.survival_timer = None;
        self.jumpscare_visible = false;
        self.score_text = None;
    }
}

impl Presentation for PresentationState {
    fn show_survival_timer(&mut self, text: &str) {
        self.survival_timer = Some(text.to_string());
    }

    fn show_jumpscare(&mut self) {
        self.jumpscare_visible = true;
    }

    fn show_score(&mut self, text: &str) {
        self.score_text = Some(text.to_string());
    }
}
