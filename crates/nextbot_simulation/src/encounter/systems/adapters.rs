//! ECS реализации collaborators.
//!
//! Pathing: Transform агента + MovementCommand/NavigationTuning (intent для навигации хоста)
//! Audio: AudioEmitter (impl в components::audio), через Mut — Changed только при записи
//! Presentation: PresentationState resource (impl в components::presentation), так же
//! Level: буфер запроса → LevelReloadRequested event после тика

use bevy::prelude::*;

use crate::components::{AudioEmitter, MovementCommand, NavigationTuning, PresentationState};
use crate::encounter::collaborators::{AudioDevice, LevelControl, PathingProvider, Presentation};
use crate::encounter::components::{AgentTuning, ClipHandle};

/// Pathing поверх ECS компонентов агента
pub struct EcsPathing<'a> {
    pub position: Vec3,
    pub command: Mut<'a, MovementCommand>,
    pub tuning: Mut<'a, NavigationTuning>,
}

impl PathingProvider for EcsPathing<'_> {
    fn apply_tuning(&mut self, tuning: &AgentTuning) {
        self.tuning.tuning = *tuning;
        self.tuning.applied = true;
    }

    fn set_destination(&mut self, position: Vec3) {
        // Не перезаписываем ту же команду — иначе Changed<MovementCommand> спамит
        if self.command.destination() != Some(position) {
            *self.command = MovementCommand::MoveToPosition { target: position };
        }
    }

    fn agent_position(&self) -> Vec3 {
        self.position
    }
}

/// AudioEmitter агента без лишних Changed<AudioEmitter> (is_playing только читает)
pub struct EcsAudio<'a> {
    pub emitter: Mut<'a, AudioEmitter>,
}

impl AudioDevice for EcsAudio<'_> {
    fn play(&mut self, clip: &ClipHandle, looped: bool) {
        self.emitter.play(clip, looped);
    }

    fn stop(&mut self) {
        self.emitter.stop();
    }

    fn is_playing(&self) -> bool {
        self.emitter.is_playing()
    }
}

/// PresentationState resource на время одного тика
pub struct EcsPresentation<'a> {
    pub state: Mut<'a, PresentationState>,
}

impl Presentation for EcsPresentation<'_> {
    fn show_survival_timer(&mut self, text: &str) {
        self.state.show_survival_timer(text);
    }

    fn show_jumpscare(&mut self) {
        self.state.show_jumpscare();
    }

    fn show_score(&mut self, text: &str) {
        self.state.show_score(text);
    }
}

/// Level control: копит запрос, система потом пишет LevelReloadRequested
#[derive(Debug, Default)]
pub struct ReloadRequest {
    pub requested: bool,
}

impl LevelControl for ReloadRequest {
    fn reload_current_level(&mut self) {
        self.requested = true;
    }
}
