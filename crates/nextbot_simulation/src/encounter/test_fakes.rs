//! Recording fakes для collaborators (unit tests).

use bevy::prelude::Vec3;

use super::collaborators::{AudioDevice, LevelControl, PathingProvider, Presentation};
use super::components::{AgentTuning, ClipHandle};

#[derive(Debug, Default)]
pub struct FakePathing {
    pub position: Vec3,
    pub destinations: Vec<Vec3>,
    pub tuning_calls: Vec<AgentTuning>,
}

impl PathingProvider for FakePathing {
    fn apply_tuning(&mut self, tuning: &AgentTuning) {
        self.tuning_calls.push(*tuning);
    }

    fn set_destination(&mut self, position: Vec3) {
        self.destinations.push(position);
    }

    fn agent_position(&self) -> Vec3 {
        self.position
    }
}

#[derive(Debug, Default)]
pub struct FakeAudio {
    pub playing: Option<(ClipHandle, bool)>,
    pub plays: Vec<(ClipHandle, bool)>,
    pub stops: usize,
}

impl FakeAudio {
    /// Играет ли сейчас looped клип (chase music)
    pub fn is_playing_chase(&self) -> bool {
        matches!(&self.playing, Some((_, true)))
    }
}

impl AudioDevice for FakeAudio {
    fn play(&mut self, clip: &ClipHandle, looped: bool) {
        self.playing = Some((clip.clone(), looped));
        self.plays.push((clip.clone(), looped));
    }

    fn stop(&mut self) {
        self.playing = None;
        self.stops += 1;
    }

    fn is_playing(&self) -> bool {
        self.playing.is_some()
    }
}

#[derive(Debug, Default)]
pub struct FakePresentation {
    pub timers: Vec<String>,
    pub jumpscare_calls: usize,
    pub scores: Vec<String>,
}

impl Presentation for FakePresentation {
    fn show_survival_timer(&mut self, text: &str) {
        self.timers.push(text.to_string());
    }

    fn show_jumpscare(&mut self) {
        self.jumpscare_calls += 1;
    }

    fn show_score(&mut self, text: &str) {
        self.scores.push(text.to_string());
    }
}

#[derive(Debug, Default)]
pub struct FakeLevel {
    pub reloads: usize,
}

impl LevelControl for FakeLevel {
    fn reload_current_level(&mut self) {
        self.reloads += 1;
    }
}

/// Все fakes разом
#[derive(Debug, Default)]
pub struct FakeWorld {
    pub pathing: FakePathing,
    pub audio: FakeAudio,
    pub presentation: FakePresentation,
    pub level: FakeLevel,
}
