//! Аудио источник агента (ECS сторона AudioDevice)
//!
//! ECS пишет что должно играть, аудио движок хоста читает Changed<AudioEmitter>.
//! One-shot клип хост сбрасывает сам (`finish_one_shot`) когда тот доиграл.

use bevy::prelude::*;

use crate::encounter::collaborators::AudioDevice;
use crate::encounter::components::ClipHandle;

/// Что сейчас играет источник
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct PlayingClip {
    pub clip: ClipHandle,
    pub looped: bool,
}

#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct AudioEmitter {
    pub current: Option<PlayingClip>,
}

impl AudioEmitter {
    /// Хост: one-shot клип доиграл
    pub fn finish_one_shot(&mut self) {
        if matches!(&self.current, Some(playing) if !playing.looped) {
            self.current = None;
        }
    }
}

impl AudioDevice for AudioEmitter {
    fn play(&mut self, clip: &ClipHandle, looped: bool) {
        self.current = Some(PlayingClip {
            clip: clip.clone(),
            looped,
        });
    }

    fn stop(&mut self) {
        self.current = None;
    }

    fn is_playing(&self) -> bool {
        self.current.is_some()
    }
}
