//! Pursuit encounter module
//!
//! Агент преследует цель, включает chase music по близости, ловит цель
//! (после grace period) и прогоняет aftermath: stinger → jumpscare → счёт → reload.
//!
//! Ядро (`controller`, `aftermath`) не зависит от ECS — работает через
//! collaborator trait'ы и монотонные часы. ECS обвязка — `systems`.

use bevy::prelude::*;

pub mod aftermath;
pub mod collaborators;
pub mod components;
pub mod controller;
pub mod error;
pub mod events;
pub mod systems;
pub mod timer;

#[cfg(test)]
mod test_fakes;

// Re-export основных типов
pub use aftermath::AftermathSequencer;
pub use collaborators::{AudioDevice, Collaborators, LevelControl, PathingProvider, Presentation};
pub use components::{
    AftermathStep, AgentTuning, ClipHandle, DistanceMode, EncounterAudio, EncounterConfig,
    EncounterState, ScoreFormat,
};
pub use controller::{PursuitEncounterController, TickReport};
pub use error::ConfigError;
pub use events::{EncounterEvent, LevelReloadRequested};

/// Encounter Plugin
///
/// Регистрирует tick_encounters в FixedUpdate (детерминированные aftermath таймеры).
/// PresentationState — один на мир (composition root).
pub struct EncounterPlugin;

impl Plugin for EncounterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::components::PresentationState>()
            .register_type::<EncounterConfig>()
            .register_type::<crate::components::PresentationState>()
            .add_event::<EncounterEvent>()
            .add_event::<LevelReloadRequested>()
            .add_systems(FixedUpdate, systems::tick_encounters);
    }
}
