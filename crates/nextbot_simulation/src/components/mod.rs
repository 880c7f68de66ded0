//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - movement: навигация агента (MovementCommand, NavigationTuning)
//! - player: цель преследования (PursuitTarget)
//! - audio: аудио источник агента (AudioEmitter)
//! - presentation: jumpscare / экран счёта (PresentationState resource)
//!
//! Encounter FSM/config живут в crate::encounter::components.

pub mod movement;
pub mod player;
pub mod audio;
pub mod presentation;

// Re-exports для удобного импорта
pub use movement::*;
pub use player::*;
pub use audio::*;
pub use presentation::*;
