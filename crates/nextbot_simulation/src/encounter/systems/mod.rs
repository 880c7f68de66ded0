//! Encounter systems (ECS adapters + tick)

pub mod adapters;
pub mod tick;

// Re-export all systems
pub use adapters::*;
pub use tick::*;
