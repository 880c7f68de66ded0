//! Encounter components (config, FSM state)

pub mod config;
pub mod state;


// Re-export all components
pub use config::*;
pub use state::*;
