//! NEXTBOT Simulation Core
//!
//! Pursuit/encounter логика chase-хоррора на Bevy 0.16 ECS:
//! агент преследует цель, proximity chase music, поимка, aftermath
//! (stinger → jumpscare → счёт → reload уровня).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (encounter FSM, таймеры, решения)
//! - Движок = tactical layer (NavMesh, аудио, UI, загрузка сцен)

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod encounter;
pub mod logger;
pub mod navigation;

// Re-export базовых компонентов для удобства
pub use components::*;
pub use encounter::{
    AftermathStep, AgentTuning, ClipHandle, ConfigError, DistanceMode, EncounterAudio,
    EncounterConfig, EncounterEvent, EncounterPlugin, EncounterState, LevelReloadRequested,
    PursuitEncounterController, ScoreFormat,
};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter,
};
pub use navigation::HeadlessNavigationPlugin;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (aftermath таймеры на Time<Fixed>)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_plugins(EncounterPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Спавнит агента энкаунтера (PursuitEncounterController + required компоненты)
///
/// Невалидный конфиг → ConfigError, ничего не спавнится.
pub fn spawn_encounter(
    commands: &mut Commands,
    config: EncounterConfig,
    agent_position: Vec3,
) -> Result<Entity, ConfigError> {
    let controller = PursuitEncounterController::new(config)?;

    let entity = commands
        .spawn((controller, Transform::from_translation(agent_position)))
        .id();

    log_info(&format!("👹 Encounter spawned: {:?} at {:?}", entity, agent_position));
    Ok(entity)
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
