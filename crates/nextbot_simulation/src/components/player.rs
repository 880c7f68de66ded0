//! Pursuit target marker component
//!
//! Отмечает entity за которым гонится агент (обычно игрок).

use bevy::prelude::Component;

/// Marker component для цели преследования
///
/// Encounter система берёт позицию первого entity с этим компонентом.
/// Нет такого entity (despawned / ещё не заспавнен) → тик энкаунтера idle.
///
/// # Single-player
/// В single-player режиме только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PursuitTarget;
