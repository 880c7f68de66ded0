//! One-shot таймеры на монотонных часах симуляции.
//!
//! Аналог engine "invoke after N seconds", но без callbacks: владелец проверяет
//! `is_due(now)` каждый тик. Часы — любые монотонные секунды (`Time<Fixed>`
//! в ECS, ручной счётчик в тестах).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneShotTimer {
    due_at: f64,
}

impl OneShotTimer {
    /// Таймер, срабатывающий через `delay` секунд после `now`
    pub fn after(now: f64, delay: f32) -> Self {
        Self {
            due_at: now + delay as f64,
        }
    }

    /// Следующий таймер в цепочке: отсчёт от due time этого таймера,
    /// а не от фактического тика срабатывания (jitter не накапливается)
    pub fn chain(&self, delay: f32) -> Self {
        Self::after(self.due_at, delay)
    }

    pub fn due_at(&self) -> f64 {
        self.due_at
    }

    pub fn is_due(&self, now: f64) -> bool {
        now >= self.due_at
    }
}
