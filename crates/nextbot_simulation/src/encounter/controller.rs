//! PursuitEncounterController — преследование, proximity audio, поимка.
//!
//! Один тик:
//! 0. survival time += delta, продвигаем aftermath таймеры, HUD таймер
//! 1. Re-path throttling (интервал + смещение цели > epsilon)
//! 2. Proximity audio toggle (один порог music_range, без debounce)
//! 3. Catch predicate (catch_range + grace period + опц. vertical tolerance)
//! 4. Переход Pursuing → Caught → Aftermath
//!
//! Нет цели (despawned) → шаги 1-4 пропускаются, pursuit просто idle.

use bevy::prelude::*;

use super::aftermath::AftermathSequencer;
use super::collaborators::{Collaborators, MissingCollaborators};
use super::components::{AftermathStep, EncounterConfig, EncounterState};
use super::error::ConfigError;
use crate::components::{AudioEmitter, MovementCommand, NavigationTuning};

/// Что произошло за тик (для событий ECS, логов и тестов)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Новый destination, если был выдан
    pub destination_issued: Option<Vec3>,
    pub audio_started: bool,
    pub audio_stopped: bool,
    /// Survival time, если поимка произошла в этот тик
    pub caught: Option<f64>,
    /// Шаги aftermath, в которые перешли за тик (по порядку)
    pub aftermath_steps: Vec<AftermathStep>,
    pub reload_requested: bool,
}

/// Контроллер одного энкаунтера (один агент, одна цель).
///
/// Живёт до reload уровня. После поимки в Pursuing не возвращается.
/// Автоматически добавляет Transform + навигацию + аудио источник через Required Components.
#[derive(Component, Debug, Clone)]
#[require(Transform, MovementCommand, NavigationTuning, AudioEmitter)]
pub struct PursuitEncounterController {
    config: EncounterConfig,
    state: EncounterState,
    has_triggered: bool,
    /// Монотонно растёт от старта энкаунтера, замерзает при поимке
    survival_time: f64,
    tuning_applied: bool,

    // Re-path throttling
    last_destination_update_time: Option<f64>,
    last_known_target_position: Option<Vec3>,

    /// Chase music запущена нами (stinger сюда не считается)
    chase_playing: bool,
    /// Последний показанный текст HUD таймера
    timer_text: Option<String>,

    aftermath: Option<AftermathSequencer>,
    missing: MissingCollaborators,
}

impl PursuitEncounterController {
    /// Создаёт контроллер. Невалидный конфиг отклоняется сразу.
    pub fn new(config: EncounterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            state: EncounterState::Pursuing,
            has_triggered: false,
            survival_time: 0.0,
            tuning_applied: false,
            last_destination_update_time: None,
            last_known_target_position: None,
            chase_playing: false,
            timer_text: None,
            aftermath: None,
            missing: MissingCollaborators::default(),
        })
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    pub fn survival_time(&self) -> f64 {
        self.survival_time
    }

    pub fn is_chase_audio_playing(&self) -> bool {
        self.chase_playing
    }

    pub fn aftermath(&self) -> Option<&AftermathSequencer> {
        self.aftermath.as_ref()
    }

    /// Один шаг симуляции.
    ///
    /// `target` — позиция цели (None = цели нет), `now` — монотонные часы
    /// (секунды), `delta` — длительность шага.
    pub fn tick(
        &mut self,
        target: Option<Vec3>,
        now: f64,
        delta: f32,
        io: &mut Collaborators,
    ) -> TickReport {
        let mut report = TickReport::default();

        if !self.tuning_applied {
            io.pathing.apply_tuning(&self.config.tuning);
            self.tuning_applied = true;
        }

        if !self.has_triggered {
            self.survival_time += delta.max(0.0) as f64;
        }

        self.advance_aftermath(now, io, &mut report);

        if !self.state.is_pursuing() {
            return report;
        }

        self.update_survival_timer(io);

        let Some(target) = target else {
            return report;
        };

        self.update_destination(target, now, io, &mut report);

        let agent = io.pathing.agent_position();
        let distance = self.config.distance_mode.distance(agent, target);

        self.update_proximity_audio(distance, io, &mut report);

        if self.catch_predicate(agent, target, distance) {
            self.trigger_catch(now, io, &mut report);
        }

        report
    }

    /// HUD таймер: пишем только когда текст изменился. После поимки не вызывается,
    /// так что на экране остаётся значение тика поимки.
    fn update_survival_timer(&mut self, io: &mut Collaborators) {
        let text = self.config.timer_format.format(self.survival_time);
        if self.timer_text.as_deref() == Some(text.as_str()) {
            return;
        }

        match io.presentation.as_deref_mut() {
            Some(presentation) => {
                presentation.show_survival_timer(&text);
                self.timer_text = Some(text);
            }
            None => self.missing.presentation("survival timer"),
        }
    }

    fn update_destination(
        &mut self,
        target: Vec3,
        now: f64,
        io: &mut Collaborators,
        report: &mut TickReport,
    ) {
        let interval_elapsed = self
            .last_destination_update_time
            .map_or(true, |last| now >= last + self.config.path_refresh_interval as f64);
        if !interval_elapsed {
            return;
        }

        let target_moved = match (self.config.position_epsilon, self.last_known_target_position) {
            (Some(epsilon), Some(last)) => last.distance(target) > epsilon,
            _ => true,
        };
        if !target_moved {
            return;
        }

        io.pathing.set_destination(target);
        self.last_destination_update_time = Some(now);
        self.last_known_target_position = Some(target);
        report.destination_issued = Some(target);
    }

    fn update_proximity_audio(
        &mut self,
        distance: f32,
        io: &mut Collaborators,
        report: &mut TickReport,
    ) {
        let Some(chase) = &self.config.audio.chase else {
            return;
        };
        let Some(audio) = io.audio.as_deref_mut() else {
            self.missing.audio("chase music");
            return;
        };

        // Хост мог остановить источник сам — тогда считаем что не играет
        let playing = self.chase_playing && audio.is_playing();

        if distance <= self.config.music_range && !playing {
            audio.play(chase, true);
            self.chase_playing = true;
            report.audio_started = true;
            crate::log(&format!("🎵 Chase music ON (distance {:.2})", distance));
        } else if playing && distance > self.config.music_range {
            audio.stop();
            self.chase_playing = false;
            report.audio_stopped = true;
            crate::log(&format!("🔇 Chase music OFF (distance {:.2})", distance));
        }
    }

    fn catch_predicate(&self, agent: Vec3, target: Vec3, distance: f32) -> bool {
        if distance > self.config.catch_range {
            return false;
        }
        if self.survival_time <= self.config.grace_duration as f64 {
            return false;
        }
        self.config
            .catch_vertical_tolerance
            .map_or(true, |tolerance| (agent.y - target.y).abs() <= tolerance)
    }

    fn trigger_catch(&mut self, now: f64, io: &mut Collaborators, report: &mut TickReport) {
        if self.has_triggered {
            return;
        }
        self.has_triggered = true;

        let survival_time = self.survival_time;
        self.state = EncounterState::Caught { survival_time };
        crate::log_info(&format!("🎯 Encounter: Pursuing → Caught (survival {:.2}s)", survival_time));

        // Chase music глушится в Step A
        self.chase_playing = false;
        report.caught = Some(survival_time);

        let sequencer = AftermathSequencer::start(now, survival_time, &self.config, io, &mut self.missing);
        self.state = EncounterState::Aftermath {
            step: sequencer.step(),
            survival_time,
        };
        report.aftermath_steps.push(sequencer.step());
        self.aftermath = Some(sequencer);

        // Нулевые задержки: C и D срабатывают в том же тике
        self.advance_aftermath(now, io, report);
    }

    fn advance_aftermath(&mut self, now: f64, io: &mut Collaborators, report: &mut TickReport) {
        let Some(sequencer) = self.aftermath.as_mut() else {
            return;
        };

        for step in sequencer.advance(now, io, &mut self.missing) {
            self.state = EncounterState::Aftermath {
                step,
                survival_time: sequencer.survival_time(),
            };
            if step == AftermathStep::RestartPending {
                report.reload_requested = true;
            }
            report.aftermath_steps.push(step);
        }
    }
}
