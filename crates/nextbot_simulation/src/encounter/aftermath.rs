//! Aftermath sequencer — линейная цепочка после поимки.
//!
//! A (сразу): stop chase audio → one-shot stinger
//! B (сразу): jumpscare
//! C (+aftermath_stinger_delay): экран счёта с survival time
//! D (+score_display_duration от C): reload уровня
//!
//! Цепочка не отменяется и не ставится на паузу. Выход — только reload.

use super::collaborators::{Collaborators, MissingCollaborators};
use super::components::{AftermathStep, EncounterConfig};
use super::timer::OneShotTimer;

#[derive(Debug, Clone)]
pub struct AftermathSequencer {
    step: AftermathStep,
    survival_time: f64,
    score_text: String,
    score_display_duration: f32,
    /// Таймер следующего шага (None после D)
    pending: Option<OneShotTimer>,
}

impl AftermathSequencer {
    /// Запускает последовательность: шаги A и B выполняются сразу
    pub fn start(
        now: f64,
        survival_time: f64,
        config: &EncounterConfig,
        io: &mut Collaborators,
        missing: &mut MissingCollaborators,
    ) -> Self {
        // Step A: stinger
        match io.audio.as_deref_mut() {
            Some(audio) => {
                audio.stop();
                if let Some(stinger) = &config.audio.stinger {
                    audio.play(stinger, false);
                }
            }
            None => missing.audio("catch stinger"),
        }

        // Step B: jumpscare
        match io.presentation.as_deref_mut() {
            Some(presentation) => presentation.show_jumpscare(),
            None => missing.presentation("jumpscare"),
        }

        let score_text = config.score_format.format(survival_time);
        crate::log_info(&format!(
            "💀 Aftermath started: survival {:.2}s (score \"{}\"), score in {:.2}s",
            survival_time, score_text, config.aftermath_stinger_delay
        ));

        Self {
            step: AftermathStep::StingerPlaying,
            survival_time,
            score_text,
            score_display_duration: config.score_display_duration,
            pending: Some(OneShotTimer::after(now, config.aftermath_stinger_delay)),
        }
    }

    /// Выполняет все шаги, чей таймер истёк к `now`, по порядку.
    /// Возвращает шаги, в которые перешли за этот вызов.
    pub fn advance(
        &mut self,
        now: f64,
        io: &mut Collaborators,
        missing: &mut MissingCollaborators,
    ) -> Vec<AftermathStep> {
        let mut entered = Vec::new();

        while let Some(timer) = self.pending {
            if !timer.is_due(now) {
                break;
            }

            let Some(next) = self.step.next() else {
                self.pending = None;
                break;
            };

            match next {
                AftermathStep::ScoreShown => {
                    // Step C
                    match io.presentation.as_deref_mut() {
                        Some(presentation) => presentation.show_score(&self.score_text),
                        None => missing.presentation("score display"),
                    }
                    self.pending = Some(timer.chain(self.score_display_duration));
                }
                AftermathStep::RestartPending => {
                    // Step D
                    match io.level.as_deref_mut() {
                        Some(level) => level.reload_current_level(),
                        None => missing.level(),
                    }
                    self.pending = None;
                }
                AftermathStep::StingerPlaying => {}
            }

            crate::log(&format!("Aftermath: {:?} → {:?} (t={:.3})", self.step, next, now));
            self.step = next;
            entered.push(next);
        }

        entered
    }

    pub fn step(&self) -> AftermathStep {
        self.step
    }

    pub fn survival_time(&self) -> f64 {
        self.survival_time
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    /// Due time следующего шага (None когда reload уже запрошен)
    pub fn next_due(&self) -> Option<f64> {
        self.pending.map(|timer| timer.due_at())
    }
}
