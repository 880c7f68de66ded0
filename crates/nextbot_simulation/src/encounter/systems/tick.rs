//! Encounter tick system (FixedUpdate).

use bevy::prelude::*;

use super::adapters::{EcsAudio, EcsPathing, EcsPresentation, ReloadRequest};
use crate::components::{AudioEmitter, MovementCommand, NavigationTuning, PresentationState, PursuitTarget};
use crate::encounter::collaborators::Collaborators;
use crate::encounter::controller::PursuitEncounterController;
use crate::encounter::events::{EncounterEvent, LevelReloadRequested};

/// Система: тик всех энкаунтеров
///
/// Цель — первый entity с PursuitTarget (нет такого → энкаунтер idle).
/// Часы — Time<Fixed>, так что aftermath таймеры детерминированы.
pub fn tick_encounters(
    mut encounters: Query<(
        Entity,
        &mut PursuitEncounterController,
        &Transform,
        &mut MovementCommand,
        &mut NavigationTuning,
        Option<&mut AudioEmitter>,
    )>,
    targets: Query<&Transform, (With<PursuitTarget>, Without<PursuitEncounterController>)>,
    mut presentation: Option<ResMut<PresentationState>>,
    time: Res<Time<Fixed>>,
    mut encounter_events: EventWriter<EncounterEvent>,
    mut reload_events: EventWriter<LevelReloadRequested>,
) {
    let now = time.elapsed_secs_f64();
    let delta = time.delta_secs();
    let target = targets.iter().next().map(|transform| transform.translation);

    for (entity, mut controller, transform, command, tuning, emitter) in encounters.iter_mut() {
        let mut pathing = EcsPathing {
            position: transform.translation,
            command,
            tuning,
        };
        let mut audio = emitter.map(|emitter| EcsAudio { emitter });
        let mut screen = presentation
            .as_mut()
            .map(|state| EcsPresentation { state: state.reborrow() });
        let mut reload = ReloadRequest::default();

        let mut io = Collaborators::new(&mut pathing).with_level(&mut reload);
        if let Some(audio) = audio.as_mut() {
            io = io.with_audio(audio);
        }
        if let Some(screen) = screen.as_mut() {
            io = io.with_presentation(screen);
        }

        let report = controller.tick(target, now, delta, &mut io);

        if let Some(survival_time) = report.caught {
            encounter_events.write(EncounterEvent::Caught {
                encounter: entity,
                survival_time,
            });
        }

        for step in report.aftermath_steps {
            encounter_events.write(EncounterEvent::AftermathAdvanced {
                encounter: entity,
                step,
            });
        }

        if reload.requested {
            crate::log_info(&format!("🔄 Encounter {:?}: level reload requested", entity));
            reload_events.write(LevelReloadRequested { encounter: entity });
        }
    }
}
