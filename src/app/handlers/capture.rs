//! Handler für das Freihand-Werkzeug (Aktivierung, Zeiger, Abschluss).

use crate::app::host::FeatureHost;
use crate::app::tools::{AbandonReason, CaptureAction, CaptureKey, PointerSample};
use crate::app::use_cases::capture::{run_capture_pipeline, CaptureOutcome};
use crate::app::AppState;

/// Aktiviert das Freihand-Werkzeug, sofern der aktuelle Layer erfassbar ist.
pub fn activate(state: &mut AppState) {
    if !state.can_start_capture() {
        log::debug!("Freihand-Werkzeug nicht aktivierbar");
        return;
    }
    state
        .tool
        .set_min_pixel_distance(state.options.min_pixel_distance);
    state.tool_active = true;
    log::info!("Freihand-Werkzeug aktiviert");
}

/// Deaktiviert das Werkzeug; eine laufende Erfassung wird verworfen.
pub fn deactivate(state: &mut AppState) {
    let action = state.tool.deactivate();
    record_abandon(state, action);
    if state.tool_active {
        state.tool_active = false;
        log::info!("Freihand-Werkzeug deaktiviert");
    }
}

/// Zeiger gedrückt: neue Erfassung für den Geometrietyp des aktuellen Layers.
pub fn begin(state: &mut AppState, sample: PointerSample) {
    let Some(kind) = state.layer.as_ref().map(|layer| layer.geometry_kind) else {
        return;
    };
    state.tool.on_pointer_down(sample, kind);
}

/// Zeiger bewegt: Erfassung fortsetzen.
pub fn extend(state: &mut AppState, sample: PointerSample) {
    state.tool.on_pointer_move(sample);
}

/// Schließt die Erfassung ab und führt die Pipeline bis zum Commit aus.
pub fn finish(
    state: &mut AppState,
    host: &mut dyn FeatureHost,
    sample: Option<PointerSample>,
) -> anyhow::Result<()> {
    let action = match sample {
        Some(sample) => state.tool.on_pointer_up(sample),
        None => state.tool.on_key(CaptureKey::Enter),
    };

    match action {
        CaptureAction::Finished(raw) => {
            log::debug!("Erfassung abgeschlossen: {} Vertices", raw.vertex_count());
            run_capture_pipeline(state, host, raw)?;
        }
        other => record_abandon(state, other),
    }
    Ok(())
}

/// Verwirft die laufende Erfassung (Escape).
pub fn cancel(state: &mut AppState) {
    let action = state.tool.on_key(CaptureKey::Escape);
    record_abandon(state, action);
}

/// Verwirft eine laufende Erfassung mit dem angegebenen Grund.
pub(crate) fn abandon(state: &mut AppState, reason: AbandonReason) {
    let action = state.tool.abandon(reason);
    record_abandon(state, action);
}

fn record_abandon(state: &mut AppState, action: CaptureAction) {
    if let CaptureAction::Abandoned(reason) = action {
        match reason {
            AbandonReason::EmptyCapture { points } => {
                log::debug!("Leere Erfassung ({} Punkte) verworfen", points);
            }
            other => log::info!("Erfassung verworfen: {:?}", other),
        }
        state.last_outcome = Some(CaptureOutcome::Abandoned(reason));
    }
}
