//! Handler für Layer- und Canvas-Änderungen des Hosts.

use super::capture;
use crate::app::tools::AbandonReason;
use crate::app::AppState;
use crate::core::{Crs, LayerInfo};

/// Setzt den aktuellen Layer.
///
/// Eine laufende Erfassung gehört zum alten Layer und wird verworfen. Ist der
/// neue Layer nicht erfassbar, wird das Werkzeug deaktiviert.
pub fn set_current_layer(state: &mut AppState, layer: Option<LayerInfo>) {
    match &layer {
        Some(info) => log::info!(
            "Aktueller Layer: {} ({:?}, {})",
            info.name,
            info.geometry_kind,
            info.crs
        ),
        None => log::info!("Kein aktueller Layer"),
    }

    capture::abandon(state, AbandonReason::LayerUnavailable);
    state.layer = layer;
    deactivate_if_not_capturable(state);
}

/// Setzt die Editierbarkeit des aktuellen Layers.
pub fn set_layer_editable(state: &mut AppState, editable: bool) {
    let Some(layer) = state.layer.as_mut() else {
        return;
    };
    layer.editable = editable;
    log::info!(
        "Bearbeitungsmodus für {} {}",
        layer.name,
        if editable { "gestartet" } else { "beendet" }
    );
    deactivate_if_not_capturable(state);
}

/// Setzt das CRS der Kartenansicht.
pub fn set_canvas_crs(state: &mut AppState, crs: Crs) {
    if state.canvas_crs == crs {
        return;
    }
    capture::abandon(state, AbandonReason::CanvasCrsChanged);
    state.canvas_crs = crs;
    log::info!("Canvas-CRS: {}", crs);
}

fn deactivate_if_not_capturable(state: &mut AppState) {
    if state.tool_active && !state.can_start_capture() {
        capture::deactivate(state);
    }
}
