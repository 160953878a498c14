//! Handler für persistierte Einstellungen.

use crate::app::AppState;

/// Setzt die Toleranz und schreibt die Einstellungen bei Änderung.
pub fn set_tolerance(state: &mut AppState, value: f64) -> anyhow::Result<()> {
    if !state.options.set_tolerance(value) {
        return Ok(());
    }
    log::debug!("Toleranz: {:.3}", state.options.tolerance);
    persist(state)
}

/// Setzt "Attribut-Dialog überspringen" und schreibt die Einstellungen bei Änderung.
pub fn set_skip_attribute_dialog(state: &mut AppState, skip: bool) -> anyhow::Result<()> {
    if state.options.skip_attribute_dialog == skip {
        return Ok(());
    }
    state.options.skip_attribute_dialog = skip;
    persist(state)
}

fn persist(state: &AppState) -> anyhow::Result<()> {
    match &state.settings_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}
