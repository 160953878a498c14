use super::{assemble, commit_draft, AssemblyContext, AssemblyOutcome, CaptureOutcome};
use crate::app::host::FeatureHost;
use crate::app::AppState;
use crate::core::{check_capture_preconditions, CaptureError, RawGeometry};

/// Verarbeitet eine abgeschlossene Erfassung bis zum Commit oder Abbruch.
///
/// Das Ergebnis wird zusätzlich in `state.last_outcome` abgelegt.
pub fn run_capture_pipeline(
    state: &mut AppState,
    host: &mut dyn FeatureHost,
    raw: RawGeometry,
) -> anyhow::Result<CaptureOutcome> {
    let result = process(state, host, raw);
    state.last_outcome = Some(match &result {
        Ok(outcome) => outcome.clone(),
        Err(_) => CaptureOutcome::RolledBack,
    });
    result
}

fn process(
    state: &mut AppState,
    host: &mut dyn FeatureHost,
    raw: RawGeometry,
) -> anyhow::Result<CaptureOutcome> {
    if let Err(err) = check_capture_preconditions(state.layer.as_ref()) {
        log::warn!("Erfassung ohne erfassbaren Layer verworfen: {}", err);
        return Ok(CaptureOutcome::Failed(err));
    }
    let Some(layer) = state.layer.as_ref() else {
        return Ok(CaptureOutcome::Failed(CaptureError::NoActiveLayer));
    };

    let ctx = AssemblyContext {
        capture_crs: state.canvas_crs,
        storage_crs: layer.crs,
        tolerance: state.options.tolerance,
        field_count: layer.field_count,
        registry: &*state.crs_registry,
    };

    let draft = match assemble(raw, &ctx, &mut *host) {
        Ok(AssemblyOutcome::Draft(draft)) => draft,
        Ok(AssemblyOutcome::Abandoned(reason)) => {
            log::info!("Erfassung verworfen: {:?}", reason);
            return Ok(CaptureOutcome::Abandoned(reason));
        }
        Err(err) => {
            log::warn!("Erfassung abgebrochen: {}", err);
            return Ok(CaptureOutcome::Failed(err));
        }
    };

    let skip_dialog = state.options.skip_attribute_dialog;
    commit_draft(draft, skip_dialog, &mut state.tool, &mut *host)
}
