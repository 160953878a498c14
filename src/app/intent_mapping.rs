//! Mapping von Host-Intents auf mutierende App-Commands.

use super::tools::CaptureKey;
use super::{AppCommand, AppIntent, AppState};
use crate::core::can_start_capture;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FreehandToolRequested => {
            // Vorbedingungen verhindern den Start statt ihn nachträglich abzubrechen
            if can_start_capture(state.layer.as_ref()) {
                vec![AppCommand::ActivateFreehandTool]
            } else {
                log::debug!("Freihand-Werkzeug angefordert, aber Layer nicht erfassbar");
                vec![]
            }
        }
        AppIntent::MapToolChanged => {
            if state.tool_active {
                vec![AppCommand::DeactivateFreehandTool]
            } else {
                vec![]
            }
        }
        AppIntent::CurrentLayerChanged { layer } => vec![AppCommand::SetCurrentLayer { layer }],
        AppIntent::EditingStarted => vec![AppCommand::SetLayerEditable { editable: true }],
        AppIntent::EditingStopped => vec![AppCommand::SetLayerEditable { editable: false }],
        AppIntent::CanvasCrsChanged { crs } => vec![AppCommand::SetCanvasCrs { crs }],
        AppIntent::PointerPressed { sample } => {
            if state.tool_active {
                vec![AppCommand::BeginCapture { sample }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerMoved { sample } => {
            if state.tool_active && state.tool.is_capturing() {
                vec![AppCommand::ExtendCapture { sample }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { sample } => {
            if state.tool_active && state.tool.is_capturing() {
                vec![AppCommand::FinishCapture {
                    sample: Some(sample),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::KeyPressed { key } => {
            if !(state.tool_active && state.tool.is_capturing()) {
                return vec![];
            }
            match key {
                CaptureKey::Enter => vec![AppCommand::FinishCapture { sample: None }],
                CaptureKey::Escape => vec![AppCommand::CancelCapture],
            }
        }
        AppIntent::ToleranceChanged { value } => vec![AppCommand::SetTolerance { value }],
        AppIntent::SkipAttributeDialogChanged { skip } => {
            vec![AppCommand::SetSkipAttributeDialog { skip }]
        }
    }
}
