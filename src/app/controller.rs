//! Application Controller für zentrale Event-Verarbeitung.

use super::host::FeatureHost;
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        host: &mut dyn FeatureHost,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, host, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        host: &mut dyn FeatureHost,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Werkzeug ===
            AppCommand::ActivateFreehandTool => handlers::capture::activate(state),
            AppCommand::DeactivateFreehandTool => handlers::capture::deactivate(state),

            // === Layer & Canvas ===
            AppCommand::SetCurrentLayer { layer } => {
                handlers::layer::set_current_layer(state, layer)
            }
            AppCommand::SetLayerEditable { editable } => {
                handlers::layer::set_layer_editable(state, editable)
            }
            AppCommand::SetCanvasCrs { crs } => handlers::layer::set_canvas_crs(state, crs),

            // === Erfassung ===
            AppCommand::BeginCapture { sample } => handlers::capture::begin(state, sample),
            AppCommand::ExtendCapture { sample } => handlers::capture::extend(state, sample),
            AppCommand::FinishCapture { sample } => {
                if let Err(err) = handlers::capture::finish(state, host, sample) {
                    log::error!("Feature konnte nicht übernommen werden: {:#}", err);
                    return Err(err);
                }
            }
            AppCommand::CancelCapture => handlers::capture::cancel(state),

            // === Einstellungen ===
            AppCommand::SetTolerance { value } => {
                handlers::options::set_tolerance(state, value)?
            }
            AppCommand::SetSkipAttributeDialog { skip } => {
                handlers::options::set_skip_attribute_dialog(state, skip)?
            }
        }

        Ok(())
    }
}
