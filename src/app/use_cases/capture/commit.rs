use super::CaptureOutcome;
use crate::app::host::FeatureHost;
use crate::app::tools::FreehandTool;
use crate::core::FeatureDraft;
use crate::shared::EDIT_COMMAND_LABEL;

/// Überträgt einen Entwurf als eigenen Undo-Schritt in den Layer.
///
/// Während der Attribut-Dialog offen ist, sperrt das Werkzeug neue Erfassungen.
/// Schlägt `add_feature` fehl, wird der Undo-Schritt verworfen und der Fehler
/// an den Aufrufer weitergegeben.
pub fn commit_draft<H: FeatureHost + ?Sized>(
    mut draft: FeatureDraft,
    skip_attribute_dialog: bool,
    tool: &mut FreehandTool,
    host: &mut H,
) -> anyhow::Result<CaptureOutcome> {
    host.begin_edit_command(EDIT_COMMAND_LABEL);

    if !skip_attribute_dialog {
        tool.set_ignore_click(true);
        let accepted = host.edit_attributes(&mut draft, tool);
        tool.set_ignore_click(false);

        if !accepted {
            host.destroy_edit_command();
            log::info!("Attribut-Dialog abgebrochen, Feature verworfen");
            return Ok(CaptureOutcome::RolledBack);
        }
    }

    if let Err(err) = host.add_feature(draft) {
        host.destroy_edit_command();
        return Err(err.context("Feature konnte nicht eingefügt werden"));
    }
    host.end_edit_command();
    log::info!("Feature hinzugefügt");
    Ok(CaptureOutcome::Committed)
}
