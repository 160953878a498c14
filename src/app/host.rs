//! Schnittstellen zum einbettenden GIS-Host (Dialoge, Edit-Buffer, Undo-Stack).
//!
//! Die Pipeline kennt keine konkrete UI. Alles, was Benutzerinteraktion oder
//! Datenhaltung des Hosts braucht, läuft über diese Traits.

use crate::app::tools::FreehandTool;
use crate::core::{FeatureDraft, GeometryDefect};

/// Rückfrage bei ungültiger Geometrie.
pub trait ValidityPrompt {
    /// Fragt, ob eine ungültige Geometrie trotzdem übernommen werden soll.
    ///
    /// `true` = übernehmen, `false` = Erfassung verwerfen.
    fn confirm_invalid_geometry(&mut self, defects: &[GeometryDefect]) -> bool;
}

/// Host-Seite des Commit-Ablaufs.
pub trait FeatureHost: ValidityPrompt {
    /// Zeigt den Attribut-Dialog. `false` = Benutzer hat abgebrochen.
    ///
    /// Hosts mit verschachtelter Event-Schleife stellen Zeiger-Events während
    /// des Dialogs über `tool` zu. Neue Erfassungen sind dabei gesperrt.
    fn edit_attributes(&mut self, draft: &mut FeatureDraft, tool: &mut FreehandTool) -> bool;

    /// Öffnet einen benannten Undo-Schritt.
    fn begin_edit_command(&mut self, label: &str);

    /// Fügt das Feature in den Edit-Buffer des Layers ein.
    fn add_feature(&mut self, draft: FeatureDraft) -> anyhow::Result<()>;

    /// Schließt den offenen Undo-Schritt ab.
    fn end_edit_command(&mut self);

    /// Verwirft den offenen Undo-Schritt samt aller darin gemachten Änderungen.
    fn destroy_edit_command(&mut self);
}
