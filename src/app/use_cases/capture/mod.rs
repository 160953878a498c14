//! Use-Case-Funktionen für die Verarbeitung einer abgeschlossenen Erfassung.
//!
//! Aufgeteilt nach Schritt:
//! - `assemble`: Transformation, Vereinfachung, Validierung, Rückfrage
//! - `commit`: Undo-Schritt, Attribut-Dialog, Einfügen in den Layer
//! - `pipeline`: Verkettung beider Schritte auf dem AppState

mod assemble;
mod commit;
mod pipeline;

pub use assemble::{assemble, effective_tolerance, AssemblyContext, AssemblyOutcome};
pub use commit::commit_draft;
pub use pipeline::run_capture_pipeline;

use crate::app::tools::AbandonReason;
use crate::core::CaptureError;

/// Endergebnis eines Erfassungsversuchs.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// Feature wurde in den Layer eingefügt und der Undo-Schritt abgeschlossen
    Committed,
    /// Undo-Schritt wurde verworfen (Dialog abgebrochen oder Einfügen fehlgeschlagen)
    RolledBack,
    /// Erfassung endete ohne Feature
    Abandoned(AbandonReason),
    /// Erfassung scheiterte an einem Pipeline-Fehler
    Failed(CaptureError),
}
