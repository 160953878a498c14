//! Erfassungs-Werkzeuge und ihre gemeinsamen Ein-/Ausgabetypen.
//!
//! Werkzeuge erzeugen reine Daten (`CaptureAction`); die Weiterverarbeitung
//! (Transformation, Vereinfachung, Commit) erfolgt zentral in den Use-Cases.

/// Freihand-Werkzeug: Zeigerspur → Rohgeometrie.
pub mod freehand;

pub use freehand::{CapturePhase, FreehandTool};

use crate::core::RawGeometry;
use glam::{DVec2, Vec2};

// ── Typen ────────────────────────────────────────────────────────

/// Ein Zeiger-Ereignis mit Karten- und Bildschirmposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Position in Karten-Koordinaten (Canvas-CRS)
    pub map_pos: DVec2,
    /// Position in Screen-Pixeln (für den Mindestabstand)
    pub screen_pos: Vec2,
}

impl PointerSample {
    /// Erzeugt ein Sample aus Karten- und Bildschirmposition.
    pub fn new(map_pos: DVec2, screen_pos: Vec2) -> Self {
        Self {
            map_pos,
            screen_pos,
        }
    }
}

/// Tastatur-Eingaben, auf die das Werkzeug reagiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKey {
    /// Erfassung abschließen
    Enter,
    /// Erfassung verwerfen
    Escape,
}

/// Grund, aus dem eine Erfassung ohne Feature endete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonReason {
    /// Weniger als zwei Punkte aufgezeichnet
    EmptyCapture { points: usize },
    /// Benutzer hat die ungültige Geometrie abgelehnt
    InvalidGeometryRejected,
    /// Werkzeug wurde deaktiviert (Tool-Wechsel, Layer nicht mehr editierbar)
    ToolDeactivated,
    /// Benutzer hat per Escape abgebrochen
    Cancelled,
    /// Canvas-CRS hat sich während der Erfassung geändert
    CanvasCrsChanged,
    /// Ziel-Layer fehlt oder ist nicht erfassbar
    LayerUnavailable,
}

/// Rückgabe der Werkzeug-Ereignisse, steuert den Erfassungs-Flow.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureAction {
    /// Ereignis ohne Wirkung (Werkzeug idle oder Klicks gesperrt)
    Ignored,
    /// Neue Erfassung begonnen
    Started,
    /// Erfassung läuft weiter
    Continue,
    /// Erfassung abgeschlossen, Rohgeometrie zur Weiterverarbeitung
    Finished(RawGeometry),
    /// Erfassung ohne Feature beendet
    Abandoned(AbandonReason),
}
