//! State-Definitionen und Konstruktor für das Freihand-Werkzeug.

use crate::core::GeometryKind;
use crate::shared::MIN_PIXEL_DISTANCE;
use glam::{DVec2, Vec2};

/// Phase der Zustandsmaschine.
///
/// `Finished`/`Abandoned` sind transient und werden nur als `CaptureAction` gemeldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    /// Keine Erfassung aktiv
    Idle,
    /// Zeiger gedrückt, Vertices werden gesammelt
    Capturing,
}

/// Freihand-Werkzeug
pub struct FreehandTool {
    pub(crate) phase: CapturePhase,
    /// Geometrietyp, beim Start der Erfassung festgelegt
    pub(crate) kind: Option<GeometryKind>,
    /// Vertex-Puffer in Karten-Koordinaten (nur anhängend)
    pub(crate) vertices: Vec<DVec2>,
    /// Screen-Position des zuletzt angehängten Vertex
    pub(crate) last_screen_pos: Option<Vec2>,
    /// Mindestabstand in Pixeln zwischen zwei Vertices
    pub(crate) min_pixel_distance: f32,
    /// Sperrt neue Erfassungen, solange ein modaler Dialog offen ist
    pub(crate) ignore_click: bool,
}

impl FreehandTool {
    /// Erstellt ein neues Freihand-Werkzeug mit Standardwerten.
    pub fn new() -> Self {
        Self {
            phase: CapturePhase::Idle,
            kind: None,
            vertices: Vec::new(),
            last_screen_pos: None,
            min_pixel_distance: MIN_PIXEL_DISTANCE,
            ignore_click: false,
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    /// `true` während einer laufenden Erfassung.
    pub fn is_capturing(&self) -> bool {
        self.phase == CapturePhase::Capturing
    }

    /// Anzahl der bisher aufgezeichneten Vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Aktueller Puffer für die Gummiband-Vorschau des Hosts.
    pub fn preview(&self) -> &[DVec2] {
        &self.vertices
    }

    /// Geometrietyp der laufenden Erfassung.
    pub fn capture_kind(&self) -> Option<GeometryKind> {
        self.kind
    }

    /// Setzt den Pixel-Mindestabstand (aus `FreehandOptions`).
    pub fn set_min_pixel_distance(&mut self, pixels: f32) {
        self.min_pixel_distance = pixels.max(0.0);
    }

    /// Setzt oder löst die Klick-Sperre.
    pub fn set_ignore_click(&mut self, ignore: bool) {
        self.ignore_click = ignore;
    }

    /// Ob neue Erfassungen gerade gesperrt sind.
    pub fn ignores_clicks(&self) -> bool {
        self.ignore_click
    }

    /// Leert Puffer und Phase ohne Meldung.
    pub(crate) fn clear(&mut self) {
        self.phase = CapturePhase::Idle;
        self.kind = None;
        self.vertices.clear();
        self.last_screen_pos = None;
    }
}

impl Default for FreehandTool {
    fn default() -> Self {
        Self::new()
    }
}
