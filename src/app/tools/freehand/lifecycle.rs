//! Lifecycle-Methoden des FreehandTool (Zeiger-, Tasten- und Deaktivierungs-Ereignisse).

use super::super::{AbandonReason, CaptureAction, CaptureKey, PointerSample};
use super::state::{CapturePhase, FreehandTool};
use crate::core::GeometryKind;

impl FreehandTool {
    /// Statustext für die Host-Statusleiste.
    pub fn status_text(&self) -> &str {
        match (self.phase, self.ignore_click) {
            (_, true) => "Attribut-Dialog offen",
            (CapturePhase::Idle, false) => "Maustaste drücken und Linie zeichnen",
            (CapturePhase::Capturing, false) => {
                "Loslassen oder Enter zum Abschließen, Escape zum Abbrechen"
            }
        }
    }

    /// Zeiger gedrückt: startet eine neue Erfassung für den Geometrietyp `kind`.
    ///
    /// Eine noch laufende Erfassung wird dabei verworfen.
    pub fn on_pointer_down(&mut self, sample: PointerSample, kind: GeometryKind) -> CaptureAction {
        if self.ignore_click {
            log::debug!("Erfassungsstart ignoriert: modaler Dialog offen");
            return CaptureAction::Ignored;
        }
        if !kind.is_capturable() {
            return CaptureAction::Ignored;
        }
        if self.is_capturing() {
            log::debug!(
                "Laufende Erfassung mit {} Vertices verworfen (Neustart)",
                self.vertices.len()
            );
        }

        self.clear();
        self.phase = CapturePhase::Capturing;
        self.kind = Some(kind);
        self.vertices.push(sample.map_pos);
        self.last_screen_pos = Some(sample.screen_pos);
        CaptureAction::Started
    }

    /// Zeiger bewegt: hängt einen Vertex an, wenn der Pixel-Mindestabstand überschritten ist.
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> CaptureAction {
        if !self.is_capturing() {
            return CaptureAction::Ignored;
        }
        self.append_if_far_enough(sample);
        CaptureAction::Continue
    }

    /// Zeiger losgelassen: letzte Position übernehmen und Erfassung abschließen.
    pub fn on_pointer_up(&mut self, sample: PointerSample) -> CaptureAction {
        if !self.is_capturing() {
            return CaptureAction::Ignored;
        }
        self.append_if_far_enough(sample);
        self.seal()
    }

    /// Explizites Abschließen ohne neue Position (Enter).
    pub fn finish(&mut self) -> CaptureAction {
        if !self.is_capturing() {
            return CaptureAction::Ignored;
        }
        self.seal()
    }

    /// Tastatur-Eingabe verarbeiten.
    pub fn on_key(&mut self, key: CaptureKey) -> CaptureAction {
        match key {
            CaptureKey::Enter => self.finish(),
            CaptureKey::Escape => self.abandon(AbandonReason::Cancelled),
        }
    }

    /// Werkzeug deaktiviert: laufende Erfassung ohne Feature verwerfen.
    pub fn deactivate(&mut self) -> CaptureAction {
        self.abandon(AbandonReason::ToolDeactivated)
    }

    /// Verwirft eine laufende Erfassung mit dem angegebenen Grund.
    pub(crate) fn abandon(&mut self, reason: AbandonReason) -> CaptureAction {
        if !self.is_capturing() {
            self.clear();
            return CaptureAction::Ignored;
        }
        log::debug!(
            "Erfassung verworfen ({:?}), {} Vertices",
            reason,
            self.vertices.len()
        );
        self.clear();
        CaptureAction::Abandoned(reason)
    }

    fn append_if_far_enough(&mut self, sample: PointerSample) {
        let far_enough = match self.last_screen_pos {
            Some(last) => last.distance(sample.screen_pos) > self.min_pixel_distance,
            None => true,
        };
        if far_enough {
            self.vertices.push(sample.map_pos);
            self.last_screen_pos = Some(sample.screen_pos);
        }
    }

    /// Versiegelt den Puffer in eine Rohgeometrie und kehrt nach `Idle` zurück.
    fn seal(&mut self) -> CaptureAction {
        let vertices = std::mem::take(&mut self.vertices);
        let kind = self.kind;
        self.clear();

        if vertices.len() < 2 {
            return CaptureAction::Abandoned(AbandonReason::EmptyCapture {
                points: vertices.len(),
            });
        }
        match kind.and_then(|k| k.seal(vertices)) {
            Some(geometry) => CaptureAction::Finished(geometry),
            None => CaptureAction::Abandoned(AbandonReason::LayerUnavailable),
        }
    }
}
