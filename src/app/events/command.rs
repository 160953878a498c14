use crate::app::tools::PointerSample;
use crate::core::{Crs, LayerInfo};

/// Mutierende Commands, die der Controller auf den AppState anwendet.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Freihand-Werkzeug aktivieren
    ActivateFreehandTool,
    /// Freihand-Werkzeug deaktivieren (laufende Erfassung verwerfen)
    DeactivateFreehandTool,
    /// Aktuellen Layer setzen
    SetCurrentLayer { layer: Option<LayerInfo> },
    /// Editierbarkeit des aktuellen Layers setzen
    SetLayerEditable { editable: bool },
    /// Canvas-CRS setzen
    SetCanvasCrs { crs: Crs },
    /// Erfassung an Position beginnen
    BeginCapture { sample: PointerSample },
    /// Erfassung um Position erweitern
    ExtendCapture { sample: PointerSample },
    /// Erfassung abschließen (optional mit letzter Position)
    FinishCapture { sample: Option<PointerSample> },
    /// Laufende Erfassung verwerfen (Escape)
    CancelCapture,
    /// Toleranz setzen und persistieren
    SetTolerance { value: f64 },
    /// "Attribut-Dialog überspringen" setzen und persistieren
    SetSkipAttributeDialog { skip: bool },
}
