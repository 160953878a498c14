use crate::app::tools::{CaptureKey, PointerSample};
use crate::core::{Crs, LayerInfo};

/// App-Intents: Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Freihand-Werkzeug über Toolbar, Menü oder Shortcut angefordert
    FreehandToolRequested,
    /// Host hat ein anderes Karten-Werkzeug gesetzt
    MapToolChanged,
    /// Aktueller Layer hat gewechselt (`None` = kein Layer)
    CurrentLayerChanged { layer: Option<LayerInfo> },
    /// Bearbeitungsmodus des aktuellen Layers wurde gestartet
    EditingStarted,
    /// Bearbeitungsmodus des aktuellen Layers wurde beendet
    EditingStopped,
    /// Ziel-CRS der Kartenansicht hat sich geändert
    CanvasCrsChanged { crs: Crs },
    /// Maustaste im Viewport gedrückt
    PointerPressed { sample: PointerSample },
    /// Maus im Viewport bewegt
    PointerMoved { sample: PointerSample },
    /// Maustaste im Viewport losgelassen
    PointerReleased { sample: PointerSample },
    /// Taste gedrückt, während das Werkzeug aktiv ist
    KeyPressed { key: CaptureKey },
    /// Benutzer hat die Toleranz im Eingabefeld geändert
    ToleranceChanged { value: f64 },
    /// Einstellung "Attribut-Dialog überspringen" geändert
    SkipAttributeDialogChanged { skip: bool },
}
