//! Beschreibung des aktiven Ziel-Layers und die daraus abgeleiteten Prädikate.

use serde::{Deserialize, Serialize};

use super::crs::Crs;
use super::error::CaptureError;
use super::geometry::GeometryKind;

/// Vom Host gemeldete Eigenschaften des aktuellen Layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerInfo {
    /// Anzeigename (nur für Logging)
    pub name: String,
    /// Geometrietyp des Layers
    pub geometry_kind: GeometryKind,
    /// Ob der Layer im Bearbeitungsmodus ist
    pub editable: bool,
    /// Anzahl der Attributfelder
    pub field_count: usize,
    /// Speicher-CRS des Layers
    pub crs: Crs,
}

impl LayerInfo {
    /// Erzeugt eine Layer-Beschreibung.
    pub fn new(
        name: impl Into<String>,
        geometry_kind: GeometryKind,
        editable: bool,
        field_count: usize,
        crs: Crs,
    ) -> Self {
        Self {
            name: name.into(),
            geometry_kind,
            editable,
            field_count,
            crs,
        }
    }
}

/// Prüft die Vorbedingungen für den Start einer Freihand-Erfassung.
pub fn check_capture_preconditions(layer: Option<&LayerInfo>) -> Result<(), CaptureError> {
    let layer = layer.ok_or(CaptureError::NoActiveLayer)?;
    if !layer.geometry_kind.is_capturable() {
        return Err(CaptureError::UnsupportedGeometryType);
    }
    if !layer.editable {
        return Err(CaptureError::LayerNotEditable);
    }
    Ok(())
}

/// Ob die Freihand-Aktion (Toolbar/Menü/Shortcut) aktiviert sein darf.
pub fn can_start_capture(layer: Option<&LayerInfo>) -> bool {
    check_capture_preconditions(layer).is_ok()
}

/// Ob das Toleranz-Eingabefeld aktiviert sein darf.
///
/// In geographischen Systemen wird die Toleranz ohnehin auf 0 gezwungen.
pub fn tolerance_editable(layer: Option<&LayerInfo>) -> bool {
    can_start_capture(layer) && layer.is_some_and(|l| !l.crs.is_geographic())
}
