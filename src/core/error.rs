//! Fehler-Taxonomie der Erfassungs-Pipeline.
//!
//! Alle Fehler sind für den aktuellen Erfassungsversuch terminal; es gibt keine
//! Wiederholung. Die Zustandsmaschine kehrt danach immer nach `Idle` zurück.

use thiserror::Error;

/// Typisierter Fehler eines Erfassungsversuchs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// Authority-Code ist in der Projektions-Registry unbekannt.
    #[error("unbekanntes Koordinatensystem EPSG:{0}")]
    UnknownCrs(u32),
    /// Kein aktiver Layer vorhanden.
    #[error("kein aktiver Layer")]
    NoActiveLayer,
    /// Aktiver Layer ist nicht im Bearbeitungsmodus.
    #[error("Layer ist nicht editierbar")]
    LayerNotEditable,
    /// Geometrietyp des Layers ist weder Linie noch Polygon.
    #[error("Geometrietyp des Layers unterstützt keine Freihand-Erfassung")]
    UnsupportedGeometryType,
}
