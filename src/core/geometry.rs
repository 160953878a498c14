//! Geometrie-Typen der Freihand-Pipeline: Rohgeometrie und validierte Geometrie.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geometrietyp eines Ziel-Layers.
///
/// Nur `Line` und `Polygon` sind für die Freihand-Erfassung geeignet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    /// Punkt-Layer (nicht erfassbar)
    Point,
    /// Linien-Layer
    Line,
    /// Polygon-Layer
    Polygon,
    /// Layer ohne Geometrie (Attributtabelle)
    NoGeometry,
}

impl GeometryKind {
    /// Gibt `true` zurück, wenn der Typ per Freihand erfasst werden kann.
    pub fn is_capturable(self) -> bool {
        matches!(self, GeometryKind::Line | GeometryKind::Polygon)
    }

    /// Versiegelt eine Vertex-Folge in eine Rohgeometrie dieses Typs.
    ///
    /// Gibt `None` für nicht erfassbare Typen zurück.
    pub fn seal(self, vertices: Vec<DVec2>) -> Option<RawGeometry> {
        match self {
            GeometryKind::Line => Some(RawGeometry::LineString(vertices)),
            GeometryKind::Polygon => Some(RawGeometry::Polygon(vertices)),
            GeometryKind::Point | GeometryKind::NoGeometry => None,
        }
    }
}

/// Unverarbeitete Geometrie einer abgeschlossenen Erfassung.
///
/// Der Polygon-Ring ist implizit geschlossen: der erste Vertex wird
/// am Ende nicht wiederholt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawGeometry {
    /// Offene Linie
    LineString(Vec<DVec2>),
    /// Implizit geschlossener Ring
    Polygon(Vec<DVec2>),
}

impl RawGeometry {
    /// Vertices der Geometrie in Erfassungsreihenfolge.
    pub fn points(&self) -> &[DVec2] {
        match self {
            RawGeometry::LineString(points) | RawGeometry::Polygon(points) => points,
        }
    }

    /// Anzahl der gespeicherten Vertices (ohne impliziten Schlusspunkt).
    pub fn vertex_count(&self) -> usize {
        self.points().len()
    }

    /// Geometrietyp dieser Rohgeometrie.
    pub fn kind(&self) -> GeometryKind {
        match self {
            RawGeometry::LineString(_) => GeometryKind::Line,
            RawGeometry::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Erzeugt eine Geometrie gleichen Typs mit neuen Vertices.
    pub fn with_points(&self, points: Vec<DVec2>) -> RawGeometry {
        match self {
            RawGeometry::LineString(_) => RawGeometry::LineString(points),
            RawGeometry::Polygon(_) => RawGeometry::Polygon(points),
        }
    }

    /// Wendet `f` auf jeden Vertex an; bricht beim ersten Fehler ab.
    pub fn try_map_points<E>(
        &self,
        mut f: impl FnMut(DVec2) -> Result<DVec2, E>,
    ) -> Result<RawGeometry, E> {
        let mapped = self
            .points()
            .iter()
            .map(|&p| f(p))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(self.with_points(mapped))
    }
}

/// Vereinfachte, transformierte und geprüfte Geometrie. Nach Erzeugung unveränderlich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedGeometry {
    geometry: RawGeometry,
    valid: bool,
}

impl ValidatedGeometry {
    /// Verpackt eine geprüfte Geometrie mit ihrem Prüfergebnis.
    pub fn new(geometry: RawGeometry, valid: bool) -> Self {
        Self { geometry, valid }
    }

    /// Die geprüfte Geometrie.
    pub fn geometry(&self) -> &RawGeometry {
        &self.geometry
    }

    /// `true` wenn der Validator keine Defekte gefunden hat.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Gibt die Geometrie zurück (konsumierend).
    pub fn into_geometry(self) -> RawGeometry {
        self.geometry
    }
}
