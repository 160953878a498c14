//! Koordinaten-Transformation zwischen zwei Koordinatensystemen.

use glam::DVec2;

use super::crs::{Crs, CrsRegistry, Projection};
use super::error::CaptureError;
use super::geometry::RawGeometry;

/// Vorwärts-Transformation von `source` nach `target` über Länge/Breite.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateTransform {
    source: Projection,
    target: Projection,
}

impl CoordinateTransform {
    /// Löst beide Codes in der Registry auf.
    ///
    /// Schlägt mit `UnknownCrs` fehl, sobald einer der Codes unbekannt ist
    /// (Quelle wird zuerst geprüft).
    pub fn new(from: Crs, to: Crs, registry: &dyn CrsRegistry) -> Result<Self, CaptureError> {
        let source = registry
            .projection(from.srid)
            .ok_or(CaptureError::UnknownCrs(from.srid))?;
        let target = registry
            .projection(to.srid)
            .ok_or(CaptureError::UnknownCrs(to.srid))?;
        Ok(Self { source, target })
    }

    /// Transformiert einen einzelnen Punkt.
    pub fn apply(&self, pos: DVec2) -> DVec2 {
        if self.source == self.target {
            return pos;
        }
        self.target.forward(self.source.inverse(pos))
    }
}

/// Transformiert einen einzelnen Punkt von `from` nach `to`.
pub fn transform_point(
    pos: DVec2,
    from: Crs,
    to: Crs,
    registry: &dyn CrsRegistry,
) -> Result<DVec2, CaptureError> {
    if from == to {
        return Ok(pos);
    }
    Ok(CoordinateTransform::new(from, to, registry)?.apply(pos))
}

/// Transformiert eine komplette Geometrie von `from` nach `to`.
///
/// Bei `from == to` wird die Eingabe unverändert zurückgegeben, ohne die
/// Registry zu befragen.
pub fn transform_geometry(
    geometry: RawGeometry,
    from: Crs,
    to: Crs,
    registry: &dyn CrsRegistry,
) -> Result<RawGeometry, CaptureError> {
    if from == to {
        return Ok(geometry);
    }
    let transform = CoordinateTransform::new(from, to, registry)?;
    log::debug!(
        "Transformiere {} Vertices von {} nach {}",
        geometry.vertex_count(),
        from,
        to
    );
    geometry.try_map_points(|p| Ok(transform.apply(p)))
}
