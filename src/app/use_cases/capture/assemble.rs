use crate::app::host::ValidityPrompt;
use crate::app::tools::AbandonReason;
use crate::core::{
    find_defects, simplify_geometry, transform_geometry, CaptureError, Crs, CrsRegistry,
    FeatureDraft, RawGeometry, ValidatedGeometry,
};

/// Eingaben der Feature-Erzeugung, die nicht aus der Geometrie selbst stammen.
pub struct AssemblyContext<'a> {
    /// CRS, in dem die Zeigerspur aufgezeichnet wurde (Canvas)
    pub capture_crs: Crs,
    /// Speicher-CRS des Ziel-Layers
    pub storage_crs: Crs,
    /// Konfigurierte Toleranz in Einheiten des Speicher-CRS
    pub tolerance: f64,
    /// Anzahl der Attributfelder des Ziel-Layers
    pub field_count: usize,
    /// Projektions-Registry für die Transformation
    pub registry: &'a dyn CrsRegistry,
}

/// Ergebnis der Feature-Erzeugung.
#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyOutcome {
    /// Entwurf bereit zum Commit
    Draft(FeatureDraft),
    /// Benutzer hat die ungültige Geometrie abgelehnt
    Abandoned(AbandonReason),
}

/// Toleranz, die tatsächlich angewendet wird.
///
/// Grad-Einheiten machen eine metrisch gemeinte Toleranz bedeutungslos,
/// daher wird in geographischen Systemen nicht vereinfacht.
pub fn effective_tolerance(storage_crs: Crs, configured: f64) -> f64 {
    if storage_crs.is_geographic() {
        0.0
    } else {
        configured
    }
}

/// Erzeugt aus einer Rohgeometrie einen Feature-Entwurf.
///
/// Reihenfolge: Transformation → effektive Toleranz → Vereinfachung → Validierung.
/// Eine ungültige Geometrie wird dem Benutzer zur Entscheidung vorgelegt.
pub fn assemble<P: ValidityPrompt + ?Sized>(
    raw: RawGeometry,
    ctx: &AssemblyContext<'_>,
    prompt: &mut P,
) -> Result<AssemblyOutcome, CaptureError> {
    let transformed = transform_geometry(raw, ctx.capture_crs, ctx.storage_crs, ctx.registry)?;

    let tolerance = effective_tolerance(ctx.storage_crs, ctx.tolerance);
    let before = transformed.vertex_count();
    let simplified = simplify_geometry(transformed, tolerance);
    log::debug!(
        "Vereinfachung mit Toleranz {:.3}: {} → {} Vertices",
        tolerance,
        before,
        simplified.vertex_count()
    );

    let defects = find_defects(&simplified);
    let valid = defects.is_empty();
    if !valid {
        log::debug!("Geometrie ungültig: {:?}", defects);
        if !prompt.confirm_invalid_geometry(&defects) {
            return Ok(AssemblyOutcome::Abandoned(
                AbandonReason::InvalidGeometryRejected,
            ));
        }
    }

    let geometry = ValidatedGeometry::new(simplified, valid);
    Ok(AssemblyOutcome::Draft(FeatureDraft::new(
        geometry,
        ctx.field_count,
    )))
}
