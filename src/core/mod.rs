//! Core-Domänentypen und reine Algorithmen der Freihand-Pipeline:
//! Geometrie, Koordinatensysteme, Transformation, Vereinfachung, Validierung.

pub mod crs;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod layer;
pub mod simplify;
pub mod transform;
pub mod validate;

pub use crs::{BuiltinCrsRegistry, Crs, CrsKind, CrsRegistry, Projection};
pub use error::CaptureError;
pub use feature::{AttributeValue, FeatureDraft};
pub use geometry::{GeometryKind, RawGeometry, ValidatedGeometry};
pub use layer::{can_start_capture, check_capture_preconditions, tolerance_editable, LayerInfo};
pub use simplify::{simplify, simplify_geometry};
pub use transform::{transform_geometry, transform_point, CoordinateTransform};
pub use validate::{find_defects, validate, GeometryDefect};
