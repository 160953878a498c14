//! Feature-Entwurf: geprüfte Geometrie plus leere Attribut-Slots.

use serde::{Deserialize, Serialize};

use super::geometry::ValidatedGeometry;

/// Attributwert, den der Host (Attribut-Dialog) in einen Slot schreibt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
}

/// Zur Übergabe an den Host bereites Feature.
///
/// Wird vom Kern nie aufbewahrt: nach der Übergabe ist es committet oder verworfen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDraft {
    geometry: ValidatedGeometry,
    /// Ein Slot je Layer-Feld, initial leer
    pub attributes: Vec<Option<AttributeValue>>,
}

impl FeatureDraft {
    /// Erzeugt einen Entwurf mit `field_count` leeren Attribut-Slots.
    pub fn new(geometry: ValidatedGeometry, field_count: usize) -> Self {
        Self {
            geometry,
            attributes: vec![None; field_count],
        }
    }

    /// Die geprüfte Geometrie des Entwurfs.
    pub fn geometry(&self) -> &ValidatedGeometry {
        &self.geometry
    }

    /// Setzt einen Attributwert; gibt `false` bei ungültigem Index zurück.
    pub fn set_attribute(&mut self, index: usize, value: AttributeValue) -> bool {
        match self.attributes.get_mut(index) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }
}
