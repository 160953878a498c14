//! Koordinatensysteme (CRS) und die Projektions-Registry.
//!
//! Ein `Crs` ist ein opaker Authority-Code (EPSG-SRID) plus die abgeleitete
//! Information, ob das System geographisch (Länge/Breite in Grad) ist.
//! Die eigentlichen Projektionsformeln liefert eine `CrsRegistry`, im Host
//! typischerweise dessen CRS-Datenbank, standardmäßig die `BuiltinCrsRegistry`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Art des Koordinatensystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrsKind {
    /// Länge/Breite in Grad
    Geographic,
    /// Projizierte Einheiten (z.B. Meter)
    Projected,
}

/// Koordinatensystem-Bezeichner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs {
    /// EPSG-Authority-Code
    pub srid: u32,
    /// Geographisch oder projiziert
    pub kind: CrsKind,
}

impl Crs {
    /// WGS 84 (geographisch)
    pub const WGS84: Crs = Crs::geographic(4326);
    /// WGS 84 / Pseudo-Mercator
    pub const WEB_MERCATOR: Crs = Crs::projected(3857);

    /// Erzeugt einen geographischen CRS-Bezeichner.
    pub const fn geographic(srid: u32) -> Self {
        Self {
            srid,
            kind: CrsKind::Geographic,
        }
    }

    /// Erzeugt einen projizierten CRS-Bezeichner.
    pub const fn projected(srid: u32) -> Self {
        Self {
            srid,
            kind: CrsKind::Projected,
        }
    }

    /// `true` für Länge/Breite-Systeme.
    pub fn is_geographic(&self) -> bool {
        self.kind == CrsKind::Geographic
    }
}

impl std::fmt::Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.srid)
    }
}

/// Erdradius der sphärischen Projektionen (WGS 84 Halbachse).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;
/// Gültigkeitsgrenze der Pseudo-Mercator-Projektion in Grad Breite.
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Projektionsformel eines Koordinatensystems, immer relativ zu Länge/Breite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Koordinaten sind bereits Länge/Breite in Grad.
    LongLat,
    /// Sphärischer Mercator (EPSG:3857).
    PseudoMercator,
    /// Plate Carrée in Metern (EPSG:4087).
    EquidistantCylindrical,
}

impl Projection {
    /// Projiziert Länge/Breite (Grad) in dieses System.
    pub fn forward(self, lon_lat: DVec2) -> DVec2 {
        match self {
            Projection::LongLat => lon_lat,
            Projection::PseudoMercator => {
                let lat = lon_lat
                    .y
                    .clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE)
                    .to_radians();
                DVec2::new(
                    EARTH_RADIUS_M * lon_lat.x.to_radians(),
                    EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln(),
                )
            }
            Projection::EquidistantCylindrical => DVec2::new(
                EARTH_RADIUS_M * lon_lat.x.to_radians(),
                EARTH_RADIUS_M * lon_lat.y.to_radians(),
            ),
        }
    }

    /// Rechnet Koordinaten dieses Systems zurück in Länge/Breite (Grad).
    pub fn inverse(self, pos: DVec2) -> DVec2 {
        match self {
            Projection::LongLat => pos,
            Projection::PseudoMercator => DVec2::new(
                (pos.x / EARTH_RADIUS_M).to_degrees(),
                (2.0 * (pos.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
                    .to_degrees(),
            ),
            Projection::EquidistantCylindrical => DVec2::new(
                (pos.x / EARTH_RADIUS_M).to_degrees(),
                (pos.y / EARTH_RADIUS_M).to_degrees(),
            ),
        }
    }
}

/// Schnittstelle zur CRS-Datenbank des Hosts.
pub trait CrsRegistry {
    /// Löst einen Authority-Code in seine Projektionsformel auf.
    fn projection(&self, srid: u32) -> Option<Projection>;

    /// Liefert den vollständigen Bezeichner (inkl. Art) zu einem Code.
    fn describe(&self, srid: u32) -> Option<Crs> {
        self.projection(srid).map(|projection| match projection {
            Projection::LongLat => Crs::geographic(srid),
            Projection::PseudoMercator | Projection::EquidistantCylindrical => {
                Crs::projected(srid)
            }
        })
    }
}

/// Eingebaute Registry mit den gängigsten Web-/Weltsystemen.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCrsRegistry;

impl CrsRegistry for BuiltinCrsRegistry {
    fn projection(&self, srid: u32) -> Option<Projection> {
        match srid {
            4326 | 4258 => Some(Projection::LongLat),
            3857 => Some(Projection::PseudoMercator),
            4087 => Some(Projection::EquidistantCylindrical),
            _ => None,
        }
    }
}
