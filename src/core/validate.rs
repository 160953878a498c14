//! Geometrie-Validierung: Mindestpunktzahl und Selbstüberschneidung.
//!
//! Die Prüfung ist beratend: ein Defekt führt zur Rückfrage beim Benutzer,
//! nicht zum automatischen Verwerfen.

use glam::DVec2;

use super::geometry::RawGeometry;

/// Gefundener Geometrie-Defekt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryDefect {
    /// Zu wenige unterschiedliche Punkte
    TooFewDistinctPoints {
        /// Gefundene Anzahl
        found: usize,
        /// Mindestanzahl für den Geometrietyp
        required: usize,
    },
    /// Zwei Segmente schneiden oder berühren sich unzulässig (Segment-Indizes)
    SelfIntersection {
        first_segment: usize,
        second_segment: usize,
    },
}

/// `true` wenn die Geometrie Defekte hat (also ungültig ist).
pub fn validate(geometry: &RawGeometry) -> bool {
    !find_defects(geometry).is_empty()
}

/// Sammelt alle Defekte der Geometrie.
///
/// Bei zu wenigen Punkten wird die Schnittprüfung übersprungen.
pub fn find_defects(geometry: &RawGeometry) -> Vec<GeometryDefect> {
    let (required, closed_ring) = match geometry {
        RawGeometry::LineString(_) => (2, false),
        RawGeometry::Polygon(_) => (3, true),
    };

    let found = distinct_point_count(geometry.points());
    if found < required {
        return vec![GeometryDefect::TooFewDistinctPoints { found, required }];
    }

    let mut vertices = dedup_consecutive(geometry.points());
    if closed_ring {
        // Ring schließen; ein bereits explizit geschlossener Ring wird nicht doppelt geschlossen
        if vertices.first() != vertices.last() {
            if let Some(&first) = vertices.first() {
                vertices.push(first);
            }
        }
    }

    let wraps = closed_ring || vertices.first() == vertices.last();
    self_intersections(&vertices, wraps)
        .into_iter()
        .map(|(first_segment, second_segment)| GeometryDefect::SelfIntersection {
            first_segment,
            second_segment,
        })
        .collect()
}

/// Zählt exakt unterschiedliche Punkte.
///
/// `-0.0` und `0.0` gelten wie beim Vergleich mit `==` als derselbe Wert.
fn distinct_point_count(points: &[DVec2]) -> usize {
    let mut keys: Vec<[u64; 2]> = points
        .iter()
        .map(|p| [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits()])
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys.len()
}

/// Entfernt direkt aufeinanderfolgende Duplikate (Null-Segmente).
fn dedup_consecutive(points: &[DVec2]) -> Vec<DVec2> {
    let mut out: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}

/// Findet alle unzulässig sich schneidenden Segmentpaare.
///
/// Segment `i` verbindet `vertices[i]` und `vertices[i + 1]`. Benachbarte
/// Segmente dürfen sich nur im gemeinsamen Vertex berühren; bei `wraps`
/// gelten auch erstes und letztes Segment als benachbart.
fn self_intersections(vertices: &[DVec2], wraps: bool) -> Vec<(usize, usize)> {
    let segment_count = vertices.len().saturating_sub(1);
    let mut hits = Vec::new();

    for i in 0..segment_count {
        let (a1, a2) = (vertices[i], vertices[i + 1]);
        for j in (i + 1)..segment_count {
            let (b1, b2) = (vertices[j], vertices[j + 1]);
            let adjacent = j == i + 1;
            let wrap_adjacent = wraps && i == 0 && j == segment_count - 1 && segment_count > 2;

            let defective = if adjacent {
                // Gemeinsamer Vertex a2 == b1; nur kollineares Zurücklaufen ist ein Defekt
                folds_back(a1, a2, b2)
            } else if wrap_adjacent {
                // Gemeinsamer Vertex a1 == b2
                folds_back(b1, b2, a2)
            } else {
                segments_intersect(a1, a2, b1, b2)
            };

            if defective {
                hits.push((i, j));
            }
        }
    }
    hits
}

/// Prüft, ob das Folgesegment `shared → next` kollinear auf `prev → shared` zurückläuft.
fn folds_back(prev: DVec2, shared: DVec2, next: DVec2) -> bool {
    let incoming = shared - prev;
    let outgoing = next - shared;
    incoming.perp_dot(outgoing) == 0.0 && incoming.dot(outgoing) < 0.0
}

/// Orientierung des Tripels: >0 links, <0 rechts, 0 kollinear.
fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Liegt `p` (kollinear vorausgesetzt) innerhalb der Bounding-Box von `a`–`b`?
fn within_box(a: DVec2, b: DVec2, p: DVec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Schneiden oder berühren sich die Segmente `a1–a2` und `b1–b2`?
fn segments_intersect(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within_box(b1, b2, a1))
        || (d2 == 0.0 && within_box(b1, b2, a2))
        || (d3 == 0.0 && within_box(a1, a2, b1))
        || (d4 == 0.0 && within_box(a1, a2, b2))
}
