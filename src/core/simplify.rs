//! Kurven-Vereinfachung nach Douglas–Peucker.
//!
//! Reine Funktionen ohne geteilten Zustand: identische Eingabe und Toleranz
//! liefern bit-identische Ausgabe.

use glam::DVec2;

use super::geometry::RawGeometry;

/// Senkrechter Abstand von `point` zur Geraden durch `a` und `b`.
///
/// Fallen `a` und `b` zusammen, wird der Punktabstand zu `a` verwendet.
pub fn perpendicular_distance(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len = ab.length();
    if len == 0.0 {
        return point.distance(a);
    }
    ab.perp_dot(point - a).abs() / len
}

/// Vereinfacht eine Punktfolge innerhalb der Toleranz.
///
/// `tolerance <= 0` liefert die Eingabe unverändert. Erster und letzter Punkt
/// bleiben immer erhalten; bei gleichem Maximalabstand gewinnt der erste Punkt
/// in Folgenreihenfolge.
pub fn simplify(points: &[DVec2], tolerance: f64) -> Vec<DVec2> {
    if tolerance <= 0.0 || points.len() <= 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    // Expliziter Stack statt Rekursion; die Behalten-Entscheidung je Teilfolge
    // ist reihenfolgeunabhängig.
    let mut stack = vec![(0usize, last)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let (a, b) = (points[start], points[end]);
        let mut max_distance = 0.0;
        let mut max_index = start;
        for (offset, &p) in points[start + 1..end].iter().enumerate() {
            let distance = perpendicular_distance(p, a, b);
            if distance > max_distance {
                max_distance = distance;
                max_index = start + 1 + offset;
            }
        }
        if max_distance > tolerance {
            keep[max_index] = true;
            stack.push((max_index, end));
            stack.push((start, max_index));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(&p, k)| k.then_some(p))
        .collect()
}

/// Vereinfacht eine Rohgeometrie typgerecht.
///
/// Polygon-Ringe werden für die Vereinfachung geschlossen und anschließend
/// wieder geöffnet, damit der Ring erhalten bleibt.
pub fn simplify_geometry(geometry: RawGeometry, tolerance: f64) -> RawGeometry {
    if tolerance <= 0.0 {
        return geometry;
    }
    match geometry {
        RawGeometry::LineString(points) => RawGeometry::LineString(simplify(&points, tolerance)),
        RawGeometry::Polygon(mut ring) => {
            let Some(&first) = ring.first() else {
                return RawGeometry::Polygon(ring);
            };
            ring.push(first);
            let mut simplified = simplify(&ring, tolerance);
            simplified.pop();
            RawGeometry::Polygon(simplified)
        }
    }
}
