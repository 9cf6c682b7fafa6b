// src/algorithms/angular.rs
use crate::polygon::Polygon;
use crate::types::{DVec2, Point2D, VectorOps};
use crate::utils::{angles, constants};

/// Gerichteter Winkel (Grad, [0, 360)) von Strahl `p2 -> p1` nach
/// Strahl `p2 -> p3`, gegen den Uhrzeigersinn gemessen.
///
/// Fällt einer der Strahlen unter die Toleranz zusammen, ist der Winkel 0.
pub fn angle_between_three_points(
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    tolerance: f64,
) -> f64 {
    let v1 = p1 - p2;
    let v2 = p3 - p2;

    if v1.length() < tolerance || v2.length() < tolerance {
        return 0.0;
    }

    angles::normalize_angle_deg(angles::rad_to_deg(v2.angle_rad() - v1.angle_rad()))
}

/// Innenwinkel (Grad) an jedem Vertex eines gegen den Uhrzeigersinn
/// gewundenen Polygons, in Vertex-Reihenfolge
pub fn polygon_vertex_angles(polygon: &Polygon, tolerance: f64) -> Vec<f64> {
    let n = polygon.len();
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let prev = polygon.vertex((i + n - 1) % n);
        let current = polygon.vertex(i);
        let next = polygon.vertex((i + 1) % n);

        let exterior = angle_between_three_points(prev, current, next, tolerance);
        result.push(angles::normalize_angle_deg(360.0 - exterior));
    }

    result
}

/// Polarwinkel (Grad, [0, 360)) eines Punkts von einem Referenzpunkt aus;
/// 0 für zusammenfallende Punkte
pub fn point_polar_angle(point: Point2D, reference: Point2D, tolerance: f64) -> f64 {
    let v = point - reference;
    if v.length() < tolerance {
        return 0.0;
    }
    v.angle_deg()
}

/// Ungerichteter Winkel zweier Vektoren in Grad, [0, 180]
pub fn angle_between(v1: DVec2, v2: DVec2) -> f64 {
    angles::rad_to_deg(angle_between_rad(v1, v2))
}

/// Ungerichteter Winkel zweier Vektoren in Radiant, [0, π];
/// 0 sobald ein Vektor entartet ist
pub fn angle_between_rad(v1: DVec2, v2: DVec2) -> f64 {
    if v1.length_squared() < constants::DEGENERATE_LENGTH_SQ
        || v2.length_squared() < constants::DEGENERATE_LENGTH_SQ
    {
        return 0.0;
    }

    let cos = v1.dot(v2) / (v1.length() * v2.length());
    cos.clamp(-1.0, 1.0).acos()
}

/// Prüft Rechtwinkligkeit über das Skalarprodukt
pub fn are_perpendicular(v1: DVec2, v2: DVec2, tolerance: f64) -> bool {
    v1.dot(v2).abs() < tolerance
}

/// Prüft Parallelität (gleich- oder gegenläufig) über das Kreuzprodukt
pub fn are_parallel(v1: DVec2, v2: DVec2, tolerance: f64) -> bool {
    v1.cross(v2).abs() < tolerance
}
