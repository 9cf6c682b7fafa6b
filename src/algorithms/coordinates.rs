// src/algorithms/coordinates.rs
use crate::error::{GeometryError, GeometryResult};
use crate::types::{Bounds2D, DVec2, Point2D, VectorOps};
use crate::utils::{angles, constants};

/// Kartesische Koordinaten zu Polarkoordinaten `(Abstand, Winkel in Grad)`
/// relativ zu einem Referenzpunkt; zusammenfallende Punkte liefern `(0, 0)`
pub fn cartesian_to_polar(point: Point2D, reference: Point2D, tolerance: f64) -> (f64, f64) {
    let delta = point - reference;
    let distance = delta.length();

    if distance < tolerance {
        return (0.0, 0.0);
    }

    (distance, delta.angle_deg())
}

/// Polarkoordinaten zurück zu kartesischen Koordinaten
pub fn polar_to_cartesian(distance: f64, angle_deg: f64, reference: Point2D) -> Point2D {
    reference + DVec2::from_angle(angles::deg_to_rad(angle_deg)) * distance
}

/// Sortiert Punkte nach Polarwinkel um einen Referenzpunkt, bei gleichem
/// Winkel nach Abstand; `clockwise` kehrt die fertige Reihenfolge um
pub fn sort_points_by_angle(
    points: &[Point2D],
    reference: Point2D,
    clockwise: bool,
) -> Vec<Point2D> {
    let mut keyed: Vec<(f64, f64, Point2D)> = points
        .iter()
        .map(|point| {
            let (distance, angle) =
                cartesian_to_polar(*point, reference, constants::RELATION_EPSILON);
            (angle, distance, *point)
        })
        .collect();

    keyed.sort_by(|a, b| {
        (a.0, a.1)
            .partial_cmp(&(b.0, b.1))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if clockwise {
        keyed.reverse();
    }

    keyed.into_iter().map(|(_, _, point)| point).collect()
}

/// Prüft, ob alle Punkte auf einer gemeinsamen Geraden liegen.
///
/// Weniger als drei Punkte gelten als kollinear. Die Basisrichtung ist der
/// erste vom Startpunkt verschiedene Punkt; sind alle deckungsgleich, gilt
/// die Menge ebenfalls als kollinear.
pub fn are_collinear(points: &[Point2D], tolerance: f64) -> bool {
    if points.len() < 3 {
        return true;
    }

    let origin = points[0];
    let mut base = points[1] - origin;

    if base.length() < tolerance {
        match points
            .iter()
            .skip(2)
            .map(|p| *p - origin)
            .find(|v| v.length() >= tolerance)
        {
            Some(v) => base = v,
            None => return true,
        }
    }

    points
        .iter()
        .skip(2)
        .all(|p| base.cross(*p - origin).abs() <= tolerance)
}

/// Achsenparallele Bounding Box einer Punktmenge
pub fn bounding_box(points: &[Point2D]) -> GeometryResult<Bounds2D> {
    Bounds2D::from_points_iter(points.iter().copied()).ok_or_else(|| {
        GeometryError::EmptyPointSet {
            operation: "bounding_box".to_string(),
        }
    })
}

/// Arithmetischer Schwerpunkt einer Punktmenge
pub fn points_centroid(points: &[Point2D]) -> GeometryResult<Point2D> {
    if points.is_empty() {
        return Err(GeometryError::EmptyPointSet {
            operation: "points_centroid".to_string(),
        });
    }

    let sum = points
        .iter()
        .fold(DVec2::ZERO, |acc, p| acc + p.to_vec2());
    Ok(Point2D::from_vec2(sum / points.len() as f64))
}
