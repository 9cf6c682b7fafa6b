// src/algorithms/query.rs
use crate::algorithms::projection::nearest_point_on_shape;
use crate::polygon::{Polygon, PolygonProperties};
use crate::shapes::{Circle, LineSegment, Shape};
use crate::types::{Point2D, VectorOps};
use serde::{Deserialize, Serialize};

/// Lage eines Punkts relativ zur gerichteten Strecke
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    On,
}

/// Klassifiziert einen Punkt gegen die gerichtete Strecke über das
/// Vorzeichen des Kreuzprodukts; `Left` liegt in Blickrichtung links
pub fn point_side_of_segment(point: Point2D, segment: &LineSegment, tolerance: f64) -> Side {
    let cross = segment.delta().cross(point - segment.start);

    if cross.abs() < tolerance {
        Side::On
    } else if cross > 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

/// Prüft, ob Kreis und Polygon sich überlappen: entweder liegt das
/// Zentrum im Polygon oder eine Kante kommt dem Zentrum näher als der Radius
pub fn circle_polygon_intersect(circle: &Circle, polygon: &Polygon, tolerance: f64) -> bool {
    let center = circle.center();

    if polygon.contains_point(center) {
        return true;
    }

    polygon
        .edges()
        .iter()
        .any(|edge| center.distance_to(edge.closest_point(center)) <= circle.radius() + tolerance)
}

/// Kürzester Abstand eines Punkts zu einer beliebigen Geometrie
pub fn minimum_distance(point: Point2D, shape: &Shape, tolerance: f64) -> f64 {
    nearest_point_on_shape(point, shape, tolerance).1
}

/// Prüft, ob ein Punkt höchstens `distance` von einer Geometrie entfernt ist
pub fn within_distance(point: Point2D, shape: &Shape, distance: f64, tolerance: f64) -> bool {
    minimum_distance(point, shape, tolerance) <= distance + tolerance
}
