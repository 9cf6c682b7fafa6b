// src/polygon/properties.rs
use crate::algorithms::intersection::segment_segment_intersection;
use crate::polygon::Polygon;
use crate::types::Point2D;
use crate::utils::{angles, constants, statistics};

/// Trait für geometrische Eigenschaften von Polygonen.
pub trait PolygonProperties {
    /// Fläche über die Shoelace-Formel (immer nicht-negativ)
    fn area(&self) -> f64;

    /// Umfang einschließlich der impliziten Schlusskante
    fn perimeter(&self) -> f64;

    /// Punkt-im-Polygon-Test (Ray-Casting mit Randbehandlung).
    /// Punkte auf Kanten und Vertices gelten als enthalten.
    fn contains_point(&self, point: Point2D) -> bool;

    /// Prüft ob das Polygon konvex ist; weniger als vier Vertices sind trivial konvex
    fn is_convex(&self) -> bool;

    /// Prüft ob das Polygon frei von Selbstüberschneidungen ist.
    /// Quadratisch in der Kantenzahl.
    fn is_simple(&self) -> bool;

    /// Prüft ob alle Kanten gleich lang und alle Innenwinkel gleich groß sind
    fn is_regular(&self) -> bool;

    /// Windung des Polygons, bestimmt über das Vorzeichen der Fläche
    fn orientation(&self) -> Orientation;

    /// Flächengewichteter Schwerpunkt; fällt bei entarteter Fläche auf das
    /// Vertex-Mittel zurück
    fn geometric_centroid(&self) -> Point2D;
}

/// Gibt die Windung eines Polygons an.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Doppelte vorzeichenbehaftete Fläche (Shoelace-Summe)
fn signed_area_doubled(polygon: &Polygon) -> f64 {
    let vertices = polygon.vertices();
    let n = vertices.len();

    let mut sum = 0.0;
    for i in 0..n {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];
        sum += p1.x * p2.y - p2.x * p1.y;
    }
    sum
}

impl PolygonProperties for Polygon {
    fn area(&self) -> f64 {
        (signed_area_doubled(self) * 0.5).abs()
    }

    fn perimeter(&self) -> f64 {
        (0..self.len()).map(|i| self.edge(i).length()).sum()
    }

    fn contains_point(&self, point: Point2D) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();

        let mut inside = false;
        let mut j = n - 1;

        for i in 0..n {
            let vi = vertices[i];
            let vj = vertices[j];

            // Kreuzt der Strahl von `point` nach rechts die Kante (vj, vi)?
            // Die Vorzeichenbedingung garantiert vi.y != vj.y.
            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        if inside {
            return true;
        }

        // Ray-Casting ist direkt auf dem Rand nicht verlässlich; Punkte nahe
        // einem Vertex oder einer Kante werden als enthalten nachklassifiziert.
        vertices
            .iter()
            .any(|v| v.equals(point, constants::SHAPE_EPSILON))
            || (0..n).any(|i| self.edge(i).contains_point_eps(point, constants::SHAPE_EPSILON))
    }

    fn is_convex(&self) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();

        if n < 4 {
            return true;
        }

        let mut sign: Option<bool> = None;

        for i in 0..n {
            let p1 = vertices[i];
            let p2 = vertices[(i + 1) % n];
            let p3 = vertices[(i + 2) % n];

            // Kreuzprodukt aufeinanderfolgender Kantenvektoren
            let cross = (p2.x - p1.x) * (p3.y - p2.y) - (p2.y - p1.y) * (p3.x - p2.x);

            if cross.abs() <= constants::SHAPE_EPSILON {
                continue;
            }

            let current_sign = cross > 0.0;
            match sign {
                None => sign = Some(current_sign),
                Some(expected) if expected != current_sign => return false,
                _ => {}
            }
        }

        true
    }

    fn is_simple(&self) -> bool {
        let n = self.len();

        for i in 0..n {
            for j in (i + 2)..n {
                // Die Schlusskante (n-1, 0) ist zur ersten Kante adjazent
                if i == 0 && j == n - 1 {
                    continue;
                }

                if segment_segment_intersection(&self.edge(i), &self.edge(j), constants::EPSILON)
                    .is_some()
                {
                    return false;
                }
            }
        }

        true
    }

    fn is_regular(&self) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();

        let edge_lengths: Vec<f64> = (0..n).map(|i| self.edge(i).length()).collect();
        if statistics::population_std_dev(&edge_lengths) > constants::SHAPE_EPSILON {
            return false;
        }

        let mut vertex_angles = Vec::with_capacity(n);
        for i in 0..n {
            let prev = vertices[(i + n - 1) % n];
            let cur = vertices[i];
            let next = vertices[(i + 1) % n];

            let v1 = prev - cur;
            let v2 = next - cur;
            let len1 = v1.length();
            let len2 = v2.length();
            if len1 < constants::SHAPE_EPSILON || len2 < constants::SHAPE_EPSILON {
                return false;
            }

            let cos_angle = (v1.dot(v2) / (len1 * len2)).clamp(-1.0, 1.0);
            vertex_angles.push(angles::rad_to_deg(cos_angle.acos()));
        }

        statistics::population_std_dev(&vertex_angles) < constants::SHAPE_EPSILON
    }

    fn orientation(&self) -> Orientation {
        let doubled = signed_area_doubled(self);

        if doubled.abs() < constants::SHAPE_EPSILON * self.len() as f64 {
            Orientation::Collinear
        } else if doubled > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    fn geometric_centroid(&self) -> Point2D {
        let vertices = self.vertices();
        let n = vertices.len();

        let doubled = signed_area_doubled(self);
        if doubled.abs() < constants::SHAPE_EPSILON * n as f64 {
            return self.center();
        }

        let mut centroid_x = 0.0;
        let mut centroid_y = 0.0;

        for i in 0..n {
            let p1 = vertices[i];
            let p2 = vertices[(i + 1) % n];
            let factor = p1.x * p2.y - p2.x * p1.y;
            centroid_x += (p1.x + p2.x) * factor;
            centroid_y += (p1.y + p2.y) * factor;
        }

        let inv_area_factor = 1.0 / (3.0 * doubled);
        Point2D::new(centroid_x * inv_area_factor, centroid_y * inv_area_factor)
    }
}
