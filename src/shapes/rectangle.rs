// src/shapes/rectangle.rs
use crate::error::GeometryResult;
use crate::polygon::Polygon;
use crate::shapes::LineSegment;
use crate::types::{Bounds2D, DVec2, Point2D, VectorOps};
use crate::utils::constants;
use serde::{Deserialize, Serialize};

/// Ein Viereck aus vier Eckpunkten in der Reihenfolge
/// [unten links, unten rechts, oben rechts, oben links],
/// gegen den Uhrzeigersinn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    vertices: [Point2D; 4],
}

impl Rectangle {
    pub fn new(v0: Point2D, v1: Point2D, v2: Point2D, v3: Point2D) -> Self {
        Self {
            vertices: [v0, v1, v2, v3],
        }
    }

    /// Achsenparalleles Rechteck aus Koordinatengrenzen
    pub fn from_bounds(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> GeometryResult<Self> {
        let bounds = Bounds2D::new(Point2D::new(x_min, y_min), Point2D::new(x_max, y_max))?;
        let [v0, v1, v2, v3] = bounds.corners();
        Ok(Self::new(v0, v1, v2, v3))
    }

    /// Quadrat mit Seitenlänge `size` um ein Zentrum, ausgerichtet an einer
    /// Richtung; Richtung und Normale werden normalisiert
    pub fn from_center_size(center: Point2D, size: f64, direction: DVec2) -> Self {
        let half = size / 2.0;
        let dir = direction.normalize_or_zero();
        let normal = dir.perpendicular();

        let along = dir * half;
        let up = normal * half;

        Self::new(
            center - along - up,
            center + along - up,
            center + along + up,
            center - along + up,
        )
    }

    pub fn vertices(&self) -> &[Point2D; 4] {
        &self.vertices
    }

    /// Seitenlänge entlang der unteren Kante
    pub fn width(&self) -> f64 {
        self.vertices[0].distance_to(self.vertices[1])
    }

    /// Seitenlänge entlang der linken Kante
    pub fn height(&self) -> f64 {
        self.vertices[0].distance_to(self.vertices[3])
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points_iter(self.vertices.iter().copied()).unwrap_or_else(Bounds2D::empty)
    }

    /// Die vier Kanten in Vertex-Reihenfolge
    pub fn edges(&self) -> [LineSegment; 4] {
        [
            LineSegment::new(self.vertices[0], self.vertices[1]),
            LineSegment::new(self.vertices[1], self.vertices[2]),
            LineSegment::new(self.vertices[2], self.vertices[3]),
            LineSegment::new(self.vertices[3], self.vertices[0]),
        ]
    }

    /// Mittelpunkt (arithmetisches Mittel der Eckpunkte)
    pub fn center(&self) -> Point2D {
        let sum = self
            .vertices
            .iter()
            .fold(DVec2::ZERO, |acc, v| acc + v.to_vec2());
        Point2D::from_vec2(sum / 4.0)
    }

    /// Punkt-Test über die achsenparallele Bounding Box.
    ///
    /// Für gedrehte Rechtecke ist das nur eine Näherung: Punkte zwischen dem
    /// gedrehten Rand und der umschließenden Box werden als enthalten gemeldet.
    pub fn contains_point(&self, point: Point2D) -> bool {
        self.bounds().expand(constants::SHAPE_EPSILON).contains_point(point)
    }

    /// Prüft ob Breite und Höhe übereinstimmen
    pub fn is_square(&self) -> bool {
        (self.width() - self.height()).abs() < constants::SHAPE_EPSILON
    }
}

impl From<Rectangle> for Polygon {
    fn from(rectangle: Rectangle) -> Self {
        let [v0, v1, v2, v3] = rectangle.vertices;
        Polygon::rectangle(v0, v1, v2, v3)
    }
}
