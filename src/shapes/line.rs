// src/shapes/line.rs
use crate::shapes::LineSegment;
use crate::types::{DVec2, Point2D, VectorOps};
use crate::utils::constants;
use serde::{Deserialize, Serialize};

/// Eine unendliche Gerade aus Ankerpunkt und Einheitsrichtung.
///
/// Die Richtung wird bei der Konstruktion normalisiert. Ein (nahezu)
/// verschwindender Richtungsvektor ergibt eine entartete Gerade mit
/// Nullrichtung; Abfragen liefern dann den Anker statt zu scheitern.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    anchor: Point2D,
    direction: DVec2,
}

impl Line {
    pub fn new(anchor: Point2D, direction: DVec2) -> Self {
        Self {
            anchor,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Gerade durch zwei Punkte
    pub fn from_points(a: Point2D, b: Point2D) -> Self {
        Self::new(a, b - a)
    }

    /// Trägergerade einer Strecke
    pub fn from_segment(segment: &LineSegment) -> Self {
        Self::new(segment.start, segment.delta())
    }

    pub fn anchor(&self) -> Point2D {
        self.anchor
    }

    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    /// Punkt zum Geradenparameter t
    pub fn point_at(&self, t: f64) -> Point2D {
        self.anchor + self.direction * t
    }

    /// Fußpunkt des Lots von einem Punkt auf die Gerade
    pub fn closest_point(&self, point: Point2D) -> Point2D {
        let t = (point - self.anchor).dot(self.direction);
        self.point_at(t)
    }

    /// Senkrechter Abstand eines Punktes zur Geraden
    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        (point - self.anchor).cross(self.direction).abs()
    }

    /// Prüft ob ein Punkt auf der Geraden liegt
    pub fn contains_point(&self, point: Point2D) -> bool {
        self.contains_point_eps(point, constants::EPSILON)
    }

    /// Prüft ob ein Punkt auf der Geraden liegt, mit custom Toleranz
    pub fn contains_point_eps(&self, point: Point2D, tolerance: f64) -> bool {
        point.equals(self.closest_point(point), tolerance)
    }

    /// Prüft ob die Richtung entartet (Nullvektor) ist
    pub fn is_degenerate(&self) -> bool {
        self.direction.is_near_zero(constants::EPSILON)
    }
}
