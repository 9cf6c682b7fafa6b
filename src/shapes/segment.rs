// src/shapes/segment.rs
use crate::types::{DVec2, Point2D};
use crate::utils::constants;
use serde::{Deserialize, Serialize};

/// Eine gerichtete Strecke zwischen zwei Punkten.
///
/// Entartete Strecken (start ≈ end) sind gültig; Parameter-Abfragen liefern
/// dann t = 0 statt durch Null zu teilen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point2D,
    pub end: Point2D,
}

impl LineSegment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn midpoint(&self) -> Point2D {
        self.start.midpoint_to(self.end)
    }

    /// Verschiebungsvektor von start nach end
    pub fn delta(&self) -> DVec2 {
        self.end - self.start
    }

    /// Normalisierte Richtung; Nullvektor für entartete Strecken
    pub fn direction(&self) -> DVec2 {
        self.delta().normalize_or_zero()
    }

    /// Unbeschränkter Parameter t der Projektion eines Punktes auf die Trägergerade.
    /// t = 0 liegt auf `start`, t = 1 auf `end`; entartete Strecken liefern 0.
    pub fn parameter_of(&self, point: Point2D) -> f64 {
        let delta = self.delta();
        let length_sq = delta.length_squared();
        if length_sq < constants::DEGENERATE_LENGTH_SQ {
            return 0.0;
        }
        (point - self.start).dot(delta) / length_sq
    }

    /// Punkt zum Parameter t (unbeschränkt)
    pub fn point_at(&self, t: f64) -> Point2D {
        self.start + self.delta() * t
    }

    /// Nächster Punkt auf der Strecke (Parameter auf [0, 1] geklemmt)
    pub fn closest_point(&self, point: Point2D) -> Point2D {
        let t = self.parameter_of(point).clamp(0.0, 1.0);
        self.point_at(t)
    }

    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        point.distance_to(self.closest_point(point))
    }

    /// Prüft ob ein Punkt auf der Strecke liegt
    pub fn contains_point(&self, point: Point2D) -> bool {
        self.contains_point_eps(point, constants::EPSILON)
    }

    /// Prüft ob ein Punkt auf der Strecke liegt, mit custom Toleranz
    pub fn contains_point_eps(&self, point: Point2D, tolerance: f64) -> bool {
        let t = self.parameter_of(point);
        (0.0..=1.0).contains(&t) && self.distance_to_point(point) < tolerance
    }

    /// Strecke mit vertauschten Endpunkten
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}
