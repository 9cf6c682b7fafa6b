// src/shapes/circle.rs
use crate::error::{GeometryError, GeometryResult};
use crate::types::{Bounds2D, DVec2, Point2D};
use crate::utils::constants;
use serde::{Deserialize, Serialize};

/// Ein Kreis aus Mittelpunkt und Radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Point2D,
    radius: f64,
}

impl Circle {
    /// Erstellt einen Kreis; negative Radien werden abgelehnt
    pub fn new(center: Point2D, radius: f64) -> GeometryResult<Self> {
        if radius < 0.0 {
            return Err(GeometryError::InvalidDimension {
                message: format!("circle radius must be non-negative, got {}", radius),
            });
        }
        Ok(Self { center, radius })
    }

    /// Kreis über den Endpunkten eines Durchmessers
    pub fn from_diameter(p1: Point2D, p2: Point2D) -> Self {
        Self {
            center: p1.midpoint_to(p2),
            radius: p1.distance_to(p2) / 2.0,
        }
    }

    pub fn center(&self) -> Point2D {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        constants::PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * constants::PI * self.radius
    }

    pub fn bounds(&self) -> Bounds2D {
        let r = DVec2::splat(self.radius);
        Bounds2D::from_points(self.center - r, self.center + r)
    }

    /// Prüft ob ein Punkt in der Kreisscheibe liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point2D) -> bool {
        self.center.distance_to(point) <= self.radius + constants::SHAPE_EPSILON
    }

    /// Toleranzbasierte Gleichheit von Mittelpunkt und Radius
    pub fn equals(&self, other: &Circle, tolerance: f64) -> bool {
        self.center.equals(other.center, tolerance) && (self.radius - other.radius).abs() < tolerance
    }
}
