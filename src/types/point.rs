// src/types/point.rs
use crate::utils::constants;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Ein Punkt in der Ebene.
///
/// Punkte sind Orte, [`DVec2`] sind Verschiebungen; die Differenz zweier
/// Punkte ist ein Vektor, Punkt plus Vektor ist wieder ein Punkt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Der Koordinatenursprung (0, 0)
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance_to(&self, other: Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn distance_squared_to(&self, other: Point2D) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    /// Mittelpunkt der Strecke zu einem anderen Punkt
    pub fn midpoint_to(&self, other: Point2D) -> Point2D {
        Point2D::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Toleranzbasierte Gleichheit; beide Koordinatendifferenzen müssen unter der Toleranz liegen
    pub fn equals(&self, other: Point2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }

    /// Gleichheit mit der Standardtoleranz
    pub fn nearly_equals(&self, other: Point2D) -> bool {
        self.equals(other, constants::EPSILON)
    }

    /// Prüft ob der Punkt (innerhalb der Toleranz) im Ursprung liegt
    pub fn is_origin(&self, tolerance: f64) -> bool {
        self.x.abs() < tolerance && self.y.abs() < tolerance
    }

    pub fn to_vec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_vec2(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<DVec2> for Point2D {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point2D> for DVec2 {
    fn from(p: Point2D) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl Sub for Point2D {
    type Output = DVec2;

    fn sub(self, other: Point2D) -> DVec2 {
        DVec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Add<DVec2> for Point2D {
    type Output = Point2D;

    fn add(self, offset: DVec2) -> Point2D {
        Point2D::new(self.x + offset.x, self.y + offset.y)
    }
}

impl Sub<DVec2> for Point2D {
    type Output = Point2D;

    fn sub(self, offset: DVec2) -> Point2D {
        Point2D::new(self.x - offset.x, self.y - offset.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, scalar: f64) -> Point2D {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}
