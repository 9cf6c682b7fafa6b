// src/types/bounds.rs
use crate::error::{GeometryError, GeometryResult};
use crate::types::Point2D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> GeometryResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(GeometryError::InvalidDimension {
                message: format!("invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Punkten
    pub fn from_points(p1: Point2D, p2: Point2D) -> Self {
        Self {
            min: Point2D::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point2D::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Leere Bounding Box (ungültig)
    pub fn empty() -> Self {
        Self {
            min: Point2D::new(f64::INFINITY, f64::INFINITY),
            max: Point2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
    }

    /// Prüft ob die Bounding Box leer ist
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        self.min.midpoint_to(self.max)
    }

    /// Fläche der Bounding Box
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    /// Umfang der Bounding Box
    pub fn perimeter(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            2.0 * (self.width() + self.height())
        }
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Prüft ob eine andere Bounding Box vollständig enthalten ist
    pub fn contains_bounds(&self, other: &Bounds2D) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }

        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
    }

    /// Prüft ob sich zwei Bounding Boxes überschneiden
    pub fn intersects(&self, other: &Bounds2D) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Berechnet die Überschneidung zweier Bounding Boxes
    pub fn intersection(&self, other: &Bounds2D) -> Self {
        if !self.intersects(other) {
            return Self::empty();
        }

        Self {
            min: Point2D::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point2D::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        }
    }

    /// Vereinigt zwei Bounding Boxes
    pub fn union(&self, other: &Bounds2D) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        Self {
            min: Point2D::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2D::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Erweitert die Bounding Box um einen Margin
    pub fn expand(&self, margin: f64) -> Self {
        if self.is_empty() {
            return *self;
        }

        Self {
            min: Point2D::new(self.min.x - margin, self.min.y - margin),
            max: Point2D::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Berechnet den nächsten Punkt in der Bounding Box zu einem gegebenen Punkt
    pub fn closest_point(&self, point: Point2D) -> Point2D {
        if self.is_empty() {
            return point;
        }

        Point2D::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Berechnet den Abstand von einem Punkt zur Bounding Box; 0 im Inneren
    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        if self.is_empty() {
            return f64::INFINITY;
        }

        if self.contains_point(point) {
            return 0.0;
        }

        point.distance_to(self.closest_point(point))
    }

    /// Erzeugt die vier Eckpunkte der Bounding Box
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,                             // unten links
            Point2D::new(self.max.x, self.min.y), // unten rechts
            self.max,                             // oben rechts
            Point2D::new(self.min.x, self.max.y), // oben links
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Bounds2D(empty)")
        } else {
            write!(f, "Bounds2D({:?} to {:?})", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_validates_order() {
        assert!(Bounds2D::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)).is_ok());
        assert!(Bounds2D::new(Point2D::new(2.0, 0.0), Point2D::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn test_from_points_sorts_coordinates() {
        let b = Bounds2D::from_points(Point2D::new(3.0, -1.0), Point2D::new(-2.0, 4.0));
        assert_eq!(b.min, Point2D::new(-2.0, -1.0));
        assert_eq!(b.max, Point2D::new(3.0, 4.0));
    }

    #[test]
    fn test_from_points_iter() {
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 3.0),
            Point2D::new(2.0, 5.0),
        ];
        let b = Bounds2D::from_points_iter(points).unwrap();
        assert_eq!(b.min, Point2D::new(0.0, 0.0));
        assert_eq!(b.max, Point2D::new(4.0, 5.0));
        assert!(Bounds2D::from_points_iter(std::iter::empty()).is_none());
    }

    #[test]
    fn test_measures() {
        let b = Bounds2D::from_points(Point2D::new(0.0, 0.0), Point2D::new(4.0, 3.0));
        assert_relative_eq!(b.width(), 4.0);
        assert_relative_eq!(b.height(), 3.0);
        assert_relative_eq!(b.area(), 12.0);
        assert_relative_eq!(b.perimeter(), 14.0);
        assert_eq!(b.center(), Point2D::new(2.0, 1.5));
    }

    #[test]
    fn test_containment_and_overlap() {
        let a = Bounds2D::from_points(Point2D::new(0.0, 0.0), Point2D::new(4.0, 4.0));
        let inner = Bounds2D::from_points(Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0));
        let shifted = Bounds2D::from_points(Point2D::new(3.0, 3.0), Point2D::new(6.0, 6.0));
        let apart = Bounds2D::from_points(Point2D::new(10.0, 10.0), Point2D::new(11.0, 11.0));

        assert!(a.contains_point(Point2D::new(2.0, 2.0)));
        assert!(!a.contains_point(Point2D::new(5.0, 2.0)));
        assert!(a.contains_bounds(&inner));
        assert!(!a.contains_bounds(&shifted));
        assert!(a.intersects(&shifted));
        assert!(!a.intersects(&apart));

        let overlap = a.intersection(&shifted);
        assert_eq!(overlap.min, Point2D::new(3.0, 3.0));
        assert_eq!(overlap.max, Point2D::new(4.0, 4.0));
        assert!(a.intersection(&apart).is_empty());

        let combined = a.union(&apart);
        assert_eq!(combined.min, Point2D::new(0.0, 0.0));
        assert_eq!(combined.max, Point2D::new(11.0, 11.0));
    }

    #[test]
    fn test_closest_point_and_distance() {
        let b = Bounds2D::from_points(Point2D::new(0.0, 0.0), Point2D::new(4.0, 3.0));
        assert_eq!(b.closest_point(Point2D::new(5.0, 1.0)), Point2D::new(4.0, 1.0));
        assert_relative_eq!(b.distance_to_point(Point2D::new(5.0, 1.0)), 1.0);
        assert_relative_eq!(b.distance_to_point(Point2D::new(2.0, 1.0)), 0.0);
    }

    #[test]
    fn test_expand() {
        let b = Bounds2D::from_points(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)).expand(0.5);
        assert_eq!(b.min, Point2D::new(-0.5, -0.5));
        assert_eq!(b.max, Point2D::new(1.5, 1.5));
    }
}
