// src/shapes/measure.rs
use crate::polygon::{Polygon, PolygonProperties};
use crate::shapes::{Circle, Ellipse, Line, LineSegment, Rectangle, Triangle};
use crate::types::Point2D;

/// Geometrische Elemente mit einem Längenmaß
pub trait Measurable1D {
    fn length(&self) -> f64;
}

/// Flächige Elemente mit Flächeninhalt und Umfang
pub trait Measurable2D {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

/// Die Länge einer Fläche ist ihr Umfang
impl<T: Measurable2D> Measurable1D for T {
    fn length(&self) -> f64 {
        self.perimeter()
    }
}

impl Measurable1D for Point2D {
    fn length(&self) -> f64 {
        0.0
    }
}

impl Measurable1D for LineSegment {
    fn length(&self) -> f64 {
        LineSegment::length(self)
    }
}

impl Measurable1D for Line {
    fn length(&self) -> f64 {
        f64::INFINITY
    }
}

impl Measurable2D for Circle {
    fn area(&self) -> f64 {
        Circle::area(self)
    }

    fn perimeter(&self) -> f64 {
        self.circumference()
    }
}

impl Measurable2D for Rectangle {
    fn area(&self) -> f64 {
        Rectangle::area(self)
    }

    fn perimeter(&self) -> f64 {
        Rectangle::perimeter(self)
    }
}

impl Measurable2D for Polygon {
    fn area(&self) -> f64 {
        PolygonProperties::area(self)
    }

    fn perimeter(&self) -> f64 {
        PolygonProperties::perimeter(self)
    }
}

impl Measurable2D for Triangle {
    fn area(&self) -> f64 {
        Triangle::area(self)
    }

    fn perimeter(&self) -> f64 {
        Triangle::perimeter(self)
    }
}

impl Measurable2D for Ellipse {
    fn area(&self) -> f64 {
        Ellipse::area(self)
    }

    fn perimeter(&self) -> f64 {
        Ellipse::perimeter(self)
    }
}
