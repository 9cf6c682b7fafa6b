// src/shapes/shape.rs
use crate::polygon::{Polygon, PolygonProperties};
use crate::shapes::{Circle, Ellipse, Line, LineSegment, Rectangle, Triangle};
use crate::types::{Bounds2D, Point2D};
use serde::{Deserialize, Serialize};

/// Geschlossene Summe aller Geometrie-Typen für generische Abfragen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Segment(LineSegment),
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
    Polygon(Polygon),
    Triangle(Triangle),
    Ellipse(Ellipse),
}

impl Shape {
    /// Achsenparalleles Begrenzungsrechteck, `None` für unbegrenzte Geometrien
    pub fn bounds(&self) -> Option<Bounds2D> {
        match self {
            Shape::Segment(segment) => Some(Bounds2D::from_points(segment.start, segment.end)),
            Shape::Line(_) => None,
            Shape::Circle(circle) => Some(circle.bounds()),
            Shape::Rectangle(rectangle) => Some(rectangle.bounds()),
            Shape::Polygon(polygon) => Some(polygon.bounds()),
            Shape::Triangle(triangle) => Some(triangle.bounds()),
            Shape::Ellipse(ellipse) => Some(ellipse.bounds()),
        }
    }

    /// Enthaltensein-Test, bei Kurven ein Auf-der-Kurve-Test
    pub fn contains_point(&self, point: Point2D) -> bool {
        match self {
            Shape::Segment(segment) => segment.contains_point(point),
            Shape::Line(line) => line.contains_point(point),
            Shape::Circle(circle) => circle.contains_point(point),
            Shape::Rectangle(rectangle) => rectangle.contains_point(point),
            Shape::Polygon(polygon) => polygon.contains_point(point),
            Shape::Triangle(triangle) => triangle.contains_point(point),
            Shape::Ellipse(ellipse) => ellipse.contains_point(point),
        }
    }
}

impl From<LineSegment> for Shape {
    fn from(segment: LineSegment) -> Self {
        Shape::Segment(segment)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}
