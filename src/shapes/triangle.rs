// src/shapes/triangle.rs
use crate::error::{GeometryError, GeometryResult};
use crate::polygon::{Polygon, PolygonProperties};
use crate::shapes::Circle;
use crate::types::{Bounds2D, Point2D};
use crate::utils::{angles, constants};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ein Dreieck als spezialisiertes Polygon mit genau drei Eckpunkten,
/// gegen den Uhrzeigersinn orientiert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    pub fn new(p1: Point2D, p2: Point2D, p3: Point2D) -> Self {
        Self {
            polygon: Polygon::triangle(p1, p2, p3),
        }
    }

    /// Konstruktion aus einem Slice mit genau drei Punkten
    pub fn from_points(points: &[Point2D]) -> GeometryResult<Self> {
        match points {
            [p1, p2, p3] => Ok(Self::new(*p1, *p2, *p3)),
            _ if points.len() < 3 => Err(GeometryError::InsufficientVertices {
                expected: 3,
                actual: points.len(),
            }),
            _ => Err(GeometryError::InvalidDimension {
                message: format!("triangle requires exactly 3 vertices, got {}", points.len()),
            }),
        }
    }

    /// Konstruktion aus drei Seitenlängen; die Basis `a` liegt auf der
    /// X-Achse, der dritte Eckpunkt folgt aus dem Kosinussatz
    pub fn from_sides(a: f64, b: f64, c: f64) -> GeometryResult<Self> {
        if a <= 0.0 || b <= 0.0 || c <= 0.0 {
            return Err(GeometryError::InvalidDimension {
                message: format!(
                    "triangle side lengths must be positive, got {}, {} and {}",
                    a, b, c
                ),
            });
        }
        if a + b <= c || a + c <= b || b + c <= a {
            return Err(GeometryError::TriangleInequality { a, b, c });
        }

        let apex_x = (a * a + c * c - b * b) / (2.0 * a);
        let apex_y = (c * c - apex_x * apex_x).max(0.0).sqrt();

        Ok(Self::new(
            Point2D::origin(),
            Point2D::new(a, 0.0),
            Point2D::new(apex_x, apex_y),
        ))
    }

    pub fn vertices(&self) -> &[Point2D] {
        self.polygon.vertices()
    }

    pub fn as_polygon(&self) -> &Polygon {
        &self.polygon
    }

    fn corner_points(&self) -> (Point2D, Point2D, Point2D) {
        (
            self.polygon.vertex(0),
            self.polygon.vertex(1),
            self.polygon.vertex(2),
        )
    }

    /// Seitenlängen (a, b, c) mit a = |p1p2|, b = |p2p3|, c = |p3p1|
    pub fn side_lengths(&self) -> (f64, f64, f64) {
        let (p1, p2, p3) = self.corner_points();
        (
            p1.distance_to(p2),
            p2.distance_to(p3),
            p3.distance_to(p1),
        )
    }

    /// Innenwinkel (A, B, C) in Grad, jeweils gegenüber der gleichnamigen Seite
    pub fn angles(&self) -> (f64, f64, f64) {
        let (a, b, c) = self.side_lengths();
        if a < constants::SHAPE_EPSILON
            || b < constants::SHAPE_EPSILON
            || c < constants::SHAPE_EPSILON
        {
            return (0.0, 0.0, 0.0);
        }

        let cos_a = ((b * b + c * c - a * a) / (2.0 * b * c)).clamp(-1.0, 1.0);
        let cos_b = ((a * a + c * c - b * b) / (2.0 * a * c)).clamp(-1.0, 1.0);
        let cos_c = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);

        (
            angles::rad_to_deg(cos_a.acos()),
            angles::rad_to_deg(cos_b.acos()),
            angles::rad_to_deg(cos_c.acos()),
        )
    }

    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    pub fn perimeter(&self) -> f64 {
        self.polygon.perimeter()
    }

    pub fn contains_point(&self, point: Point2D) -> bool {
        self.polygon.contains_point(point)
    }

    pub fn bounds(&self) -> Bounds2D {
        self.polygon.bounds()
    }

    /// Arithmetisches Mittel der Eckpunkte
    pub fn center(&self) -> Point2D {
        self.polygon.center()
    }

    /// Umkreismittelpunkt; für (nahezu) kollineare Eckpunkte das Zentrum
    pub fn circumcenter(&self) -> Point2D {
        let (p1, p2, p3) = self.corner_points();

        let d = 2.0 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y));
        if d.abs() < constants::SHAPE_EPSILON {
            return self.center();
        }

        let sq1 = p1.x * p1.x + p1.y * p1.y;
        let sq2 = p2.x * p2.x + p2.y * p2.y;
        let sq3 = p3.x * p3.x + p3.y * p3.y;

        let ux = (sq1 * (p2.y - p3.y) + sq2 * (p3.y - p1.y) + sq3 * (p1.y - p2.y)) / d;
        let uy = (sq1 * (p3.x - p2.x) + sq2 * (p1.x - p3.x) + sq3 * (p2.x - p1.x)) / d;

        Point2D::new(ux, uy)
    }

    /// Inkreismittelpunkt; jeder Eckpunkt geht mit der Länge seiner
    /// gegenüberliegenden Seite gewichtet ein
    pub fn incenter(&self) -> Point2D {
        let (a, b, c) = self.side_lengths();
        let perimeter = a + b + c;
        if perimeter < constants::SHAPE_EPSILON {
            return self.center();
        }

        let (p1, p2, p3) = self.corner_points();
        Point2D::new(
            (b * p1.x + c * p2.x + a * p3.x) / perimeter,
            (b * p1.y + c * p2.y + a * p3.y) / perimeter,
        )
    }

    /// Höhenschnittpunkt über die Euler-Gerade: H = A + B + C - 2U
    pub fn orthocenter(&self) -> Point2D {
        let (p1, p2, p3) = self.corner_points();
        let sum = p1.to_vec2() + p2.to_vec2() + p3.to_vec2();
        Point2D::from_vec2(sum - 2.0 * self.circumcenter().to_vec2())
    }

    /// Schwerpunkt (Schnittpunkt der Seitenhalbierenden)
    pub fn centroid(&self) -> Point2D {
        self.center()
    }

    /// Umkreisradius; unendlich für entartete Dreiecke
    pub fn circumradius(&self) -> f64 {
        let (a, b, c) = self.side_lengths();
        let area = self.area();
        if area < constants::SHAPE_EPSILON {
            return f64::INFINITY;
        }
        (a * b * c) / (4.0 * area)
    }

    /// Inkreisradius; 0 für entartete Dreiecke
    pub fn inradius(&self) -> f64 {
        let (a, b, c) = self.side_lengths();
        let s = (a + b + c) / 2.0;
        if s < constants::SHAPE_EPSILON {
            return 0.0;
        }
        self.area() / s
    }

    pub fn is_right_angled(&self) -> bool {
        let (a, b, c) = self.side_lengths();
        let mut sides = [a, b, c];
        sides.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
        (sides[0] * sides[0] + sides[1] * sides[1] - sides[2] * sides[2]).abs()
            < constants::SHAPE_EPSILON
    }

    pub fn is_equilateral(&self) -> bool {
        let (a, b, c) = self.side_lengths();
        (a - b).abs() < constants::SHAPE_EPSILON
            && (b - c).abs() < constants::SHAPE_EPSILON
            && (a - c).abs() < constants::SHAPE_EPSILON
    }

    pub fn is_isosceles(&self) -> bool {
        let (a, b, c) = self.side_lengths();
        (a - b).abs() < constants::SHAPE_EPSILON
            || (b - c).abs() < constants::SHAPE_EPSILON
            || (a - c).abs() < constants::SHAPE_EPSILON
    }

    pub fn circumcircle(&self) -> GeometryResult<Circle> {
        Circle::new(self.circumcenter(), self.circumradius())
    }

    pub fn incircle(&self) -> GeometryResult<Circle> {
        Circle::new(self.incenter(), self.inradius())
    }
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        triangle.polygon
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p1, p2, p3) = self.corner_points();
        write!(f, "Triangle({:?}, {:?}, {:?})", p1, p2, p3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point2D::origin(),
            Point2D::new(3.0, 0.0),
            Point2D::new(0.0, 4.0),
        )
    }

    #[test]
    fn test_from_points_validation() {
        let too_few = [Point2D::origin(), Point2D::new(1.0, 0.0)];
        assert!(matches!(
            Triangle::from_points(&too_few),
            Err(GeometryError::InsufficientVertices { expected: 3, actual: 2 })
        ));

        let too_many = [
            Point2D::origin(),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
        ];
        assert!(Triangle::from_points(&too_many).is_err());

        let exact = [
            Point2D::origin(),
            Point2D::new(3.0, 0.0),
            Point2D::new(0.0, 4.0),
        ];
        assert!(Triangle::from_points(&exact).is_ok());
    }

    #[test]
    fn test_area_and_perimeter() {
        let tri = right_triangle();
        assert_relative_eq!(tri.area(), 6.0);
        assert_relative_eq!(tri.perimeter(), 12.0);
    }

    #[test]
    fn test_side_lengths() {
        let (a, b, c) = right_triangle().side_lengths();
        assert_relative_eq!(a, 3.0);
        assert_relative_eq!(b, 5.0);
        assert_relative_eq!(c, 4.0);
    }

    #[test]
    fn test_angles() {
        let (angle_a, angle_b, angle_c) = right_triangle().angles();
        assert_relative_eq!(angle_a, 36.8699, epsilon = 1e-4);
        assert_relative_eq!(angle_b, 90.0, epsilon = 1e-9);
        assert_relative_eq!(angle_c, 53.1301, epsilon = 1e-4);

        let scalene = Triangle::new(
            Point2D::origin(),
            Point2D::new(4.0, 0.0),
            Point2D::new(1.0, 3.0),
        );
        let (a, b, c) = scalene.angles();
        assert_relative_eq!(a + b + c, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_from_sides_reconstructs_side_lengths() {
        let tri = Triangle::from_sides(3.0, 4.0, 5.0).unwrap();
        let (a, b, c) = tri.side_lengths();
        assert_relative_eq!(a, 3.0, epsilon = 1e-12);
        assert_relative_eq!(b, 4.0, epsilon = 1e-12);
        assert_relative_eq!(c, 5.0, epsilon = 1e-12);

        assert_relative_eq!(tri.area(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(tri.inradius(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tri.circumradius(), 2.5, epsilon = 1e-12);

        // Gegenüber der längsten Seite liegt der rechte Winkel
        let (_, _, angle_c) = tri.angles();
        assert_relative_eq!(angle_c, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_from_sides_validation() {
        assert!(matches!(
            Triangle::from_sides(1.0, 1.0, 3.0),
            Err(GeometryError::TriangleInequality { .. })
        ));
        assert!(matches!(
            Triangle::from_sides(0.0, 1.0, 1.0),
            Err(GeometryError::InvalidDimension { .. })
        ));
        assert!(Triangle::from_sides(2.0, 2.0, 2.0).is_ok());
    }

    #[test]
    fn test_circumcenter() {
        let tri = right_triangle();
        let circumcenter = tri.circumcenter();
        assert!(circumcenter.equals(Point2D::new(1.5, 2.0), 1e-9));

        // Der Umkreismittelpunkt ist von allen Eckpunkten gleich weit entfernt
        for vertex in tri.vertices() {
            assert_relative_eq!(circumcenter.distance_to(*vertex), 2.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_incenter() {
        let incenter = right_triangle().incenter();
        assert!(incenter.equals(Point2D::new(1.0, 1.0), 1e-9));
    }

    #[test]
    fn test_orthocenter() {
        // Beim rechtwinkligen Dreieck fällt der Höhenschnittpunkt auf den
        // Scheitel des rechten Winkels
        let orthocenter = right_triangle().orthocenter();
        assert!(orthocenter.equals(Point2D::origin(), 1e-9));
    }

    #[test]
    fn test_centroid() {
        let centroid = right_triangle().centroid();
        assert!(centroid.equals(Point2D::new(1.0, 4.0 / 3.0), 1e-9));
    }

    #[test]
    fn test_degenerate_triangle() {
        let flat = Triangle::new(
            Point2D::origin(),
            Point2D::new(1.0, 0.0),
            Point2D::new(2.0, 0.0),
        );
        assert_eq!(flat.circumcenter(), flat.center());
        assert_eq!(flat.circumradius(), f64::INFINITY);
        assert_relative_eq!(flat.inradius(), 0.0);
    }

    #[test]
    fn test_classification() {
        assert!(right_triangle().is_right_angled());
        assert!(!right_triangle().is_equilateral());

        let scalene = Triangle::new(
            Point2D::origin(),
            Point2D::new(4.0, 0.0),
            Point2D::new(1.0, 3.0),
        );
        assert!(!scalene.is_right_angled());

        let equilateral = Triangle::new(
            Point2D::origin(),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.5, 3.0_f64.sqrt() / 2.0),
        );
        assert!(equilateral.is_equilateral());
        assert!(equilateral.is_isosceles());

        let isosceles = Triangle::new(
            Point2D::origin(),
            Point2D::new(2.0, 0.0),
            Point2D::new(1.0, 1.0),
        );
        assert!(isosceles.is_isosceles());
        assert!(!isosceles.is_equilateral());
    }

    #[test]
    fn test_circles() {
        let tri = right_triangle();

        let circumcircle = tri.circumcircle().unwrap();
        assert_relative_eq!(circumcircle.radius(), 2.5, epsilon = 1e-9);
        assert!(circumcircle.center().equals(Point2D::new(1.5, 2.0), 1e-9));

        let incircle = tri.incircle().unwrap();
        assert_relative_eq!(incircle.radius(), 1.0, epsilon = 1e-9);
        assert!(incircle.center().equals(Point2D::new(1.0, 1.0), 1e-9));
    }

    #[test]
    fn test_contains_point() {
        let tri = right_triangle();
        assert!(tri.contains_point(Point2D::new(1.0, 1.0)));
        assert!(tri.contains_point(Point2D::origin()));
        assert!(!tri.contains_point(Point2D::new(3.0, 4.0)));
    }

    #[test]
    fn test_into_polygon() {
        let polygon: Polygon = right_triangle().into();
        assert_eq!(polygon.len(), 3);
        assert_relative_eq!(polygon.area(), 6.0);
    }
}
