// src/algorithms/projection.rs
use crate::algorithms::intersection::segment_segment_intersection;
use crate::polygon::{Polygon, PolygonProperties};
use crate::shapes::{Circle, Ellipse, Line, LineSegment, Rectangle, Shape};
use crate::types::{Point2D, VectorOps};
use crate::utils::angles;

/// Lotfußpunkt auf einer unbegrenzten Geraden mit Abstand
pub fn nearest_point_on_line(point: Point2D, line: &Line) -> (Point2D, f64) {
    let closest = line.closest_point(point);
    (closest, point.distance_to(closest))
}

/// Nächster Punkt auf einer Strecke mit Abstand; der Kurvenparameter
/// wird auf die Endpunkte geklemmt
pub fn nearest_point_on_segment(point: Point2D, segment: &LineSegment) -> (Point2D, f64) {
    let closest = segment.closest_point(point);
    (closest, point.distance_to(closest))
}

/// Nächster Punkt auf dem Kreisrand mit Abstand.
///
/// Innenpunkte haben Abstand 0; fällt der Punkt mit dem Zentrum zusammen,
/// ist der Randpunkt bei Polarwinkel 0 der kanonische Vertreter.
pub fn nearest_point_on_circle(
    point: Point2D,
    circle: &Circle,
    tolerance: f64,
) -> (Point2D, f64) {
    let center = circle.center();
    let radius = circle.radius();

    let delta = point - center;
    let dist_to_center = delta.length();

    if dist_to_center < tolerance {
        return (Point2D::new(center.x + radius, center.y), radius);
    }

    let closest = center + delta * (radius / dist_to_center);
    (closest, (dist_to_center - radius).max(0.0))
}

/// Nächster Punkt im achsenparallelen Rechteck per Koordinatenklemmung;
/// Innenpunkte liefern sich selbst mit Abstand 0
pub fn nearest_point_on_rectangle(point: Point2D, rectangle: &Rectangle) -> (Point2D, f64) {
    let closest = rectangle.bounds().closest_point(point);
    (closest, point.distance_to(closest))
}

/// Nächster Punkt in einem Polygon mit Abstand.
///
/// Innenpunkte (einschließlich Rand) liefern sich selbst mit Abstand 0,
/// Außenpunkte den nächsten Randpunkt über alle Kanten.
pub fn nearest_point_on_polygon(point: Point2D, polygon: &Polygon) -> (Point2D, f64) {
    if polygon.contains_point(point) {
        return (point, 0.0);
    }

    let mut best_point = point;
    let mut best_distance = f64::INFINITY;

    for edge in polygon.edges() {
        let closest = edge.closest_point(point);
        let distance = point.distance_to(closest);
        if distance < best_distance {
            best_distance = distance;
            best_point = closest;
        }
    }

    (best_point, best_distance)
}

/// Nächster Punkt auf dem Ellipsenrand über Abtastung der Parameterform
/// in ganzzahligen Gradschritten
pub fn nearest_point_on_ellipse(point: Point2D, ellipse: &Ellipse) -> (Point2D, f64) {
    let center = ellipse.center();
    let a = ellipse.semi_major();
    let b = ellipse.semi_minor();
    let (sin_r, cos_r) = angles::deg_to_rad(ellipse.rotation_deg()).sin_cos();

    let mut best_point = point;
    let mut best_distance = f64::INFINITY;

    for i in 0..360 {
        let (sin_t, cos_t) = angles::deg_to_rad(i as f64).sin_cos();

        let sample = Point2D::new(
            center.x + a * cos_t * cos_r - b * sin_t * sin_r,
            center.y + a * cos_t * sin_r + b * sin_t * cos_r,
        );

        let distance = point.distance_to(sample);
        if distance < best_distance {
            best_distance = distance;
            best_point = sample;
        }
    }

    (best_point, best_distance)
}

/// Nächster Punkt auf einer beliebigen Geometrie mit Abstand
pub fn nearest_point_on_shape(point: Point2D, shape: &Shape, tolerance: f64) -> (Point2D, f64) {
    match shape {
        Shape::Segment(segment) => nearest_point_on_segment(point, segment),
        Shape::Line(line) => nearest_point_on_line(point, line),
        Shape::Circle(circle) => nearest_point_on_circle(point, circle, tolerance),
        Shape::Rectangle(rectangle) => nearest_point_on_rectangle(point, rectangle),
        Shape::Polygon(polygon) => nearest_point_on_polygon(point, polygon),
        Shape::Triangle(triangle) => nearest_point_on_polygon(point, triangle.as_polygon()),
        Shape::Ellipse(ellipse) => nearest_point_on_ellipse(point, ellipse),
    }
}

/// Nächster Randpunkt eines Kreises mit Abstand und Polarwinkel (Grad)
/// des Punkts vom Kreiszentrum aus gesehen
pub fn point_to_circle_nearest(
    point: Point2D,
    circle: &Circle,
    tolerance: f64,
) -> (Point2D, f64, f64) {
    let center = circle.center();
    let radius = circle.radius();

    let delta = point - center;
    let dist_to_center = delta.length();

    if dist_to_center < tolerance {
        return (Point2D::new(center.x + radius, center.y), radius, 0.0);
    }

    let nearest = center + delta * (radius / dist_to_center);
    let distance = (dist_to_center - radius).max(0.0);
    let polar_angle = delta.angle_deg();

    (nearest, distance, polar_angle)
}

/// Nächstgelegenes Randpunktpaar zweier Polygone mit Abstand.
///
/// Kandidaten sind alle Vertex-Vertex-Paare sowie jeder Vertex gegen
/// jede Kante des anderen Polygons.
pub fn polygon_nearest_points(poly1: &Polygon, poly2: &Polygon) -> (Point2D, Point2D, f64) {
    let mut best = (Point2D::origin(), Point2D::origin(), f64::INFINITY);

    for v1 in poly1.vertices() {
        for v2 in poly2.vertices() {
            let distance = v1.distance_to(*v2);
            if distance < best.2 {
                best = (*v1, *v2, distance);
            }
        }
    }

    for v1 in poly1.vertices() {
        for edge in poly2.edges() {
            let closest = edge.closest_point(*v1);
            let distance = v1.distance_to(closest);
            if distance < best.2 {
                best = (*v1, closest, distance);
            }
        }
    }

    for v2 in poly2.vertices() {
        for edge in poly1.edges() {
            let closest = edge.closest_point(*v2);
            let distance = v2.distance_to(closest);
            if distance < best.2 {
                best = (closest, *v2, distance);
            }
        }
    }

    best
}

/// Nächstgelegenes Punktpaar zweier Strecken; schneidende Strecken
/// liefern den Schnittpunkt doppelt
pub fn segments_closest_points(
    s1: &LineSegment,
    s2: &LineSegment,
    tolerance: f64,
) -> (Point2D, Point2D) {
    if let Some(point) = segment_segment_intersection(s1, s2, tolerance) {
        return (point, point);
    }

    let mut best = (s1.start, s2.start);
    let mut best_distance = f64::INFINITY;

    for endpoint in [s2.start, s2.end] {
        let closest = s1.closest_point(endpoint);
        let distance = closest.distance_to(endpoint);
        if distance < best_distance {
            best_distance = distance;
            best = (closest, endpoint);
        }
    }

    for endpoint in [s1.start, s1.end] {
        let closest = s2.closest_point(endpoint);
        let distance = endpoint.distance_to(closest);
        if distance < best_distance {
            best_distance = distance;
            best = (endpoint, closest);
        }
    }

    best
}

/// Kürzester Abstand zweier Strecken, 0 bei Schnitt
pub fn segments_distance(s1: &LineSegment, s2: &LineSegment, tolerance: f64) -> f64 {
    if segment_segment_intersection(s1, s2, tolerance).is_some() {
        return 0.0;
    }

    let (p1, p2) = segments_closest_points(s1, s2, tolerance);
    p1.distance_to(p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Triangle;
    use crate::types::DVec2;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    #[test]
    fn perpendicular_foot_on_segment() {
        let segment = LineSegment::new(Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0));

        let (closest, distance) = nearest_point_on_segment(Point2D::new(2.0, 3.0), &segment);
        assert!(closest.nearly_equals(Point2D::new(2.0, 0.0)));
        assert_relative_eq!(distance, 3.0);
    }

    #[test]
    fn segment_clamps_beyond_endpoints() {
        let segment = LineSegment::new(Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0));

        let (closest, distance) = nearest_point_on_segment(Point2D::new(6.0, 3.0), &segment);
        assert!(closest.nearly_equals(Point2D::new(4.0, 0.0)));
        assert_relative_eq!(distance, 13.0_f64.sqrt());
    }

    #[test]
    fn line_projects_beyond_segment_bounds() {
        let line = Line::new(Point2D::new(0.0, 0.0), DVec2::new(1.0, 0.0));

        let (closest, distance) = nearest_point_on_line(Point2D::new(6.0, 3.0), &line);
        assert!(closest.nearly_equals(Point2D::new(6.0, 0.0)));
        assert_relative_eq!(distance, 3.0);
    }

    #[test]
    fn circle_nearest_point_scales_to_the_rim() {
        let circle = Circle::new(Point2D::new(0.0, 0.0), 5.0).unwrap();

        let (closest, distance) = nearest_point_on_circle(Point2D::new(10.0, 0.0), &circle, TOL);
        assert!(closest.nearly_equals(Point2D::new(5.0, 0.0)));
        assert_relative_eq!(distance, 5.0);

        // Innenpunkte haben Abstand 0, der Randpunkt bleibt radial
        let (closest, distance) = nearest_point_on_circle(Point2D::new(3.0, 0.0), &circle, TOL);
        assert!(closest.nearly_equals(Point2D::new(5.0, 0.0)));
        assert_relative_eq!(distance, 0.0);
    }

    #[test]
    fn circle_center_maps_to_canonical_rim_point() {
        let circle = Circle::new(Point2D::new(2.0, 1.0), 5.0).unwrap();

        let (closest, distance) = nearest_point_on_circle(Point2D::new(2.0, 1.0), &circle, TOL);
        assert!(closest.nearly_equals(Point2D::new(7.0, 1.0)));
        assert_relative_eq!(distance, 5.0);
    }

    #[test]
    fn rectangle_interior_point_has_zero_distance() {
        let rectangle = Rectangle::from_bounds(0.0, 0.0, 4.0, 3.0).unwrap();

        let inside = Point2D::new(2.0, 1.5);
        let (closest, distance) = nearest_point_on_rectangle(inside, &rectangle);
        assert!(closest.nearly_equals(inside));
        assert_relative_eq!(distance, 0.0);

        let (closest, distance) =
            nearest_point_on_rectangle(Point2D::new(5.0, 1.0), &rectangle);
        assert!(closest.nearly_equals(Point2D::new(4.0, 1.0)));
        assert_relative_eq!(distance, 1.0);
    }

    #[test]
    fn polygon_distances_match_rectangle_case() {
        let polygon = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 3.0),
            Point2D::new(0.0, 3.0),
        ])
        .unwrap();

        let inside = Point2D::new(2.0, 1.5);
        let (closest, distance) = nearest_point_on_polygon(inside, &polygon);
        assert!(closest.nearly_equals(inside));
        assert_relative_eq!(distance, 0.0);

        let (closest, distance) = nearest_point_on_polygon(Point2D::new(5.0, 1.0), &polygon);
        assert!(closest.nearly_equals(Point2D::new(4.0, 1.0)));
        assert_relative_eq!(distance, 1.0);

        // Diagonal versetzte Punkte landen auf der nächsten Ecke
        let (closest, distance) = nearest_point_on_polygon(Point2D::new(7.0, 7.0), &polygon);
        assert!(closest.nearly_equals(Point2D::new(4.0, 3.0)));
        assert_relative_eq!(distance, 5.0);
    }

    #[test]
    fn ellipse_nearest_point_on_the_axes() {
        let ellipse = Ellipse::new(Point2D::new(0.0, 0.0), 5.0, 3.0, 0.0).unwrap();

        let (closest, distance) = nearest_point_on_ellipse(Point2D::new(10.0, 0.0), &ellipse);
        assert!(closest.nearly_equals(Point2D::new(5.0, 0.0)));
        assert_relative_eq!(distance, 5.0);

        let (closest, distance) = nearest_point_on_ellipse(Point2D::new(0.0, 10.0), &ellipse);
        assert!(closest.nearly_equals(Point2D::new(0.0, 3.0)));
        assert_relative_eq!(distance, 7.0);
    }

    #[test]
    fn shape_dispatch_covers_every_variant() {
        let point = Point2D::new(10.0, 0.0);

        let shapes = vec![
            Shape::from(LineSegment::new(
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 0.0),
            )),
            Shape::from(Line::new(Point2D::new(0.0, 0.0), DVec2::new(0.0, 1.0))),
            Shape::from(Circle::new(Point2D::new(0.0, 0.0), 5.0).unwrap()),
            Shape::from(Rectangle::from_bounds(0.0, 0.0, 4.0, 3.0).unwrap()),
            Shape::from(Polygon::triangle(
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(0.0, 4.0),
            )),
            Shape::from(Triangle::new(
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(0.0, 4.0),
            )),
            Shape::from(Ellipse::new(Point2D::new(0.0, 0.0), 5.0, 3.0, 0.0).unwrap()),
        ];

        let expected = [6.0, 10.0, 5.0, 6.0, 6.0, 6.0, 5.0];
        for (shape, want) in shapes.iter().zip(expected) {
            let (_, distance) = nearest_point_on_shape(point, shape, TOL);
            assert_relative_eq!(distance, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn circle_nearest_reports_polar_angle() {
        let circle = Circle::new(Point2D::new(0.0, 0.0), 5.0).unwrap();

        let (nearest, distance, angle) =
            point_to_circle_nearest(Point2D::new(10.0, 0.0), &circle, TOL);
        assert!(nearest.nearly_equals(Point2D::new(5.0, 0.0)));
        assert_relative_eq!(distance, 5.0);
        assert_relative_eq!(angle, 0.0);

        let (nearest, _, angle) = point_to_circle_nearest(Point2D::new(0.0, 10.0), &circle, TOL);
        assert!(nearest.nearly_equals(Point2D::new(0.0, 5.0)));
        assert_relative_eq!(angle, 90.0);

        let (_, _, angle) = point_to_circle_nearest(Point2D::new(-10.0, 0.0), &circle, TOL);
        assert_relative_eq!(angle, 180.0);

        let (nearest, distance, angle) =
            point_to_circle_nearest(Point2D::new(0.0, 0.0), &circle, TOL);
        assert!(nearest.nearly_equals(Point2D::new(5.0, 0.0)));
        assert_relative_eq!(distance, 5.0);
        assert_relative_eq!(angle, 0.0);
    }

    #[test]
    fn nearest_pair_between_separated_squares() {
        let left = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
        ])
        .unwrap();
        let right = Polygon::new(vec![
            Point2D::new(3.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 1.0),
            Point2D::new(3.0, 1.0),
        ])
        .unwrap();

        let (p1, p2, distance) = polygon_nearest_points(&left, &right);
        assert!(p1.nearly_equals(Point2D::new(1.0, 0.0)));
        assert!(p2.nearly_equals(Point2D::new(3.0, 0.0)));
        assert_relative_eq!(distance, 2.0);
    }

    #[test]
    fn vertex_against_edge_beats_vertex_pairs() {
        let left = Polygon::triangle(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 5.0),
        );
        // Spitze zeigt auf die Mitte der langen rechten Kante
        let right = Polygon::triangle(
            Point2D::new(2.0, 2.5),
            Point2D::new(4.0, 1.0),
            Point2D::new(4.0, 4.0),
        );

        let (p1, p2, distance) = polygon_nearest_points(&left, &right);
        assert!(p1.nearly_equals(Point2D::new(1.0, 2.5)));
        assert!(p2.nearly_equals(Point2D::new(2.0, 2.5)));
        assert_relative_eq!(distance, 1.0);
    }

    #[test]
    fn crossing_segments_have_zero_distance() {
        let s1 = LineSegment::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0));
        let s2 = LineSegment::new(Point2D::new(0.0, 2.0), Point2D::new(2.0, 0.0));

        assert_relative_eq!(segments_distance(&s1, &s2, 1e-9), 0.0);

        let (p1, p2) = segments_closest_points(&s1, &s2, 1e-9);
        assert!(p1.nearly_equals(p2));
        assert!(p1.nearly_equals(Point2D::new(1.0, 1.0)));
    }

    #[test]
    fn parallel_segments_keep_their_gap() {
        let s1 = LineSegment::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0));
        let s2 = LineSegment::new(Point2D::new(1.0, 2.0), Point2D::new(3.0, 2.0));

        assert_relative_eq!(segments_distance(&s1, &s2, 1e-9), 2.0);

        let (p1, p2) = segments_closest_points(&s1, &s2, 1e-9);
        assert!(p1.nearly_equals(Point2D::new(1.0, 0.0)));
        assert!(p2.nearly_equals(Point2D::new(1.0, 2.0)));
    }
}
