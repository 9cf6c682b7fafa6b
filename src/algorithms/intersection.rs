// src/algorithms/intersection.rs
use crate::error::{GeometryError, GeometryResult};
use crate::polygon::Polygon;
use crate::shapes::{Circle, Ellipse, Line, LineSegment, Rectangle};
use crate::types::{DVec2, Point2D, VectorOps};
use crate::utils::{angles, constants};
use serde::{Deserialize, Serialize};

/// Schnittpunkt zweier Strecken, `None` bei parallelen oder verfehlenden Strecken.
///
/// Beide Kurvenparameter müssen in `[-tolerance, 1 + tolerance]` liegen,
/// Endpunktberührungen zählen damit als Schnitt.
pub fn segment_segment_intersection(
    s1: &LineSegment,
    s2: &LineSegment,
    tolerance: f64,
) -> Option<Point2D> {
    let (x1, y1) = (s1.start.x, s1.start.y);
    let (x2, y2) = (s1.end.x, s1.end.y);
    let (x3, y3) = (s2.start.x, s2.start.y);
    let (x4, y4) = (s2.end.x, s2.end.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < tolerance {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let s = ((x1 - x3) * (y1 - y2) - (y1 - y3) * (x1 - x2)) / denom;

    let range = -tolerance..=1.0 + tolerance;
    if range.contains(&t) && range.contains(&s) {
        Some(Point2D::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    } else {
        None
    }
}

/// Schnittpunkt zweier unbegrenzter Geraden
pub fn line_line_intersection(
    l1: &Line,
    l2: &Line,
    tolerance: f64,
) -> GeometryResult<Point2D> {
    let (x1, y1) = (l1.anchor().x, l1.anchor().y);
    let (x2, y2) = (x1 + l1.direction().x, y1 + l1.direction().y);
    let (x3, y3) = (l2.anchor().x, l2.anchor().y);
    let (x4, y4) = (x3 + l2.direction().x, y3 + l2.direction().y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < tolerance {
        return Err(GeometryError::ParallelLines);
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    Ok(Point2D::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
}

/// Schnittpunkte von Kreis und Gerade: leer, Tangentenpunkt oder
/// zwei lexikographisch nach (x, y) sortierte Punkte
pub fn circle_line_intersection(circle: &Circle, line: &Line, tolerance: f64) -> Vec<Point2D> {
    let center = circle.center();
    let radius = circle.radius();

    let dist = line.distance_to_point(center);
    let dist_sq = dist * dist;
    let radius_sq = radius * radius;

    if dist_sq > radius_sq + tolerance {
        return Vec::new();
    }

    let projection = line.closest_point(center);

    if (dist_sq - radius_sq).abs() < tolerance {
        return vec![projection];
    }

    let offset_dist = if dist_sq < tolerance {
        radius
    } else {
        (radius_sq - dist_sq).max(0.0).sqrt()
    };
    let offset = line.direction() * offset_dist;

    let mut points = vec![projection - offset, projection + offset];
    points.sort_by(|a, b| {
        (a.x, a.y)
            .partial_cmp(&(b.x, b.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    points
}

/// Schnittpunkte von Kreis und Strecke über die Trägergerade,
/// gefiltert auf Punkte innerhalb der Streckengrenzen
pub fn circle_segment_intersection(
    circle: &Circle,
    segment: &LineSegment,
    tolerance: f64,
) -> Vec<Point2D> {
    let line = Line::from_segment(segment);
    circle_line_intersection(circle, &line, tolerance)
        .into_iter()
        .filter(|point| point.distance_to(segment.closest_point(*point)) < tolerance)
        .collect()
}

/// Lagebeziehung zweier Kreise
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CircleCircleIntersection {
    /// Zentren fallen zusammen, kein eindeutiger Schnittpunkt
    Concentric,
    /// Berührung von außen
    TangentExternal(Point2D),
    /// Berührung von innen
    TangentInternal(Point2D),
    /// Kein Schnitt (getrennt oder ineinander liegend)
    Disjoint,
    /// Zwei echte Schnittpunkte
    Points(Point2D, Point2D),
}

impl CircleCircleIntersection {
    /// Schnittpunkte als Liste mit 0, 1 oder 2 Einträgen
    pub fn points(&self) -> Vec<Point2D> {
        match self {
            CircleCircleIntersection::Concentric | CircleCircleIntersection::Disjoint => {
                Vec::new()
            }
            CircleCircleIntersection::TangentExternal(point)
            | CircleCircleIntersection::TangentInternal(point) => vec![*point],
            CircleCircleIntersection::Points(p1, p2) => vec![*p1, *p2],
        }
    }
}

/// Klassifizierter Schnitt zweier Kreise
pub fn circle_circle_intersection(
    circle1: &Circle,
    circle2: &Circle,
    tolerance: f64,
) -> CircleCircleIntersection {
    let c1 = circle1.center();
    let c2 = circle2.center();
    let r1 = circle1.radius();
    let r2 = circle2.radius();

    let d = c1.distance_to(c2);

    if d < tolerance {
        return CircleCircleIntersection::Concentric;
    }

    let outward = (c2 - c1).normalize_or_zero();

    if (d - (r1 + r2)).abs() < tolerance {
        return CircleCircleIntersection::TangentExternal(c1 + outward * r1);
    }

    if (d - (r1 - r2).abs()).abs() < tolerance {
        let point = if r1 > r2 {
            c1 + outward * r1
        } else {
            c2 + (c1 - c2).normalize_or_zero() * r2
        };
        return CircleCircleIntersection::TangentInternal(point);
    }

    if d > r1 + r2 + tolerance || d < (r1 - r2).abs() - tolerance {
        return CircleCircleIntersection::Disjoint;
    }

    // Sehnenmittenabstand a entlang der Zentrallinie, halbe Sehnenlänge h
    let a = (d * d + r1 * r1 - r2 * r2) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let base = c1 + outward * a;
    let side = outward.perpendicular() * h;

    CircleCircleIntersection::Points(base + side, base - side)
}

/// Schnittpunkt einer unbegrenzten Geraden mit einer einzelnen Strecke
fn line_segment_intersection(
    line: &Line,
    segment: &LineSegment,
    tolerance: f64,
) -> Option<Point2D> {
    let direction = line.direction();
    let edge = segment.delta();

    let denom = direction.cross(edge);
    if denom.abs() < tolerance {
        return None;
    }

    let diff = segment.start - line.anchor();
    let s = diff.cross(direction) / denom;

    if !(-tolerance..=1.0 + tolerance).contains(&s) {
        return None;
    }

    let t = diff.cross(edge) / denom;
    Some(line.point_at(t))
}

/// Punkt nur aufnehmen, wenn noch kein toleranzgleicher Punkt enthalten ist
fn push_unique(points: &mut Vec<Point2D>, candidate: Point2D, tolerance: f64) {
    if !points.iter().any(|p| p.equals(candidate, tolerance)) {
        points.push(candidate);
    }
}

/// Alle Schnittpunkte einer Geraden mit dem Polygonrand, dedupliziert
/// (Eckentreffer zählen einfach) und nach dem Geradenparameter sortiert
pub fn line_polygon_intersection_points(
    line: &Line,
    polygon: &Polygon,
    tolerance: f64,
) -> Vec<Point2D> {
    let mut intersections: Vec<Point2D> = Vec::new();

    for edge in polygon.edges() {
        if let Some(point) = line_segment_intersection(line, &edge, tolerance) {
            push_unique(&mut intersections, point, tolerance);
        }
    }

    let anchor = line.anchor();
    let direction = line.direction();
    if direction.length_squared() > tolerance {
        intersections.sort_by(|a, b| {
            let ta = (*a - anchor).dot(direction);
            let tb = (*b - anchor).dot(direction);
            ta.partial_cmp(&tb).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    intersections
}

/// Schnittpunkte einer Strecke mit dem Polygonrand
pub fn segment_polygon_intersection_points(
    segment: &LineSegment,
    polygon: &Polygon,
    tolerance: f64,
) -> Vec<Point2D> {
    let line = Line::from_segment(segment);
    line_polygon_intersection_points(&line, polygon, tolerance)
        .into_iter()
        .filter(|point| point.distance_to(segment.closest_point(*point)) < tolerance)
        .collect()
}

/// Schnittpunkte von Ellipse und Gerade über die quadratische Gleichung
/// im gedrehten Achsensystem der Ellipse
pub fn ellipse_line_intersection(
    ellipse: &Ellipse,
    line: &Line,
    tolerance: f64,
) -> Vec<Point2D> {
    let center = ellipse.center();
    let a = ellipse.semi_major();
    let b = ellipse.semi_minor();
    let (sin_r, cos_r) = angles::deg_to_rad(ellipse.rotation_deg()).sin_cos();

    // Anker und Richtung ins lokale Achsensystem drehen
    let anchor_delta = line.anchor() - center;
    let x0 = anchor_delta.x * cos_r + anchor_delta.y * sin_r;
    let y0 = -anchor_delta.x * sin_r + anchor_delta.y * cos_r;

    let dir = line.direction();
    let dx = dir.x * cos_r + dir.y * sin_r;
    let dy = -dir.x * sin_r + dir.y * cos_r;

    let qa = (dx * dx) / (a * a) + (dy * dy) / (b * b);
    let qb = 2.0 * (x0 * dx) / (a * a) + 2.0 * (y0 * dy) / (b * b);
    let qc = (x0 * x0) / (a * a) + (y0 * y0) / (b * b) - 1.0;

    let discriminant = qb * qb - 4.0 * qa * qc;

    if discriminant < -tolerance || qa.abs() < tolerance {
        return Vec::new();
    }

    if discriminant < tolerance {
        return vec![line.point_at(-qb / (2.0 * qa))];
    }

    let sqrt_disc = discriminant.max(0.0).sqrt();
    let t1 = (-qb + sqrt_disc) / (2.0 * qa);
    let t2 = (-qb - sqrt_disc) / (2.0 * qa);

    vec![line.point_at(t1), line.point_at(t2)]
}

/// Schnittpunkte von Ellipse und Kreis über Abtastung des Kreisrands
/// in ganzzahligen Gradschritten
pub fn ellipse_circle_intersection(
    ellipse: &Ellipse,
    circle: &Circle,
    tolerance: f64,
) -> Vec<Point2D> {
    let center = ellipse.center();
    let a = ellipse.semi_major();
    let b = ellipse.semi_minor();
    let (sin_r, cos_r) = angles::deg_to_rad(ellipse.rotation_deg()).sin_cos();

    let circle_center = circle.center();
    let radius = circle.radius();

    let mut intersections: Vec<Point2D> = Vec::new();

    for i in 0..360 {
        let angle = angles::deg_to_rad(i as f64);
        let sample = circle_center + DVec2::from_angle(angle) * radius;

        let delta = sample - center;
        let x_local = delta.x * cos_r + delta.y * sin_r;
        let y_local = -delta.x * sin_r + delta.y * cos_r;

        let value = (x_local * x_local) / (a * a) + (y_local * y_local) / (b * b);
        if (value - 1.0).abs() < tolerance {
            push_unique(&mut intersections, sample, tolerance);
        }
    }

    intersections
}

/// Schnittpunkte der Kanten zweier Rechtecke; `tolerance` dedupliziert
/// nur die Treffer, der Kantenschnitt selbst rechnet mit `EPSILON`
pub fn rectangle_intersection_points(
    r1: &Rectangle,
    r2: &Rectangle,
    tolerance: f64,
) -> Vec<Point2D> {
    let mut intersections: Vec<Point2D> = Vec::new();

    for e1 in r1.edges() {
        for e2 in r2.edges() {
            if let Some(point) = segment_segment_intersection(&e1, &e2, constants::EPSILON) {
                push_unique(&mut intersections, point, tolerance);
            }
        }
    }

    intersections
}

/// Schnittpunkte der Ränder zweier Polygone
pub fn polygon_intersection_points(
    p1: &Polygon,
    p2: &Polygon,
    tolerance: f64,
) -> Vec<Point2D> {
    let mut intersections: Vec<Point2D> = Vec::new();

    for e1 in p1.edges() {
        for e2 in p2.edges() {
            if let Some(point) = segment_segment_intersection(&e1, &e2, constants::EPSILON) {
                push_unique(&mut intersections, point, tolerance);
            }
        }
    }

    intersections
}
