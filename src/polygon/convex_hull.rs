// src/polygon/convex_hull.rs
use crate::error::GeometryResult;
use crate::polygon::Polygon;
use crate::types::{Point2D, VectorOps};
use crate::utils::constants;
use log::warn;

/// Konvexe-Hülle-Berechnung über Andrews Monotone Chain (O(n log n)):
/// lexikographische Sortierung, dann unterer und oberer Kettenaufbau.
/// Das Ergebnis ist immer gegen den Uhrzeigersinn gewunden.
pub struct ConvexHullComputer {
    include_collinear: bool,
    tolerance: f64,
}

impl Default for ConvexHullComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvexHullComputer {
    /// Erstellt einen Computer mit Standardtoleranz
    pub fn new() -> Self {
        Self {
            include_collinear: false,
            tolerance: constants::SHAPE_EPSILON,
        }
    }

    /// Setzt ob kollineare Randpunkte in der Hülle bleiben sollen
    pub fn include_collinear(mut self, include: bool) -> Self {
        self.include_collinear = include;
        self
    }

    /// Setzt die Toleranz für Kreuzprodukt-Vergleiche
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        if !tolerance.is_finite() || tolerance < 0.0 {
            warn!(
                "convex hull tolerance must be finite and non-negative, keeping {}",
                self.tolerance
            );
            return self;
        }
        self.tolerance = tolerance;
        self
    }

    /// Berechnet die konvexe Hülle einer Punktmenge.
    ///
    /// Kollabiert die Menge (nach Deduplizierung oder wegen Kollinearität)
    /// auf weniger als drei Hüllpunkte, schlägt die Polygon-Konstruktion fehl.
    pub fn compute_hull(&self, points: &[Point2D]) -> GeometryResult<Polygon> {
        let mut points = points.to_vec();

        // Lexikographisch sortieren (erst x, dann y)
        points.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
        });

        points.dedup_by(|a, b| {
            (a.x - b.x).abs() < self.tolerance && (a.y - b.y).abs() < self.tolerance
        });

        let mut lower_hull: Vec<Point2D> = Vec::new();
        for &point in &points {
            while lower_hull.len() >= 2
                && self.pops_turn(
                    lower_hull[lower_hull.len() - 2],
                    lower_hull[lower_hull.len() - 1],
                    point,
                )
            {
                lower_hull.pop();
            }
            lower_hull.push(point);
        }

        let mut upper_hull: Vec<Point2D> = Vec::new();
        for &point in points.iter().rev() {
            while upper_hull.len() >= 2
                && self.pops_turn(
                    upper_hull[upper_hull.len() - 2],
                    upper_hull[upper_hull.len() - 1],
                    point,
                )
            {
                upper_hull.pop();
            }
            upper_hull.push(point);
        }

        // Der letzte Punkt jeder Kette ist der Startpunkt der anderen
        lower_hull.pop();
        upper_hull.pop();
        lower_hull.extend(upper_hull);

        Polygon::new(lower_hull)
    }

    /// Berechnet die konvexe Hülle der Vertices eines Polygons
    pub fn compute_polygon_hull(&self, polygon: &Polygon) -> GeometryResult<Polygon> {
        self.compute_hull(polygon.vertices())
    }

    /// Entscheidet ob der mittlere Punkt einer Drei-Punkte-Folge entfernt wird
    fn pops_turn(&self, o: Point2D, a: Point2D, b: Point2D) -> bool {
        let cross = (a - o).cross(b - o);
        if self.include_collinear {
            cross < -self.tolerance
        } else {
            cross <= self.tolerance
        }
    }
}

impl Polygon {
    /// Konvexe Hülle der Vertices mit Standardeinstellungen
    pub fn convex_hull(&self) -> GeometryResult<Polygon> {
        ConvexHullComputer::new().compute_polygon_hull(self)
    }
}
