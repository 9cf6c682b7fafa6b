// src/polygon/core.rs
use crate::error::{GeometryError, GeometryResult};
use crate::shapes::LineSegment;
use crate::types::{Bounds2D, DVec2, Point2D};
use crate::utils::{angles, constants};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ein Polygon aus mindestens drei Vertices.
///
/// Die Kante vom letzten zurück zum ersten Vertex ist implizit; der erste
/// Vertex wird nie dupliziert. Vorzeichenbehaftete Rechnungen nehmen
/// Gegen-Uhrzeigersinn an, die Prädikate funktionieren aber für beide
/// Windungen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Erstellt ein Polygon aus Vertices; weniger als drei werden abgelehnt
    pub fn new(vertices: Vec<Point2D>) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::InsufficientVertices {
                expected: 3,
                actual: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Erstellt ein Polygon aus einem Slice
    pub fn from_points(points: &[Point2D]) -> GeometryResult<Self> {
        Self::new(points.to_vec())
    }

    /// Regelmäßiges n-Eck um ein Zentrum; `rotation_deg` dreht den ersten Vertex
    pub fn regular(
        sides: usize,
        center: Point2D,
        radius: f64,
        rotation_deg: f64,
    ) -> GeometryResult<Self> {
        if sides < 3 {
            return Err(GeometryError::InsufficientVertices {
                expected: 3,
                actual: sides,
            });
        }

        let rotation = angles::deg_to_rad(rotation_deg);
        let vertices = (0..sides)
            .map(|i| {
                let angle = i as f64 * constants::TAU / sides as f64 + rotation;
                center + DVec2::from_angle(angle) * radius
            })
            .collect();

        Ok(Self { vertices })
    }

    /// Dreieck als Polygon
    pub fn triangle(p1: Point2D, p2: Point2D, p3: Point2D) -> Self {
        Self {
            vertices: vec![p1, p2, p3],
        }
    }

    /// Viereck als Polygon
    pub fn rectangle(p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D) -> Self {
        Self {
            vertices: vec![p1, p2, p3, p4],
        }
    }

    /// Zugriff auf Vertices
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Anzahl der Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex mit umlaufendem Index
    pub fn vertex(&self, index: usize) -> Point2D {
        self.vertices[index % self.vertices.len()]
    }

    /// Kante i läuft von Vertex i zum Folgevertex (umlaufend)
    pub fn edge(&self, index: usize) -> LineSegment {
        let n = self.vertices.len();
        LineSegment::new(self.vertices[index % n], self.vertices[(index + 1) % n])
    }

    /// Alle Kanten einschließlich der impliziten Schlusskante
    pub fn edges(&self) -> Vec<LineSegment> {
        (0..self.vertices.len()).map(|i| self.edge(i)).collect()
    }

    /// Bounding Box über alle Vertices
    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points_iter(self.vertices.iter().copied()).unwrap_or_else(Bounds2D::empty)
    }

    /// Arithmetisches Mittel der Vertices
    pub fn center(&self) -> Point2D {
        let n = self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold(DVec2::ZERO, |acc, v| acc + v.to_vec2());
        Point2D::from_vec2(sum / n)
    }

    /// Kopie mit umgekehrter Vertex-Reihenfolge
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} vertices)", self.vertices.len())
    }
}

impl TryFrom<Vec<Point2D>> for Polygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Point2D>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point2D> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl IntoIterator for Polygon {
    type Item = Point2D;
    type IntoIter = std::vec::IntoIter<Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
