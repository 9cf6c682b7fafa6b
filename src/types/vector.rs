// src/types/vector.rs
use crate::error::{GeometryError, GeometryResult};
use crate::utils::{angles, constants};
use glam::DVec2;

/// Planare Zusatzoperationen für [`DVec2`].
///
/// Nullvektoren sind überall gültige Eingaben: Normalisierung läuft im
/// gesamten Crate über `normalize_or_zero`, Projektion auf den Nullvektor
/// ergibt den Nullvektor.
pub trait VectorOps {
    /// Skalares Kreuzprodukt (z-Komponente des 3D-Kreuzprodukts)
    fn cross(self, other: DVec2) -> f64;

    /// Um 90° gegen den Uhrzeigersinn gedrehter Vektor
    fn perpendicular(self) -> DVec2;

    /// Polarwinkel in Grad, normalisiert auf [0, 360)
    fn angle_deg(self) -> f64;

    /// Polarwinkel in Radiant, normalisiert auf [0, 2π)
    fn angle_rad(self) -> f64;

    /// Rotation um einen Winkel in Grad (gegen den Uhrzeigersinn)
    fn rotated_deg(self, angle_deg: f64) -> DVec2;

    /// Projektion auf einen anderen Vektor; Nullvektor als Ziel ergibt den Nullvektor
    fn project_onto_safe(self, other: DVec2) -> DVec2;

    /// Skalare Komponente entlang einer Richtung
    fn component_along(self, direction: DVec2) -> f64;

    /// Division durch einen Skalar mit Nullprüfung
    fn checked_div(self, scalar: f64) -> GeometryResult<DVec2>;

    /// Komponentenweiser Vergleich mit Toleranz
    fn nearly_equals(self, other: DVec2, tolerance: f64) -> bool;

    /// Prüft ob beide Komponenten innerhalb der Toleranz bei Null liegen
    fn is_near_zero(self, tolerance: f64) -> bool;
}

impl VectorOps for DVec2 {
    fn cross(self, other: DVec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn perpendicular(self) -> DVec2 {
        DVec2::new(-self.y, self.x)
    }

    fn angle_deg(self) -> f64 {
        angles::normalize_angle_deg(angles::rad_to_deg(self.y.atan2(self.x)))
    }

    fn angle_rad(self) -> f64 {
        angles::normalize_angle_rad(self.y.atan2(self.x))
    }

    fn rotated_deg(self, angle_deg: f64) -> DVec2 {
        let (sin_a, cos_a) = angles::deg_to_rad(angle_deg).sin_cos();
        DVec2::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    fn project_onto_safe(self, other: DVec2) -> DVec2 {
        let len_sq = other.length_squared();
        if len_sq < constants::DEGENERATE_LENGTH_SQ {
            return DVec2::ZERO;
        }
        other * (self.dot(other) / len_sq)
    }

    fn component_along(self, direction: DVec2) -> f64 {
        self.dot(direction.normalize_or_zero())
    }

    fn checked_div(self, scalar: f64) -> GeometryResult<DVec2> {
        if scalar.abs() < constants::EPSILON {
            return Err(GeometryError::DivisionByZero {
                operation: "vector scalar division".to_string(),
            });
        }
        Ok(self / scalar)
    }

    fn nearly_equals(self, other: DVec2, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }

    fn is_near_zero(self, tolerance: f64) -> bool {
        self.x.abs() < tolerance && self.y.abs() < tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_sign() {
        let x = DVec2::X;
        let y = DVec2::Y;
        assert_relative_eq!(x.cross(y), 1.0);
        assert_relative_eq!(y.cross(x), -1.0);
        assert_relative_eq!(x.cross(x), 0.0);
    }

    #[test]
    fn test_perpendicular_is_ccw() {
        let v = DVec2::new(3.0, 1.0);
        let p = v.perpendicular();
        assert_eq!(p, DVec2::new(-1.0, 3.0));
        assert_relative_eq!(v.dot(p), 0.0);
        assert!(v.cross(p) > 0.0);
    }

    #[test]
    fn test_polar_angle() {
        assert_relative_eq!(DVec2::X.angle_deg(), 0.0);
        assert_relative_eq!(DVec2::Y.angle_deg(), 90.0);
        assert_relative_eq!(DVec2::new(-1.0, 0.0).angle_deg(), 180.0);
        assert_relative_eq!(DVec2::new(0.0, -1.0).angle_deg(), 270.0);
        assert_relative_eq!(DVec2::new(0.0, -1.0).angle_rad(), 1.5 * std::f64::consts::PI);
    }

    #[test]
    fn test_rotation() {
        let v = DVec2::X.rotated_deg(90.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projection() {
        let v = DVec2::new(2.0, 3.0);
        let onto = DVec2::new(4.0, 0.0);
        assert_eq!(v.project_onto_safe(onto), DVec2::new(2.0, 0.0));
        assert_eq!(v.project_onto_safe(DVec2::ZERO), DVec2::ZERO);
        assert_relative_eq!(v.component_along(DVec2::new(0.0, 2.0)), 3.0);
    }

    #[test]
    fn test_zero_vector_normalization() {
        assert_eq!(DVec2::ZERO.normalize_or_zero(), DVec2::ZERO);
    }

    #[test]
    fn test_checked_div() {
        assert!(DVec2::new(2.0, 4.0).checked_div(2.0).is_ok());
        assert!(DVec2::X.checked_div(0.0).is_err());
    }
}
