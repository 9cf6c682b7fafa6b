// src/utils.rs

/// Mathematische Konstanten und Toleranzen
pub mod constants {
    /// Standardtoleranz für Koordinaten- und Punktvergleiche
    pub const EPSILON: f64 = 1e-9;
    /// Feinere Standardtoleranz für relationale Abfragen (Schnitt, Projektion)
    pub const RELATION_EPSILON: f64 = 1e-10;
    /// Gröbere Toleranz für Form-Prädikate (Containment, Regularität)
    pub const SHAPE_EPSILON: f64 = 1e-6;
    /// Untergrenze für quadrierte Längen; darunter gilt eine Richtung als entartet
    pub const DEGENERATE_LENGTH_SQ: f64 = 1e-15;
    pub const TAU: f64 = std::f64::consts::TAU;
    pub const PI: f64 = std::f64::consts::PI;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }

    /// Prüft ob Float mit custom Toleranz Null ist
    pub fn nearly_zero_eps(a: f64, epsilon: f64) -> bool {
        a.abs() < epsilon
    }
}

/// Winkel-Hilfsfunktionen; die öffentliche API rechnet in Grad
pub mod angles {
    use super::constants::{PI, TAU};

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * PI / 180.0
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * 180.0 / PI
    }

    /// Normalisiert einen Winkel auf [0, 360)
    pub fn normalize_angle_deg(angle: f64) -> f64 {
        let mut result = angle % 360.0;
        if result < 0.0 {
            result += 360.0;
        }
        result
    }

    /// Normalisiert einen Winkel auf [0, 2π)
    pub fn normalize_angle_rad(angle: f64) -> f64 {
        let mut result = angle % TAU;
        if result < 0.0 {
            result += TAU;
        }
        result
    }
}

/// Einfache Statistik für Regularitätsprüfungen
pub mod statistics {
    /// Arithmetisches Mittel; 0.0 für leere Eingabe
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Populations-Standardabweichung (Division durch n)
    pub fn population_std_dev(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let m = mean(values);
        let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nearly_equal() {
        assert!(comparison::nearly_equal(1.0, 1.0 + 1e-12));
        assert!(!comparison::nearly_equal(1.0, 1.0 + 1e-6));
        assert!(comparison::nearly_equal_eps(1.0, 1.001, 0.01));
    }

    #[test]
    fn test_angle_normalization() {
        assert_relative_eq!(angles::normalize_angle_deg(370.0), 10.0);
        assert_relative_eq!(angles::normalize_angle_deg(-90.0), 270.0);
        assert_relative_eq!(angles::normalize_angle_deg(0.0), 0.0);
        assert_relative_eq!(angles::normalize_angle_rad(-constants::PI / 2.0), 1.5 * constants::PI);
    }

    #[test]
    fn test_deg_rad_round_trip() {
        assert_relative_eq!(angles::rad_to_deg(angles::deg_to_rad(137.5)), 137.5, epsilon = 1e-12);
    }

    #[test]
    fn test_population_std_dev() {
        assert_relative_eq!(statistics::population_std_dev(&[2.0, 2.0, 2.0]), 0.0);
        assert_relative_eq!(statistics::population_std_dev(&[1.0, 3.0]), 1.0);
        assert_relative_eq!(statistics::mean(&[]), 0.0);
    }
}
