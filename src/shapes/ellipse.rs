// src/shapes/ellipse.rs
use crate::error::{GeometryError, GeometryResult};
use crate::types::{Bounds2D, DVec2, Point2D};
use crate::utils::{angles, constants};
use serde::{Deserialize, Serialize};

/// Eine Ellipse aus Zentrum, Halbachsen und Rotation (Grad, gegen den
/// Uhrzeigersinn); die große Halbachse liegt bei Rotation 0 auf der X-Achse.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    center: Point2D,
    semi_major: f64,
    semi_minor: f64,
    rotation_deg: f64,
}

impl Ellipse {
    pub fn new(
        center: Point2D,
        semi_major: f64,
        semi_minor: f64,
        rotation_deg: f64,
    ) -> GeometryResult<Self> {
        if semi_major < 0.0 || semi_minor < 0.0 {
            return Err(GeometryError::InvalidDimension {
                message: format!(
                    "ellipse semi-axes must be non-negative, got {} and {}",
                    semi_major, semi_minor
                ),
            });
        }
        if semi_major < semi_minor {
            return Err(GeometryError::InvalidDimension {
                message: format!(
                    "semi-major axis {} must not be smaller than semi-minor axis {}",
                    semi_major, semi_minor
                ),
            });
        }
        Ok(Self {
            center,
            semi_major,
            semi_minor,
            rotation_deg,
        })
    }

    /// Konstruktion über volle Achsenlängen statt Halbachsen
    pub fn from_center_and_axes(
        center: Point2D,
        major_axis: f64,
        minor_axis: f64,
        rotation_deg: f64,
    ) -> GeometryResult<Self> {
        Self::new(center, major_axis / 2.0, minor_axis / 2.0, rotation_deg)
    }

    /// Konstruktion aus den beiden Brennpunkten und einem Punkt auf dem Rand
    pub fn from_foci_and_point(
        focus1: Point2D,
        focus2: Point2D,
        point: Point2D,
    ) -> GeometryResult<Self> {
        let center = focus1.midpoint_to(focus2);
        let linear_eccentricity = focus1.distance_to(center);
        let distance_sum = point.distance_to(focus1) + point.distance_to(focus2);

        if distance_sum < 2.0 * linear_eccentricity + constants::SHAPE_EPSILON {
            return Err(GeometryError::InvalidDimension {
                message: format!(
                    "point does not define a valid ellipse: distance sum {} is below the focal distance {}",
                    distance_sum,
                    2.0 * linear_eccentricity
                ),
            });
        }

        let semi_major = distance_sum / 2.0;
        let semi_minor = (semi_major * semi_major
            - linear_eccentricity * linear_eccentricity)
            .sqrt();
        let direction = focus2 - focus1;
        let rotation_deg = angles::rad_to_deg(direction.y.atan2(direction.x));

        Self::new(center, semi_major, semi_minor, rotation_deg)
    }

    pub fn center(&self) -> Point2D {
        self.center
    }

    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub fn area(&self) -> f64 {
        constants::PI * self.semi_major * self.semi_minor
    }

    /// Umfang nach der Ramanujan-Näherung
    pub fn perimeter(&self) -> f64 {
        let sum = self.semi_major + self.semi_minor;
        if sum < constants::SHAPE_EPSILON {
            return 0.0;
        }
        let h = ((self.semi_major - self.semi_minor) / sum).powi(2);
        constants::PI * sum * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    /// Numerische Exzentrizität in [0, 1); 0 für Kreise und entartete Ellipsen
    pub fn eccentricity(&self) -> f64 {
        if self.semi_major < constants::SHAPE_EPSILON {
            return 0.0;
        }
        (1.0 - (self.semi_minor * self.semi_minor) / (self.semi_major * self.semi_major)).sqrt()
    }

    /// Abstand vom Zentrum zu jedem Brennpunkt
    pub fn focal_distance(&self) -> f64 {
        (self.semi_major * self.semi_major - self.semi_minor * self.semi_minor).sqrt()
    }

    /// Beide Brennpunkte, entlang der großen Halbachse
    pub fn foci(&self) -> (Point2D, Point2D) {
        let theta = angles::deg_to_rad(self.rotation_deg);
        let offset = DVec2::new(theta.cos(), theta.sin()) * self.focal_distance();
        (self.center - offset, self.center + offset)
    }

    /// Umschließende achsenparallele Box; für gedrehte Ellipsen konservativ,
    /// nicht minimal
    pub fn bounds(&self) -> Bounds2D {
        let theta = angles::deg_to_rad(self.rotation_deg);
        let half_width = self.semi_major * theta.cos().abs() + self.semi_minor * theta.sin().abs();
        let half_height = self.semi_major * theta.sin().abs() + self.semi_minor * theta.cos().abs();
        let half = DVec2::new(half_width, half_height);
        Bounds2D {
            min: self.center - half,
            max: self.center + half,
        }
    }

    /// Punkt-Test über die rotierte Normalform
    pub fn contains_point(&self, point: Point2D) -> bool {
        let delta = point - self.center;
        let theta = angles::deg_to_rad(self.rotation_deg);
        let (sin, cos) = theta.sin_cos();

        let x_local = delta.x * cos + delta.y * sin;
        let y_local = -delta.x * sin + delta.y * cos;

        let a_sq = self.semi_major * self.semi_major;
        let b_sq = self.semi_minor * self.semi_minor;

        (x_local * x_local) / a_sq + (y_local * y_local) / b_sq <= 1.0 + constants::SHAPE_EPSILON
    }

    /// Endpunkte der großen Achse auf dem Rand
    pub fn major_axis_endpoints(&self) -> (Point2D, Point2D) {
        let theta = angles::deg_to_rad(self.rotation_deg);
        let offset = DVec2::new(theta.cos(), theta.sin()) * self.semi_major;
        (self.center - offset, self.center + offset)
    }

    /// Endpunkte der kleinen Achse auf dem Rand
    pub fn minor_axis_endpoints(&self) -> (Point2D, Point2D) {
        let theta = angles::deg_to_rad(self.rotation_deg + 90.0);
        let offset = DVec2::new(theta.cos(), theta.sin()) * self.semi_minor;
        (self.center - offset, self.center + offset)
    }

    pub fn equals(&self, other: &Ellipse, tolerance: f64) -> bool {
        self.center.equals(other.center, tolerance)
            && (self.semi_major - other.semi_major).abs() < tolerance
            && (self.semi_minor - other.semi_minor).abs() < tolerance
            && (self.rotation_deg - other.rotation_deg).abs() < tolerance
    }
}
