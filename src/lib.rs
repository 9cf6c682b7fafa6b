// src/lib.rs
//! Planarer Geometrie-Kern: Punkte, Kurven und Flächen in der Ebene mit
//! Schnitt-, Projektions- und Winkelrechnungen auf f64-Basis.
//!
//! Öffentliche Winkel sind Grad in [0, 360), Richtungen laufen gegen den
//! Uhrzeigersinn. Konstruktionen validieren ihre Eingaben und liefern
//! [`GeometryResult`], Abfragen absorbieren Entartung über Rückgabetypen.

pub mod algorithms;
pub mod error;
pub mod polygon;
pub mod shapes;
pub mod types;
pub mod utils;

pub use algorithms::*;
pub use error::*;
pub use polygon::*;
pub use shapes::*;
pub use types::*;
pub use utils::*;
