// src/types/mod.rs
pub mod bounds;
pub mod point;
pub mod vector;

pub use bounds::*;
pub use point::*;
pub use vector::*;

// Re-export des Vektor-Typs, auf dem alle Richtungsrechnungen laufen
pub use glam::DVec2;
