// src/polygon/mod.rs
pub mod convex_hull;
pub mod core;
pub mod properties;

pub use self::convex_hull::*;
pub use self::core::*;
pub use self::properties::*;
