// src/algorithms/mod.rs
pub mod angular;
pub mod coordinates;
pub mod intersection;
pub mod projection;
pub mod query;

pub use angular::*;
pub use coordinates::*;
pub use intersection::*;
pub use projection::*;
pub use query::*;
