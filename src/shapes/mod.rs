// src/shapes/mod.rs
pub mod circle;
pub mod ellipse;
pub mod line;
pub mod measure;
pub mod rectangle;
pub mod segment;
pub mod shape;
pub mod triangle;

pub use circle::*;
pub use ellipse::*;
pub use line::*;
pub use measure::*;
pub use rectangle::*;
pub use segment::*;
pub use shape::*;
pub use triangle::*;
