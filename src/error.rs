// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Insufficient vertices for shape: expected at least {expected}, got {actual}")]
    InsufficientVertices { expected: usize, actual: usize },

    #[error("Invalid dimension: {message}")]
    InvalidDimension { message: String },

    #[error("Side lengths {a}, {b}, {c} violate the triangle inequality")]
    TriangleInequality { a: f64, b: f64, c: f64 },

    #[error("Lines are parallel and do not intersect")]
    ParallelLines,

    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: String },

    #[error("Empty point set passed to {operation}")]
    EmptyPointSet { operation: String },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
