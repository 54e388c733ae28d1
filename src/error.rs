use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the snowflake generator.
#[derive(Debug, Error)]
pub enum SnowflakeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to geometric primitives and transforms.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("expected at least {expected} points, got {actual}")]
    TooFewPoints { expected: usize, actual: usize },

    #[error("elongated hexagon length {length} must exceed twice the inset distance {inset}")]
    InvalidPrimitive { length: f64, inset: f64 },

    #[error(
        "perspective denominator vanishes at ({x}, {y}): distance {distance} + z {z} is zero"
    )]
    DegenerateProjection { x: f64, y: f64, distance: f64, z: f64 },
}

/// Errors raised while building the layered scene graph.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("group '{parent}' already has a child named '{name}'")]
    DuplicateName { parent: String, name: String },
}

/// Errors related to geometry operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{operation} exceeded its iteration limit of {limit}")]
    IterationLimitExceeded {
        operation: &'static str,
        limit: usize,
    },

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors related to loading and validating sketch parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse parameters: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid parameter {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised while writing a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`SnowflakeError`].
pub type Result<T> = std::result::Result<T, SnowflakeError>;
