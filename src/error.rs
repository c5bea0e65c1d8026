use thiserror::Error;

/// Top-level error type for the planar engine.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while constructing or mutating shapes.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("ellipse tessellation is fixed at construction")]
    FixedTessellation,
}

/// Errors related to the shape arena.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("shape not found: {0}")]
    ShapeNotFound(&'static str),
}

/// Errors related to construction parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
