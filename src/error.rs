use thiserror::Error;

/// Errors surfaced by a brick-mosaic render.
///
/// Decode and encode failures come from the image collaborator and are fatal:
/// no partial output is ever produced and nothing is retried.
#[derive(Debug, Error)]
pub enum BrickifyError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to allocate canvas ({width}x{height})")]
    CanvasAllocation { width: u32, height: u32 },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render task failed: {0}")]
    Join(String),
}

/// Invalid render options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Unknown quality: {0:?} (expected fast, good, best, nearest or bilinear)")]
    UnknownQuality(String),

    #[error("Unknown output format: {0:?} (expected jpeg or png)")]
    UnknownFormat(String),

    #[error("pixel_interval must be at least 1")]
    ZeroPixelInterval,
}
