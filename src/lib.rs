//! Brickify - brick-mosaic rendering of raster images.
//!
//! The source image is tiled into cells matching the brick sprite's size,
//! each cell's dominant color is estimated by strided pixel sampling, and the
//! sprite is stamped into the cell tinted with that color, hard-light
//! composited over the original image.
//!
//! # Quick start
//!
//! ```no_run
//! use brickify::{brickify, RenderOptions};
//!
//! # async fn run() -> Result<(), brickify::BrickifyError> {
//! let photo = std::fs::read("photo.jpg")?;
//! let mosaic = brickify(photo, RenderOptions::default()).await?;
//! std::fs::write("mosaic.jpg", mosaic)?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::{BrickifyError, ConfigurationError};
pub use models::{ImageSource, OutputFormat, Quality, RenderOptions};
pub use services::RenderService;

/// Render `source` as a brick mosaic, returning encoded image bytes in
/// `options.format`.
///
/// Convenience wrapper over [`RenderService::render`].
pub async fn brickify(
    source: impl Into<ImageSource>,
    options: RenderOptions,
) -> Result<Vec<u8>, BrickifyError> {
    RenderService::new().render(source.into(), options).await
}
