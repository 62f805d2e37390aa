use crate::error::BrickifyError;
use crate::models::{ImageSource, RenderOptions};
use crate::rendering::compositor;
use std::path::Path;

/// High-level render service wrapping the brick-mosaic pipeline.
///
/// Each render is a single-shot, self-contained transformation: it decodes
/// its own surfaces and owns its own canvas, so one service can serve
/// concurrent renders without shared mutable state.
#[derive(Debug, Default)]
pub struct RenderService;

impl RenderService {
    pub fn new() -> Self {
        Self
    }

    /// Render `source` into encoded brick-mosaic bytes.
    ///
    /// Path sources suspend on async file reads; the CPU-intensive
    /// decode/composite/encode pipeline runs under spawn_blocking so it
    /// does not stall the async runtime.
    pub async fn render(
        &self,
        source: ImageSource,
        options: RenderOptions,
    ) -> Result<Vec<u8>, BrickifyError> {
        let source_bytes = read_source(source).await?;
        let brick_bytes = read_source(options.brick_source()).await?;

        let rendered = tokio::task::spawn_blocking(move || {
            let source = compositor::decode_surface(&source_bytes)?;
            let sprite = compositor::decode_surface(&brick_bytes)?;
            compositor::compose(&source, &sprite, &options)
        })
        .await
        .map_err(|e| BrickifyError::Join(e.to_string()))??;

        tracing::info!(bytes = rendered.len(), "Rendered brick mosaic");
        Ok(rendered)
    }
}

/// Resolve an image source to encoded bytes.
async fn read_source(source: ImageSource) -> Result<Vec<u8>, BrickifyError> {
    match source {
        ImageSource::Bytes(bytes) => Ok(bytes),
        ImageSource::Path(path) => read_file(&path).await,
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, BrickifyError> {
    tokio::fs::read(path).await.map_err(BrickifyError::Io)
}
