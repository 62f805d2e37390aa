//! Bundled brick sprite.
//!
//! The default sprite ships inside the binary so a render needs no filesystem
//! access unless the caller supplies an alternate sprite.

use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded sprite assets
#[derive(RustEmbed)]
#[folder = "images/"]
#[include = "*.png"]
struct EmbeddedSprites;

/// Encoded PNG bytes of the bundled brick sprite.
pub fn default_brick() -> Cow<'static, [u8]> {
    EmbeddedSprites::get("brick.png")
        .map(|f| f.data)
        .expect("brick.png is embedded at compile time")
}
