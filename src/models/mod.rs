pub mod options;

pub use options::{ImageSource, OutputFormat, Quality, RenderOptions};
