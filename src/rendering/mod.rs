pub mod canvas;
pub mod compositor;
pub mod sampling;

pub use canvas::BrickCanvas;
pub use sampling::{estimate_color, Rgb};
