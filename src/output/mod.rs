//! Output encoders and the preview painter.

mod png_encoder;
mod preview;

pub use png_encoder::PngEncoder;
pub use preview::Preview;
