mod color;
mod geometry;

pub use color::Rgba;
pub use geometry::{Point, Rect, Size, finite_or, finite_or_warn};
