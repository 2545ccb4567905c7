//! Drawing side of the nav bar.
//!
//! Layout code never touches pixels; it talks to a [`DrawSurface`], which is
//! implemented by the [`CommandRecorder`] (records commands for replay and
//! inspection) and by [`cpu::PixelSurface`] (rasterizes into a pixel buffer).

pub mod chevron;
pub mod cpu;
mod recorder;
pub mod shapes;

use crate::core::{Point, Rgba, Size};

pub use chevron::{ChevronDirection, ChevronStyle};
pub use recorder::{CommandRecorder, DrawCommand};
pub use shapes::{Border, ShapeStyle, TabShape};

/// Primitive drawing operations the nav bar needs from its host.
///
/// Coordinates are y-up; `pos` is always the lower-left corner.
pub trait DrawSurface {
    /// Drops everything drawn by the previous pass.
    fn clear(&mut self) {}

    fn fill_rect(&mut self, pos: Point, size: Size, color: Rgba);

    /// Fills the ellipse inscribed in the `(pos, size)` box.
    fn fill_ellipse(&mut self, pos: Point, size: Size, color: Rgba);

    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Rgba);

    fn stroke_rect(&mut self, pos: Point, size: Size, width: f32, color: Rgba);

    fn stroke_rounded_rect(&mut self, pos: Point, size: Size, width: f32, radius: f32, color: Rgba);
}
