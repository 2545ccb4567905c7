//! Software surface that rasterizes draw commands into a pixel buffer.

mod primitives;

use std::io::{self, Write};

use crate::core::{Point, Rgba, Size};

use super::DrawSurface;
use primitives::RenderTarget;

/// Row-major `0x00RRGGBB` canvas; row 0 is the top of the image.
pub struct PixelSurface {
    buffer: Vec<u32>,
    width: usize,
    height: usize,
    clear_color: u32,
}

impl PixelSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: vec![0; width * height],
            width,
            height,
            clear_color: 0,
        }
    }

    /// Color used by [`DrawSurface::clear`].
    pub fn with_clear_color(mut self, color: Rgba) -> Self {
        self.clear_color = color.to_pixel();
        self.buffer.fill(self.clear_color);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.buffer
    }

    /// Pixel at `(x, y)` in y-up coordinates.
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = self.height - 1 - y;
        self.buffer.get(row * self.width + x).copied()
    }

    /// Writes the canvas as a binary PPM (P6).
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut bytes = Vec::with_capacity(self.buffer.len() * 3);
        for px in &self.buffer {
            bytes.extend_from_slice(&[(px >> 16) as u8, (px >> 8) as u8, *px as u8]);
        }
        out.write_all(&bytes)
    }

    fn target(&mut self) -> RenderTarget<'_> {
        RenderTarget {
            buffer: &mut self.buffer,
            width: self.width,
            height: self.height,
        }
    }

    /// Flips a y-up box to the screen-space y of its top edge.
    fn screen_y(&self, y: f32, h: f32) -> f32 {
        self.height as f32 - (y + h)
    }

    fn screen_point(&self, p: Point) -> (f32, f32) {
        (p.x, self.height as f32 - p.y)
    }
}

impl DrawSurface for PixelSurface {
    fn clear(&mut self) {
        self.buffer.fill(self.clear_color);
    }

    fn fill_rect(&mut self, pos: Point, size: Size, color: Rgba) {
        let sy = self.screen_y(pos.y, size.h);
        primitives::fill_rect(&mut self.target(), pos.x, sy, size.w, size.h, color.to_pixel(), color.alpha_u8());
    }

    fn fill_ellipse(&mut self, pos: Point, size: Size, color: Rgba) {
        let sy = self.screen_y(pos.y, size.h);
        primitives::fill_ellipse(&mut self.target(), pos.x, sy, size.w, size.h, color.to_pixel(), color.alpha_u8());
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Rgba) {
        let pixel = color.to_pixel();
        let alpha = color.alpha_u8();
        let screen: Vec<(f32, f32)> = points.iter().map(|p| self.screen_point(*p)).collect();
        let mut target = self.target();
        for pair in screen.windows(2) {
            primitives::stroke_segment(&mut target, pair[0], pair[1], width, pixel, alpha);
        }
    }

    fn stroke_rect(&mut self, pos: Point, size: Size, width: f32, color: Rgba) {
        self.stroke_rounded_rect(pos, size, width, 0.0, color);
    }

    fn stroke_rounded_rect(&mut self, pos: Point, size: Size, width: f32, radius: f32, color: Rgba) {
        let sy = self.screen_y(pos.y, size.h);
        primitives::stroke_rounded_rect(
            &mut self.target(),
            pos.x,
            sy,
            size.w,
            size.h,
            width,
            radius,
            color.to_pixel(),
            color.alpha_u8(),
        );
    }
}
