//! Anti-aliased raster primitives over a row-major `0x00RRGGBB` buffer.
//!
//! Coordinates here are screen space (y grows downward, pixel centers at
//! `+0.5`); [`super::PixelSurface`] converts from y-up before calling in.

/// Borrowed pixel buffer.
pub(super) struct RenderTarget<'a> {
    pub buffer: &'a mut [u32],
    pub width: usize,
    pub height: usize,
}

impl RenderTarget<'_> {
    fn blend_at(&mut self, px: i32, py: i32, color: u32, alpha: u8) {
        if px < 0 || py < 0 {
            return;
        }
        let (px, py) = (px as usize, py as usize);
        if px >= self.width || py >= self.height {
            return;
        }
        let idx = py * self.width + px;
        if let Some(dst) = self.buffer.get_mut(idx) {
            *dst = blend_rgb(*dst, color, alpha);
        }
    }

    /// Inclusive pixel range covering `[lo, hi]` on an axis of `len` pixels,
    /// or `None` when it lies fully outside.
    fn span(lo: f32, hi: f32, len: usize) -> Option<(i32, i32)> {
        if len == 0 || !lo.is_finite() || !hi.is_finite() {
            return None;
        }
        let min = (lo.floor() as i32).max(0);
        let max = (hi.ceil() as i32).min(len as i32 - 1);
        (min <= max).then_some((min, max))
    }
}

pub(super) fn blend_rgb(dst: u32, src: u32, alpha: u8) -> u32 {
    if alpha == 255 {
        return src;
    }
    if alpha == 0 {
        return dst;
    }

    let a = alpha as u32;
    let inv = 255 - a;

    let dr = (dst >> 16) & 0xFF;
    let dg = (dst >> 8) & 0xFF;
    let db = dst & 0xFF;

    let sr = (src >> 16) & 0xFF;
    let sg = (src >> 8) & 0xFF;
    let sb = src & 0xFF;

    let r = (sr * a + dr * inv + 127) / 255;
    let g = (sg * a + dg * inv + 127) / 255;
    let b = (sb * a + db * inv + 127) / 255;

    (r << 16) | (g << 8) | b
}

fn scaled_alpha(coverage: f32, alpha: u8) -> u8 {
    (coverage * alpha as f32).round().clamp(0.0, 255.0) as u8
}

/// Fills pixels whose centers fall inside the rect.
pub(super) fn fill_rect(target: &mut RenderTarget<'_>, x: f32, y: f32, w: f32, h: f32, color: u32, alpha: u8) {
    if w <= 0.0 || h <= 0.0 || alpha == 0 {
        return;
    }
    let Some((min_x, max_x)) = RenderTarget::span(x, x + w, target.width) else {
        return;
    };
    let Some((min_y, max_y)) = RenderTarget::span(y, y + h, target.height) else {
        return;
    };

    for py in min_y..=max_y {
        let cy = py as f32 + 0.5;
        if cy < y || cy >= y + h {
            continue;
        }
        for px in min_x..=max_x {
            let cx = px as f32 + 0.5;
            if cx < x || cx >= x + w {
                continue;
            }
            target.blend_at(px, py, color, alpha);
        }
    }
}

/// Fills the ellipse inscribed in the box with a one-pixel soft edge.
pub(super) fn fill_ellipse(target: &mut RenderTarget<'_>, x: f32, y: f32, w: f32, h: f32, color: u32, alpha: u8) {
    if w <= 0.0 || h <= 0.0 || alpha == 0 {
        return;
    }
    let rx = w / 2.0;
    let ry = h / 2.0;
    let cx = x + rx;
    let cy = y + ry;
    let Some((min_x, max_x)) = RenderTarget::span(x - 1.0, x + w + 1.0, target.width) else {
        return;
    };
    let Some((min_y, max_y)) = RenderTarget::span(y - 1.0, y + h + 1.0, target.height) else {
        return;
    };
    let r_min = rx.min(ry);

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let dx = (px as f32 + 0.5 - cx) / rx;
            let dy = (py as f32 + 0.5 - cy) / ry;
            // Normalized distance scaled back to pixels along the short axis.
            let dist = ((dx * dx + dy * dy).sqrt() - 1.0) * r_min;
            let coverage = (0.5 - dist).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            target.blend_at(px, py, color, scaled_alpha(coverage, alpha));
        }
    }
}

pub(super) fn point_to_segment_distance(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    let vx = x1 - x0;
    let vy = y1 - y0;
    let len_sq = vx * vx + vy * vy;
    if len_sq <= f32::EPSILON {
        return ((px - x0) * (px - x0) + (py - y0) * (py - y0)).sqrt();
    }

    let t = (((px - x0) * vx + (py - y0) * vy) / len_sq).clamp(0.0, 1.0);
    let proj_x = x0 + t * vx;
    let proj_y = y0 + t * vy;
    ((px - proj_x) * (px - proj_x) + (py - proj_y) * (py - proj_y)).sqrt()
}

pub(super) fn stroke_segment(
    target: &mut RenderTarget<'_>,
    p0: (f32, f32),
    p1: (f32, f32),
    thickness: f32,
    color: u32,
    alpha: u8,
) {
    if thickness <= 0.0 || alpha == 0 {
        return;
    }

    let (x0, y0) = p0;
    let (x1, y1) = p1;
    let half = thickness * 0.5;
    let Some((min_x, max_x)) = RenderTarget::span(x0.min(x1) - half - 1.0, x0.max(x1) + half + 1.0, target.width)
    else {
        return;
    };
    let Some((min_y, max_y)) = RenderTarget::span(y0.min(y1) - half - 1.0, y0.max(y1) + half + 1.0, target.height)
    else {
        return;
    };

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let pcx = px as f32 + 0.5;
            let pcy = py as f32 + 0.5;
            let dist = point_to_segment_distance(pcx, pcy, x0, y0, x1, y1);

            let coverage = (half + 0.5 - dist).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            target.blend_at(px, py, color, scaled_alpha(coverage, alpha));
        }
    }
}

/// Signed distance from a point to a rounded rect (negative inside).
pub(super) fn rounded_rect_distance(px: f32, py: f32, x: f32, y: f32, w: f32, h: f32, r: f32) -> f32 {
    let hw = w / 2.0;
    let hh = h / 2.0;
    let qx = (px - (x + hw)).abs() - (hw - r);
    let qy = (py - (y + hh)).abs() - (hh - r);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - r
}

/// Strokes the outline of a rounded rect; the band runs inward from the
/// outer bounds by `thickness`.
#[allow(clippy::too_many_arguments)]
pub(super) fn stroke_rounded_rect(
    target: &mut RenderTarget<'_>,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    thickness: f32,
    radius: f32,
    color: u32,
    alpha: u8,
) {
    if w <= 0.0 || h <= 0.0 || thickness <= 0.0 || alpha == 0 {
        return;
    }
    let r = radius.clamp(0.0, w.min(h) / 2.0);
    let Some((min_x, max_x)) = RenderTarget::span(x - 1.0, x + w + 1.0, target.width) else {
        return;
    };
    let Some((min_y, max_y)) = RenderTarget::span(y - 1.0, y + h + 1.0, target.height) else {
        return;
    };

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let d = rounded_rect_distance(px as f32 + 0.5, py as f32 + 0.5, x, y, w, h, r);
            let outer = (0.5 - d).clamp(0.0, 1.0);
            let inner = (d + thickness + 0.5).clamp(0.0, 1.0);
            let coverage = outer.min(inner);
            if coverage <= 0.0 {
                continue;
            }
            target.blend_at(px, py, color, scaled_alpha(coverage, alpha));
        }
    }
}
