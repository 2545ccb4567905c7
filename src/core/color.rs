use serde::{Deserialize, Serialize};

/// RGBA color with float channels in `[0, 1]`.
///
/// Serializes as a 4-tuple so config files read `(r, g, b, a)`.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(from = "(f32, f32, f32, f32)", into = "(f32, f32, f32, f32)")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a copy with every channel clamped to `[0, 1]`; NaN becomes 0.
    pub fn clamped(self) -> Self {
        let c = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self::new(c(self.r), c(self.g), c(self.b), c(self.a))
    }

    /// Packs the RGB channels into a `0x00RRGGBB` pixel, ignoring alpha.
    pub fn to_pixel(self) -> u32 {
        let c = self.clamped();
        let q = |v: f32| (v * 255.0).round() as u32;
        (q(c.r) << 16) | (q(c.g) << 8) | q(c.b)
    }

    /// Alpha channel as a byte.
    pub fn alpha_u8(self) -> u8 {
        (self.clamped().a * 255.0).round() as u8
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

impl From<(f32, f32, f32, f32)> for Rgba {
    fn from((r, g, b, a): (f32, f32, f32, f32)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for (f32, f32, f32, f32) {
    fn from(c: Rgba) -> Self {
        (c.r, c.g, c.b, c.a)
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
