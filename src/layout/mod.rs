//! Pure layout math for the nav bar.
//!
//! Every function here is a calculation: given container dimensions, the
//! config and tab counts it returns rectangles, offsets and classifications.
//! No drawing, no side effects.

pub mod geometry;
pub mod justify;
pub mod overflow;

pub use geometry::{ContainerMetrics, Geometry, GeometryInput, resolve_geometry};
pub use justify::{Justification, RowMetrics};
pub use overflow::Visibility;

/// Clamps `value` into `[min, max]`; NaN collapses to `min`.
pub fn limit(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}
