//! Drawing-surface capability and the built-in CPU implementation.
//!
//! The engine never touches a concrete raster type directly: strokes are
//! painted through [`PaintSurface`], so hosts can substitute their own
//! target (or a recording mock in tests). [`CpuSurface`] is the built-in
//! implementation backed by `vello_cpu`.

use crate::foundation::core::{BezPath, Rgba8, Vec2};
use crate::foundation::error::{ScribbleError, ScribbleResult};

mod cpu;

pub use cpu::CpuSurface;

/// Drop-shadow styling for a filled path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Offset of the shadow relative to the path.
    pub offset: Vec2,
    /// Blur radius. Implementations may approximate or ignore it.
    pub blur: f64,
    /// Shadow color.
    pub color: Rgba8,
}

impl Shadow {
    /// The soft gray shadow used by the brush variant.
    pub fn soft_gray() -> Self {
        Self {
            offset: Vec2::new(1.0, 1.0),
            blur: 1.0,
            color: Rgba8::GRAY,
        }
    }
}

/// Styling state for one filled path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStyle {
    /// Fill color (straight alpha).
    pub color: Rgba8,
    /// Global opacity multiplier in `[0, 1]`, applied on top of the color's
    /// own alpha.
    pub opacity: f32,
    /// Optional drop shadow painted beneath the fill.
    pub shadow: Option<Shadow>,
}

impl PathStyle {
    /// An opaque, shadowless fill.
    pub fn solid(color: Rgba8) -> Self {
        Self {
            color,
            opacity: 1.0,
            shadow: None,
        }
    }
}

/// Mutable 2D drawing target strokes are painted onto.
///
/// Implementations are free to batch: draw calls only have to be visible in
/// the pixel state after [`flush`](Self::flush). The scheduler flushes at
/// every turn boundary, so a batch never spans a suspension point.
pub trait PaintSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Reset every pixel to `color`, discarding pending draws.
    fn clear(&mut self, color: Rgba8);

    /// Fill a closed path with the given styling.
    fn fill_path(&mut self, path: &BezPath, style: &PathStyle);

    /// Make every preceding draw call visible in the pixel state.
    fn flush(&mut self);
}

/// Validate surface dimensions against the rasterizer's `u16` pixmap limit.
pub(crate) fn checked_dim(value: u32, axis: &str) -> ScribbleResult<u16> {
    value
        .try_into()
        .map_err(|_| ScribbleError::surface(format!("surface {axis} {value} exceeds u16")))
}
