//! Swappable stroke renderers.
//!
//! A [`StrokeRenderer`] paints one stroke between two endpoints onto a
//! [`PaintSurface`]. The closed set of built-in variants is selected at
//! runtime through [`StrokeKind`]; the scheduler depends only on the trait,
//! so variants can be swapped mid-session without scheduler changes.
//!
//! All variants emit filled ribbon outlines (a centerline plus a width
//! envelope), which keeps the surface contract down to a single `fill_path`
//! verb.

use kurbo::{ParamCurve, ParamCurveDeriv, QuadBez};

use crate::foundation::core::{BezPath, Point, Rgba8, Vec2};
use crate::rng::RandomSource;
use crate::surface::PaintSurface;

mod brush;
mod pen;
mod pencil;

pub use brush::Brush;
pub use pen::Pen;
pub use pencil::Pencil;

/// One stroke to paint.
#[derive(Clone, Copy, Debug)]
pub struct StrokeRequest {
    /// Nominal stroke width in pixels; variants modulate around it.
    pub width: f64,
    /// Stroke color. `None` makes the draw call a silent no-op (policy, not
    /// an error).
    pub color: Option<Rgba8>,
    /// Start endpoint.
    pub from: Point,
    /// End endpoint.
    pub to: Point,
}

/// Capability to paint one stroke onto a surface.
///
/// Side effects are confined to pixels within (or, for soft variants,
/// slightly beyond) the bounding box of the endpoints. Implementations must
/// treat a `None` color as a no-op.
pub trait StrokeRenderer {
    /// Paint one stroke.
    fn draw(&self, surface: &mut dyn PaintSurface, rng: &mut dyn RandomSource, req: &StrokeRequest);

    /// Relative draw cost versus the baseline variant.
    ///
    /// Callers targeting a fixed time budget can divide their batch size by
    /// this factor; the scheduler does not do so automatically.
    fn cost_factor(&self) -> u32 {
        1
    }
}

/// Built-in stroke variants, selectable at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeKind {
    /// Soft tapered brush with pressure variation and a gray drop shadow.
    #[default]
    Brush,
    /// Fixed-angle calligraphic nib with near-constant ink opacity.
    Pen,
    /// Grainy graphite look from two jittered sub-strokes (~2x draw cost).
    Pencil,
}

impl StrokeKind {
    /// The renderer implementing this variant.
    pub fn renderer(self) -> &'static dyn StrokeRenderer {
        match self {
            Self::Brush => &Brush,
            Self::Pen => &Pen,
            Self::Pencil => &Pencil,
        }
    }
}

/// Build a closed ribbon outline around a quadratic centerline.
///
/// `half_width` is evaluated at each sample parameter `t` in `[0, 1]`; the
/// outline offsets the centerline along its normal by that amount on both
/// sides. Degenerate tangents reuse the previous normal so zero-length
/// segments cannot produce NaN geometry.
pub(crate) fn ribbon(center: QuadBez, samples: usize, half_width: impl Fn(f64) -> f64) -> BezPath {
    let samples = samples.max(2);
    let deriv = center.deriv();

    let mut left = Vec::with_capacity(samples + 1);
    let mut right = Vec::with_capacity(samples + 1);
    let mut normal = Vec2::new(0.0, 1.0);

    for i in 0..=samples {
        let t = i as f64 / samples as f64;
        let pos = center.eval(t).to_vec2();
        let tangent = deriv.eval(t).to_vec2();
        let len = tangent.hypot();
        if len > 1e-9 {
            normal = Vec2::new(-tangent.y, tangent.x) / len;
        }
        let hw = half_width(t).max(0.0);
        left.push(pos + normal * hw);
        right.push(pos - normal * hw);
    }

    let mut path = BezPath::new();
    path.move_to(left[0].to_point());
    for p in left.iter().skip(1) {
        path.line_to(p.to_point());
    }
    for p in right.iter().rev() {
        path.line_to(p.to_point());
    }
    path.close_path();
    path
}

/// Centered jitter in `[-scale, scale)`.
pub(crate) fn jitter(rng: &mut dyn RandomSource, scale: f64) -> f64 {
    (rng.next_unit() * 2.0 - 1.0) * scale
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/kind.rs"]
mod tests;
