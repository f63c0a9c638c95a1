use crate::foundation::core::{BezPath, Rgba8};
use crate::foundation::error::{ScribbleError, ScribbleResult};
use crate::surface::{PaintSurface, PathStyle, checked_dim};

/// CPU raster surface backed by a `vello_cpu` pixmap.
///
/// Draw calls accumulate into a render context and are composited onto the
/// pixmap on [`flush`](PaintSurface::flush); pixel readback flushes
/// implicitly, so `pixels`/`to_image` always observe completed batches.
pub struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    pending: Option<vello_cpu::RenderContext>,
}

impl CpuSurface {
    /// Create a surface of the given pixel dimensions, cleared to
    /// transparent.
    ///
    /// Dimensions above `u16::MAX` are rejected (pixmap limit).
    pub fn new(width: u32, height: u32) -> ScribbleResult<Self> {
        let w = checked_dim(width, "width")?;
        let h = checked_dim(height, "height")?;
        Ok(Self {
            width: w,
            height: h,
            pixmap: vello_cpu::Pixmap::new(w, h),
            pending: None,
        })
    }

    fn ctx(&mut self) -> &mut vello_cpu::RenderContext {
        self.pending
            .get_or_insert_with(|| vello_cpu::RenderContext::new(self.width, self.height))
    }

    /// Premultiplied RGBA8 pixel data, row-major.
    pub fn pixels(&mut self) -> &[u8] {
        self.flush();
        self.pixmap.data_as_u8_slice()
    }

    /// Snapshot the surface as a straight-alpha [`image::RgbaImage`].
    pub fn to_image(&mut self) -> ScribbleResult<image::RgbaImage> {
        let (w, h) = (u32::from(self.width), u32::from(self.height));
        let mut data = self.pixels().to_vec();
        for px in data.chunks_exact_mut(4) {
            let a = px[3];
            if a > 0 && a < 255 {
                for c in px.iter_mut().take(3) {
                    *c = ((u16::from(*c) * 255) / u16::from(a)).min(255) as u8;
                }
            }
        }
        image::RgbaImage::from_raw(w, h, data)
            .ok_or_else(|| ScribbleError::surface("pixmap length mismatch during readback"))
    }
}

impl PaintSurface for CpuSurface {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn clear(&mut self, color: Rgba8) {
        self.pending = None;
        let premul = color.to_premul_bytes();
        for px in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
    }

    fn fill_path(&mut self, path: &BezPath, style: &PathStyle) {
        if style.color.a == 0 || style.opacity <= 0.0 {
            return;
        }

        let cpu_path = bezpath_to_cpu(path);
        let ctx = self.ctx();

        if let Some(shadow) = style.shadow {
            // Cheap shadow: an offset translucent under-fill. The blur radius
            // only attenuates alpha; there is no real gaussian pass.
            let alpha = (0.5 / (1.0 + shadow.blur)).clamp(0.1, 0.5) as f32;
            let c = shadow.color.with_opacity(alpha * style.opacity);
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                shadow.offset.x,
                shadow.offset.y,
            )));
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
            ctx.fill_path(&cpu_path);
        }

        let c = style.color.with_opacity(style.opacity);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        ctx.fill_path(&cpu_path);
    }

    fn flush(&mut self) {
        if let Some(mut ctx) = self.pending.take() {
            ctx.flush();
            ctx.render_to_pixmap(&mut self.pixmap);
        }
    }
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/cpu.rs"]
mod tests;
