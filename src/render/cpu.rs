use crate::draw::gradient::RadialGradient;
use crate::draw::list::{DrawList, DrawMode, DrawOp, Paint};
use crate::foundation::core::{Affine, BezPath, Rect};
use crate::foundation::error::{WedgeError, WedgeResult};
use std::sync::Arc;

/// Executes [`DrawList`]s with `vello_cpu`.
///
/// `vello_cpu` always renders into a fresh target, so a frame is one context pass: callers paint
/// everything through [`CpuRasterizer::with_ctx_mut`] and read the result back once.
#[derive(Default)]
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with a reset context of the given size, reusing the previous one when it fits.
    pub(crate) fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> WedgeResult<R>,
    ) -> WedgeResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Rasterize `list` (in logical space, mapped by `device`) onto a transparent pixmap.
    pub fn rasterize(
        &mut self,
        list: &DrawList,
        device: Affine,
        width: u16,
        height: u16,
    ) -> WedgeResult<vello_cpu::Pixmap> {
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        self.with_ctx_mut(width, height, |ctx| {
            paint_list(ctx, list, device)?;
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;
        Ok(pixmap)
    }
}

pub(crate) fn paint_list(
    ctx: &mut vello_cpu::RenderContext,
    list: &DrawList,
    device: Affine,
) -> WedgeResult<()> {
    for op in list.iter() {
        paint_op(ctx, op, device)?;
    }
    Ok(())
}

pub(crate) fn paint_op(
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
    device: Affine,
) -> WedgeResult<()> {
    let full = device * op.transform;
    ctx.set_transform(affine_to_cpu(full));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    match &op.paint {
        Paint::Solid(c) => {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        }
        Paint::Radial(g) => {
            let canvas = Rect::new(0.0, 0.0, f64::from(ctx.width()), f64::from(ctx.height()));
            let area = device.transform_rect_bbox(op.bounds()).intersect(canvas);
            let Some((image, paint_transform)) = bake_radial(g, full, area)? else {
                return Ok(());
            };
            ctx.set_paint(image);
            ctx.set_paint_transform(affine_to_cpu(paint_transform));
        }
    }

    let path = bezpath_to_cpu(&op.path);
    match op.mode {
        DrawMode::Fill => ctx.fill_path(&path),
        DrawMode::Stroke(s) => {
            let cap = if s.round_caps {
                vello_cpu::kurbo::Cap::Round
            } else {
                vello_cpu::kurbo::Cap::Butt
            };
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(s.width).with_caps(cap));
            ctx.stroke_path(&path);
        }
    }
    Ok(())
}

/// Fill `path` with an image. `paint_transform` maps image pixels into the path's local space.
pub(crate) fn fill_with_image(
    ctx: &mut vello_cpu::RenderContext,
    image: vello_cpu::Image,
    transform: Affine,
    paint_transform: Affine,
    path: &BezPath,
) {
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint(image);
    ctx.set_paint_transform(affine_to_cpu(paint_transform));
    ctx.fill_path(&bezpath_to_cpu(path));
}

/// Sample a gradient into an image covering `area` (device pixels).
///
/// Returns the image and the paint transform that lands it on `area` when drawn under `full`.
/// `None` when nothing is visible or `full` cannot be inverted.
fn bake_radial(
    gradient: &RadialGradient,
    full: Affine,
    area: Rect,
) -> WedgeResult<Option<(vello_cpu::Image, Affine)>> {
    if full.determinant().abs() < 1e-12 {
        return Ok(None);
    }
    let x0 = area.x0.floor().max(0.0);
    let y0 = area.y0.floor().max(0.0);
    let w = (area.x1.ceil() - x0).max(0.0) as u32;
    let h = (area.y1.ceil() - y0).max(0.0) as u32;
    if w == 0 || h == 0 {
        return Ok(None);
    }

    let inv = full.inverse();
    let mut bytes = vec![0u8; (w as usize) * (h as usize) * 4];
    for (i, px) in bytes.chunks_exact_mut(4).enumerate() {
        let x = x0 + (i % w as usize) as f64 + 0.5;
        let y = y0 + (i / w as usize) as f64 + 0.5;
        px.copy_from_slice(&gradient.sample_premul(inv * kurbo::Point::new(x, y)));
    }
    let pixmap = pixmap_from_premul_bytes(&bytes, w, h)?;
    let paint_transform = inv * Affine::translate((x0, y0));
    Ok(Some((image_from_pixmap(Arc::new(pixmap)), paint_transform)))
}

pub(crate) fn image_from_pixmap(pixmap: Arc<vello_cpu::Pixmap>) -> vello_cpu::Image {
    vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(pixmap),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    }
}

pub(crate) fn dims_u16(px: u32) -> WedgeResult<u16> {
    px.try_into()
        .map_err(|_| WedgeError::render(format!("surface size {px} exceeds u16")))
}

pub(crate) fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> WedgeResult<vello_cpu::Pixmap> {
    let w = dims_u16(width)?;
    let h = dims_u16(height)?;
    if bytes.len() != (width as usize) * (height as usize) * 4 {
        return Err(WedgeError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
