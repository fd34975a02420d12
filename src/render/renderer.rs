use crate::assets::cutter::CutterIcon;
use crate::animate::motion::CutterPose;
use crate::crumbs::CrumbStore;
use crate::draw::list::{DrawList, circle};
use crate::foundation::core::{Affine, Rgba8, Viewport};
use crate::foundation::error::{WedgeError, WedgeResult};
use crate::geometry::{DishLayout, SliceCount};
use crate::render::backend::FrameRGBA;
use crate::render::blur::{BlurSpec, blur_rgba8_premul};
use crate::render::cpu::{
    CpuRasterizer, dims_u16, fill_with_image, image_from_pixmap, paint_list, paint_op,
    pixmap_from_premul_bytes,
};
use crate::render::plan::{GLOW_BLUR, HALO_BLUR, compile_scene, glow_color, guide_list};
use crate::session::RenderState;
use crate::texture::cache::{Texture, TextureKey};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq)]
struct LayerKey<T> {
    what: T,
    px: u32,
    size: f64,
}

/// Composites the cached texture into wedges and draws everything around them.
///
/// Blurred layers (halo, guide glow) only depend on style, slice count and size, so they are
/// baked once and reused until one of those changes.
pub struct SliceRenderer {
    raster: CpuRasterizer,
    background: Rgba8,
    halo: Option<(LayerKey<Rgba8>, vello_cpu::Image)>,
    glow: Option<(LayerKey<SliceCount>, vello_cpu::Image)>,
}

impl SliceRenderer {
    pub fn new(background: Rgba8) -> Self {
        Self {
            raster: CpuRasterizer::new(),
            background,
            halo: None,
            glow: None,
        }
    }

    pub fn background(&self) -> Rgba8 {
        self.background
    }

    /// Shared with the texture cache so both reuse one render context.
    pub fn rasterizer_mut(&mut self) -> &mut CpuRasterizer {
        &mut self.raster
    }

    #[tracing::instrument(level = "trace", skip_all, fields(style = %state.style, slices = state.slices.get(), cut = state.cut))]
    pub fn render(
        &mut self,
        state: &RenderState,
        crumbs: &CrumbStore,
        texture: &Texture,
        viewport: &Viewport,
        cutter: Option<(&CutterIcon, CutterPose)>,
    ) -> WedgeResult<FrameRGBA> {
        viewport.validate()?;
        let expected = TextureKey::new(state.style, viewport);
        if texture.key() != expected {
            return Err(WedgeError::render(format!(
                "stale texture {:?}, frame needs {:?}",
                texture.key(),
                expected
            )));
        }

        let px = viewport.physical_size();
        let side = dims_u16(px)?;
        let plan = compile_scene(state, crumbs, viewport.size, cutter.map(|(_, pose)| pose));
        let device = viewport.device_transform();
        let halo = self.halo_layer(plan.halo, plan.layout, viewport)?;
        let glow = if plan.guides.is_empty() {
            None
        } else {
            Some(self.glow_layer(state.slices, plan.layout, viewport)?)
        };

        let bg = self.background;
        let texture_paint = texture.paint();
        let texel = Affine::scale(1.0 / viewport.dpr);
        let mut pixmap = vello_cpu::Pixmap::new(side, side);
        self.raster.with_ctx_mut(side, side, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
            ctx.fill_rect(&frame_rect(px));

            paint_layer(ctx, halo, px);
            paint_list(ctx, &plan.crumbs, device)?;
            for wedge in &plan.wedges {
                fill_with_image(
                    ctx,
                    texture_paint.clone(),
                    device * Affine::translate(wedge.offset),
                    texel,
                    &wedge.path,
                );
                if let Some(edge) = &wedge.edge {
                    paint_op(ctx, edge, device)?;
                }
            }
            if let Some(glow) = glow {
                paint_layer(ctx, glow, px);
                paint_list(ctx, &plan.guides, device)?;
            }
            if let Some((icon, pose)) = cutter {
                icon.paint(ctx, device, pose);
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(FrameRGBA {
            width: px,
            height: px,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn halo_layer(
        &mut self,
        color: Rgba8,
        layout: DishLayout,
        viewport: &Viewport,
    ) -> WedgeResult<vello_cpu::Image> {
        let key = LayerKey {
            what: color,
            px: viewport.physical_size(),
            size: viewport.size,
        };
        if let Some((k, image)) = &self.halo
            && *k == key
        {
            return Ok(image.clone());
        }
        let mut list = DrawList::new();
        list.fill_color(circle(layout.center, layout.radius), color);
        let image = self.blurred(&list, viewport, HALO_BLUR)?;
        tracing::debug!(color = %color.to_hex(), px = key.px, "halo baked");
        self.halo = Some((key, image.clone()));
        Ok(image)
    }

    fn glow_layer(
        &mut self,
        slices: SliceCount,
        layout: DishLayout,
        viewport: &Viewport,
    ) -> WedgeResult<vello_cpu::Image> {
        let key = LayerKey {
            what: slices,
            px: viewport.physical_size(),
            size: viewport.size,
        };
        if let Some((k, image)) = &self.glow
            && *k == key
        {
            return Ok(image.clone());
        }
        let list = guide_list(slices, layout).tinted(glow_color());
        let image = self.blurred(&list, viewport, GLOW_BLUR)?;
        tracing::debug!(slices = slices.get(), px = key.px, "guide glow baked");
        self.glow = Some((key, image.clone()));
        Ok(image)
    }

    fn blurred(
        &mut self,
        list: &DrawList,
        viewport: &Viewport,
        blur: f64,
    ) -> WedgeResult<vello_cpu::Image> {
        let px = viewport.physical_size();
        let side = dims_u16(px)?;
        let sharp = self
            .raster
            .rasterize(list, viewport.device_transform(), side, side)?;
        let spec = BlurSpec::from_shadow_blur(blur, viewport.dpr);
        let soft = blur_rgba8_premul(sharp.data_as_u8_slice(), px, px, spec)?;
        let pixmap = pixmap_from_premul_bytes(&soft, px, px)?;
        Ok(image_from_pixmap(Arc::new(pixmap)))
    }
}

fn frame_rect(px: u32) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(px), f64::from(px))
}

/// Draw a full-frame premultiplied layer 1:1.
fn paint_layer(ctx: &mut vello_cpu::RenderContext, layer: vello_cpu::Image, px: u32) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(layer);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.fill_rect(&frame_rect(px));
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
