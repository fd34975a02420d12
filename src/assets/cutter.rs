use crate::animate::motion::CutterPose;
use crate::assets::svg_raster::{parse_svg, rasterize_svg_square};
use crate::draw::list::rect;
use crate::foundation::core::Affine;
use crate::foundation::error::{WedgeError, WedgeResult};
use crate::render::cpu::{fill_with_image, image_from_pixmap, pixmap_from_premul_bytes};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// Pizza wheel, blade centered in the view box, handle trailing towards -x so that rotating by
/// the direction of travel puts the handle behind the cut.
const PIZZA_WHEEL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 48 48">
  <rect x="1" y="20.5" width="17" height="7" rx="3.5" fill="#8d6e63" stroke="#4e342e" stroke-width="1"/>
  <circle cx="24" cy="24" r="13" fill="#cfd8dc" stroke="#455a64" stroke-width="2"/>
  <circle cx="24" cy="24" r="9.5" fill="none" stroke="#90a4ae" stroke-width="1"/>
  <circle cx="24" cy="24" r="3" fill="#455a64"/>
</svg>"##;

/// Raw SVG bytes of a cutter icon file.
pub(crate) fn read_svg(path: &Path) -> WedgeResult<Vec<u8>> {
    Ok(std::fs::read(path).with_context(|| format!("read cutter svg '{}'", path.display()))?)
}

/// The cutter icon, rasterized once for a given logical size and pixel ratio.
#[derive(Clone)]
pub struct CutterIcon {
    size: f64,
    pixel_size: u32,
    pixmap: Arc<vello_cpu::Pixmap>,
}

impl std::fmt::Debug for CutterIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CutterIcon")
            .field("size", &self.size)
            .field("pixel_size", &self.pixel_size)
            .finish()
    }
}

impl CutterIcon {
    pub fn pizza_wheel(size: f64, dpr: f64) -> WedgeResult<Self> {
        Self::from_svg_data(PIZZA_WHEEL_SVG.as_bytes(), size, dpr)
    }

    pub fn from_path(path: &Path, size: f64, dpr: f64) -> WedgeResult<Self> {
        Self::from_svg_data(&read_svg(path)?, size, dpr)
    }

    #[tracing::instrument(level = "debug", skip(bytes))]
    pub fn from_svg_data(bytes: &[u8], size: f64, dpr: f64) -> WedgeResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(WedgeError::validation("cutter size must be finite and > 0"));
        }
        if !dpr.is_finite() || dpr <= 0.0 {
            return Err(WedgeError::validation(
                "device pixel ratio must be finite and > 0",
            ));
        }
        let tree = parse_svg(bytes)?;
        let pixel_size = ((size * dpr).round() as u32).max(1);
        let rgba = rasterize_svg_square(&tree, pixel_size)?;
        let pixmap = pixmap_from_premul_bytes(&rgba, pixel_size, pixel_size)?;
        Ok(Self {
            size,
            pixel_size,
            pixmap: Arc::new(pixmap),
        })
    }

    /// Logical edge length.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Draw centered on `pose.position`, rotated by `pose.rotation`.
    pub(crate) fn paint(&self, ctx: &mut vello_cpu::RenderContext, device: Affine, pose: CutterPose) {
        let half = self.size / 2.0;
        let place =
            device * Affine::translate(pose.position.to_vec2()) * Affine::rotate(pose.rotation);
        let texel = self.size / f64::from(self.pixel_size);
        let paint_transform = Affine::translate((-half, -half)) * Affine::scale(texel);
        fill_with_image(
            ctx,
            image_from_pixmap(self.pixmap.clone()),
            place,
            paint_transform,
            &rect(-half, -half, self.size, self.size),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cutter.rs"]
mod tests;
