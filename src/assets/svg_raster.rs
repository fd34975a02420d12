use crate::foundation::error::{WedgeError, WedgeResult};
use anyhow::Context;

/// Largest raster we are willing to allocate for an icon, per side.
const MAX_DIM: u32 = 4096;

pub(crate) fn parse_svg(bytes: &[u8]) -> WedgeResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    let size = tree.size();
    if !(size.width().is_finite() && size.height().is_finite())
        || size.width() <= 0.0
        || size.height() <= 0.0
    {
        return Err(WedgeError::validation("svg has invalid width/height"));
    }
    Ok(tree)
}

/// Rasterize `tree` into a `side`×`side` premultiplied RGBA8 buffer, scaled to fit and centered
/// so non-square drawings keep their aspect ratio.
pub(crate) fn rasterize_svg_square(tree: &usvg::Tree, side: u32) -> WedgeResult<Vec<u8>> {
    if side == 0 || side > MAX_DIM {
        return Err(WedgeError::render(format!(
            "svg raster size {side} outside 1..={MAX_DIM}"
        )));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(side, side)
        .ok_or_else(|| WedgeError::render("failed to allocate svg pixmap"))?;

    let size = tree.size();
    let side_f = side as f32;
    let scale = side_f / size.width().max(size.height());
    let tx = (side_f - size.width() * scale) / 2.0;
    let ty = (side_f - size.height() * scale) / 2.0;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale).post_translate(tx, ty);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}
