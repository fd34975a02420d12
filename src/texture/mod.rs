//! Procedural dish textures.
//!
//! Each style's generator paints into a [`DrawList`] in logical canvas pixels; [`TextureCache`]
//! rasterizes that list once per (style, physical size) and hands the pixels to the renderer.

pub(crate) mod cache;
pub(crate) mod galette;
pub(crate) mod pizza;
pub(crate) mod spiral;
pub(crate) mod tart;

use crate::draw::list::DrawList;
use crate::foundation::core::Point;
use crate::style::Style;
use rand::RngCore;

/// Run `style`'s generator for a dish of `radius` around `center`.
pub fn generate(style: Style, center: Point, radius: f64, rng: &mut dyn RngCore) -> DrawList {
    let mut out = DrawList::new();
    (style.spec().generator)(&mut out, center, radius, rng);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/texture/generators.rs"]
mod tests;
