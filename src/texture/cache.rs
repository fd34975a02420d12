use crate::foundation::core::Viewport;
use crate::foundation::error::{WedgeError, WedgeResult};
use crate::geometry::DishLayout;
use crate::render::cpu::{CpuRasterizer, dims_u16, image_from_pixmap};
use crate::style::Style;
use rand::RngCore;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureKey {
    pub style: Style,
    pub width: u32,
    pub height: u32,
    /// Logical size and dpr as bits; the dish layout follows the former, the raster scale the latter.
    size_bits: u64,
    dpr_bits: u64,
}

impl TextureKey {
    pub fn new(style: Style, viewport: &Viewport) -> Self {
        let px = viewport.physical_size();
        Self {
            style,
            width: px,
            height: px,
            size_bits: viewport.size.to_bits(),
            dpr_bits: viewport.dpr.to_bits(),
        }
    }
}

/// A rasterized dish, premultiplied RGBA8 at physical resolution.
#[derive(Clone)]
pub struct Texture {
    key: TextureKey,
    pixmap: Arc<vello_cpu::Pixmap>,
}

impl Texture {
    pub fn key(&self) -> TextureKey {
        self.key
    }

    pub fn style(&self) -> Style {
        self.key.style
    }

    pub fn width(&self) -> u32 {
        self.key.width
    }

    pub fn height(&self) -> u32 {
        self.key.height
    }

    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub(crate) fn paint(&self) -> vello_cpu::Image {
        image_from_pixmap(self.pixmap.clone())
    }
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture").field("key", &self.key).finish()
    }
}

/// Holds the most recent texture and regenerates it only when the style or the viewport
/// changes, or after [`TextureCache::invalidate`].
#[derive(Debug, Default)]
pub struct TextureCache {
    current: Option<Texture>,
    stale: bool,
    generations: u64,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Whether `ensure` for this key would return the cached texture without regenerating.
    pub fn is_fresh_for(&self, key: TextureKey) -> bool {
        !self.stale && self.current.as_ref().is_some_and(|t| t.key == key)
    }

    /// How many times a generator has run.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    pub fn current(&self) -> Option<&Texture> {
        self.current.as_ref()
    }

    #[tracing::instrument(level = "debug", skip(self, raster, rng), fields(size = viewport.size, dpr = viewport.dpr))]
    pub fn ensure(
        &mut self,
        style: Style,
        viewport: &Viewport,
        raster: &mut CpuRasterizer,
        rng: &mut dyn RngCore,
    ) -> WedgeResult<&Texture> {
        let key = TextureKey::new(style, viewport);
        if self.is_fresh_for(key) {
            tracing::trace!(%style, "texture cache hit");
        } else {
            let layout = DishLayout::for_size(viewport.size);
            let list = super::generate(style, layout.center, layout.radius, rng);
            let side = dims_u16(key.width)?;
            let pixmap = raster.rasterize(&list, viewport.device_transform(), side, side)?;
            self.current = Some(Texture {
                key,
                pixmap: Arc::new(pixmap),
            });
            self.stale = false;
            self.generations += 1;
            tracing::debug!(
                %style,
                width = key.width,
                ops = list.len(),
                generation = self.generations,
                "texture regenerated"
            );
        }
        self.current
            .as_ref()
            .ok_or_else(|| WedgeError::render("texture cache is empty"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/cache.rs"]
mod tests;
