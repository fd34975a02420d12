use crate::foundation::core::Rgba8;
use crate::foundation::math::{over, unpremultiply_in_place};

/// A rendered frame as RGBA8 pixels, tightly packed and row-major.
///
/// Frames leave the renderer premultiplied; sinks convert as needed.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at (`x`, `y`) as stored, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixels, as PNG encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            unpremultiply_in_place(&mut out);
        }
        out
    }

    /// Opaque RGBA8 with every pixel composited over `background`.
    pub fn flattened_over(&self, background: Rgba8) -> Vec<u8> {
        let bg = background.with_alpha_f(1.0).to_premul();
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let src = if self.premultiplied {
                [px[0], px[1], px[2], px[3]]
            } else {
                Rgba8::rgba(px[0], px[1], px[2], px[3]).to_premul()
            };
            out.extend_from_slice(&over(bg, src));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
