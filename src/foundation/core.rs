use crate::foundation::error::{WedgeError, WedgeResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> WedgeResult<Self> {
        if den == 0 {
            return Err(WedgeError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(WedgeError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Timestamp of frame `idx` in whole milliseconds (rounded to nearest).
    pub fn frame_time_ms(self, idx: FrameIndex) -> u64 {
        let num = u128::from(self.num);
        let den = u128::from(self.den);
        let t = (u128::from(idx.0) * 1000 * den + num / 2) / num;
        u64::try_from(t).unwrap_or(u64::MAX)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Straight-alpha RGBA8 color.
///
/// Serialized as `#RRGGBB` / `#RRGGBBAA` hex strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `rgba(r, g, b, alpha)` with a fractional alpha, as CSS writes it.
    pub fn rgba_f(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self::rgb(r, g, b).with_alpha_f(alpha)
    }

    pub fn with_alpha_f(self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub fn from_hex(s: &str) -> WedgeResult<Self> {
        parse_hex(s).map_err(WedgeError::validation)
    }

    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        let premul = |c: u8| -> u8 { ((u16::from(c) * a + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }
    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// The visible drawing surface: a square of `size` CSS pixels scaled by the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub size: f64,
    pub dpr: f64,
}

impl Viewport {
    pub const MAX_PHYSICAL: u32 = 8192;
    /// Texture generators work in logical pixels, so their cost follows this, not the dpr.
    pub const MAX_LOGICAL: f64 = 4096.0;

    pub fn new(size: f64, dpr: f64) -> WedgeResult<Self> {
        let v = Self { size, dpr };
        v.validate()?;
        Ok(v)
    }

    pub fn validate(&self) -> WedgeResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(WedgeError::validation("viewport size must be finite and > 0"));
        }
        if self.size > Self::MAX_LOGICAL {
            return Err(WedgeError::validation(format!(
                "viewport size {}px exceeds {}px",
                self.size,
                Self::MAX_LOGICAL
            )));
        }
        if !self.dpr.is_finite() || self.dpr <= 0.0 {
            return Err(WedgeError::validation(
                "device pixel ratio must be finite and > 0",
            ));
        }
        let px = self.size * self.dpr;
        if px.round() > f64::from(Self::MAX_PHYSICAL) {
            return Err(WedgeError::validation(format!(
                "viewport physical size {px:.0}px exceeds {}px",
                Self::MAX_PHYSICAL
            )));
        }
        Ok(())
    }

    /// Physical pixel size (square). Never smaller than 1x1.
    pub fn physical_size(&self) -> u32 {
        ((self.size * self.dpr).round() as u32).max(1)
    }

    /// Logical-to-physical transform.
    pub fn device_transform(&self) -> Affine {
        Affine::scale(self.dpr)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: 600.0,
            dpr: 1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
