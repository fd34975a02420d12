use crate::crumbs::CrumbShape;
use crate::draw::list::DrawList;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{WedgeError, WedgeResult};
use crate::texture;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;

/// Paints a style's texture into `out`, centered on `center` with the given radius (logical px).
pub type TextureGenerator = fn(out: &mut DrawList, center: Point, radius: f64, rng: &mut dyn RngCore);

/// Which dish is on the board.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Pizza,
    Galette,
    #[serde(alias = "tarte")]
    Tart,
}

/// Everything a style contributes: its texture generator and how its crumbs look.
#[derive(Debug)]
pub struct StyleSpec {
    pub generator: TextureGenerator,
    /// Halo color drawn behind the dish.
    pub shadow: Rgba8,
    pub crumb_colors: &'static [Rgba8],
    /// Multiplies the per-sample burst size.
    pub crumb_density: f64,
    /// Multiplies the per-crumb size.
    pub crumb_size: f64,
    pub crumb_shape: CrumbShape,
}

static PIZZA: StyleSpec = StyleSpec {
    generator: texture::pizza::generate,
    shadow: Rgba8::rgb(0xff, 0x5e, 0x62),
    crumb_colors: &[
        Rgba8::rgb(0xd6, 0x8a, 0x45),
        Rgba8::rgb(0x8b, 0x45, 0x13),
        Rgba8::rgb(0xb9, 0x2b, 0x27),
    ],
    crumb_density: 1.0,
    crumb_size: 2.0,
    crumb_shape: CrumbShape::Disk,
};

static GALETTE: StyleSpec = StyleSpec {
    generator: texture::galette::generate,
    shadow: Rgba8::rgb(0xd4, 0xaf, 0x37),
    crumb_colors: &[
        Rgba8::rgb(0xd4, 0xaf, 0x37),
        Rgba8::rgb(0xf5, 0xcb, 0xa7),
        Rgba8::rgb(0x8b, 0x45, 0x13),
        Rgba8::rgb(0xff, 0xd7, 0x00),
    ],
    // Denser but much finer flakes.
    crumb_density: 3.0,
    crumb_size: 1.2,
    crumb_shape: CrumbShape::Shard,
};

static TART: StyleSpec = StyleSpec {
    generator: texture::tart::generate,
    shadow: Rgba8::rgb(0xff, 0x00, 0x40),
    crumb_colors: &[
        Rgba8::rgb(0xe5, 0x98, 0x66),
        Rgba8::rgb(0xd3, 0x54, 0x00),
        Rgba8::rgb(0xfe, 0xf9, 0xe7),
    ],
    crumb_density: 1.2,
    crumb_size: 1.5,
    crumb_shape: CrumbShape::Disk,
};

impl Style {
    pub const ALL: [Style; 3] = [Style::Pizza, Style::Galette, Style::Tart];

    pub fn spec(self) -> &'static StyleSpec {
        match self {
            Self::Pizza => &PIZZA,
            Self::Galette => &GALETTE,
            Self::Tart => &TART,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pizza => "pizza",
            Self::Galette => "galette",
            Self::Tart => "tart",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = WedgeError;

    fn from_str(s: &str) -> WedgeResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pizza" => Ok(Self::Pizza),
            "galette" => Ok(Self::Galette),
            "tart" | "tarte" => Ok(Self::Tart),
            other => Err(WedgeError::validation(format!(
                "unknown style \"{other}\" (expected pizza, galette or tart)"
            ))),
        }
    }
}
