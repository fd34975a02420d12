//! Sector and cut-line geometry shared by the renderer and the cut animator.
//!
//! Angles are in radians in y-down canvas space, so increasing angles run clockwise on screen.
//! Sector 0 starts at the top (`-PI/2`).

use crate::draw::list::PATH_TOLERANCE;
use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::error::{WedgeError, WedgeResult};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Gap between the dish rim and the canvas edge, in logical pixels.
pub const DISH_MARGIN: f64 = 30.0;

/// Where the dish sits on a square canvas of `size` logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DishLayout {
    pub center: Point,
    pub radius: f64,
}

impl DishLayout {
    pub fn for_size(size: f64) -> Self {
        let half = size / 2.0;
        Self {
            center: Point::new(half, half),
            radius: (half - DISH_MARGIN).max(0.0),
        }
    }
}

/// Number of slices, bounded like the slider that picks it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct SliceCount(u32);

impl SliceCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 24;

    pub fn new(n: u32) -> WedgeResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&n) {
            return Err(WedgeError::validation(format!(
                "slice count {n} out of range {}..={}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_even(self) -> bool {
        self.0.is_multiple_of(2)
    }

    /// Angular span of one slice.
    pub fn step(self) -> f64 {
        TAU / f64::from(self.0)
    }
}

impl Default for SliceCount {
    fn default() -> Self {
        Self(8)
    }
}

impl TryFrom<u32> for SliceCount {
    type Error = WedgeError;

    fn try_from(n: u32) -> WedgeResult<Self> {
        Self::new(n)
    }
}

impl From<SliceCount> for u32 {
    fn from(n: SliceCount) -> u32 {
        n.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub index: u32,
    pub start: f64,
    pub end: f64,
}

impl Sector {
    /// Bisector angle.
    pub fn mid(&self) -> f64 {
        self.start + (self.end - self.start) / 2.0
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

pub fn sectors(n: SliceCount) -> Vec<Sector> {
    let step = n.step();
    (0..n.get())
        .map(|i| Sector {
            index: i,
            start: f64::from(i) * step - FRAC_PI_2,
            end: f64::from(i + 1) * step - FRAC_PI_2,
        })
        .collect()
}

/// Number of cutter passes: one per diameter for even counts, one per radius for odd counts.
pub fn cut_count(n: SliceCount) -> u32 {
    if n.is_even() { n.get() / 2 } else { n.get() }
}

/// Angle of the `i`-th cut line.
pub fn cut_angle(n: SliceCount, i: u32) -> f64 {
    f64::from(i) * n.step() - FRAC_PI_2
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutKind {
    /// Straight through the center; makes two slice boundaries at once.
    Diameter,
    /// From the center out to the rim.
    Radius,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutLine {
    pub kind: CutKind,
    pub angle: f64,
    pub from: Point,
    pub to: Point,
}

/// Where the cuts go. Lines extend `overshoot` past the rim.
pub fn cut_lines(n: SliceCount, center: Point, radius: f64, overshoot: f64) -> Vec<CutLine> {
    let reach = radius + overshoot;
    (0..cut_count(n))
        .map(|i| {
            let angle = cut_angle(n, i);
            if n.is_even() {
                CutLine {
                    kind: CutKind::Diameter,
                    angle,
                    from: center + Vec2::from_angle(angle) * reach,
                    to: center + Vec2::from_angle(angle + PI) * reach,
                }
            } else {
                CutLine {
                    kind: CutKind::Radius,
                    angle,
                    from: center,
                    to: center + Vec2::from_angle(angle) * reach,
                }
            }
        })
        .collect()
}

/// Triangle fan from the center through the sector's arc.
pub fn wedge_path(center: Point, radius: f64, sector: &Sector) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(center);
    if radius <= 0.0 {
        p.close_path();
        return p;
    }
    p.line_to(center + Vec2::from_angle(sector.start) * radius);
    let arc = kurbo::Arc::new(
        center,
        Vec2::new(radius, radius),
        sector.start,
        sector.span(),
        0.0,
    );
    arc.to_cubic_beziers(PATH_TOLERANCE, |p1, p2, p3| p.curve_to(p1, p2, p3));
    p.close_path();
    p
}

/// Outward displacement of a cut slice along its bisector.
pub fn explosion_offset(sector: &Sector, distance: f64) -> Vec2 {
    Vec2::from_angle(sector.mid()) * distance
}

#[cfg(test)]
#[path = "../tests/unit/geometry.rs"]
mod tests;
