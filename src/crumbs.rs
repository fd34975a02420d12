use crate::draw::list::{DrawList, DrawOp, Paint, circle, polygon};
use crate::foundation::core::{Affine, Point, Rgba8, Vec2};
use crate::foundation::rng::{centered, unit};
use crate::style::StyleSpec;
use rand::RngCore;
use std::f64::consts::TAU;

/// Crumbs land within this many pixels of the cutter, on each axis.
pub const CRUMB_SCATTER: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrumbShape {
    /// Filled circle.
    Disk,
    /// Small triangle, for flaky pastry.
    Shard,
}

/// A decorative particle left behind by the cutter (logical canvas pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crumb {
    pub position: Point,
    pub size: f64,
    pub color: Rgba8,
    pub rotation: f64,
}

#[derive(Clone, Debug, Default)]
pub struct CrumbStore {
    crumbs: Vec<Crumb>,
}

impl CrumbStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, crumb: Crumb) {
        self.crumbs.push(crumb);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Crumb> {
        self.crumbs.iter()
    }

    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn clear(&mut self) {
        self.crumbs.clear();
    }

    /// Scatter a burst of crumbs around `at` and return how many were added.
    ///
    /// Burst size is `floor(u * 3 * density) + 1`, so at least one crumb always lands.
    pub fn spawn_burst(&mut self, at: Point, spec: &StyleSpec, rng: &mut dyn RngCore) -> usize {
        let count = (unit(rng) * 3.0 * spec.crumb_density).floor() as usize + 1;
        for _ in 0..count {
            let jitter = Vec2::new(centered(rng), centered(rng)) * CRUMB_SCATTER;
            let size = (unit(rng) * 1.5 + 0.5) * spec.crumb_size;
            let color = pick(spec.crumb_colors, rng);
            let rotation = unit(rng) * TAU;
            self.crumbs.push(Crumb {
                position: at + jitter,
                size,
                color,
                rotation,
            });
        }
        tracing::trace!(count, total = self.crumbs.len(), "crumb burst");
        count
    }

    pub fn draw_list(&self, shape: CrumbShape) -> DrawList {
        let mut out = DrawList::new();
        for c in &self.crumbs {
            let s = c.size;
            let path = match shape {
                CrumbShape::Disk => circle(Point::ZERO, s),
                CrumbShape::Shard => polygon([
                    Point::new(0.0, -s),
                    Point::new(s, s),
                    Point::new(-s, s),
                ]),
            };
            let transform = Affine::translate(c.position.to_vec2()) * Affine::rotate(c.rotation);
            out.push(DrawOp::fill(path, Paint::Solid(c.color)).with_transform(transform));
        }
        out
    }
}

fn pick(colors: &[Rgba8], rng: &mut dyn RngCore) -> Rgba8 {
    if colors.is_empty() {
        return Rgba8::WHITE;
    }
    let i = ((unit(rng) * colors.len() as f64) as usize).min(colors.len() - 1);
    colors[i]
}

#[cfg(test)]
#[path = "../tests/unit/crumbs.rs"]
mod tests;
