use crate::animate::clock::Millis;
use crate::foundation::core::{Point, Vec2};
use crate::geometry::{CutKind, SliceCount, cut_angle, cut_count};
use std::f64::consts::PI;

/// Cutter parks at its start point this long before each move.
pub const PRE_ROLL_MS: Millis = 50;
/// Crumb sampling period while the cutter moves.
pub const SAMPLE_INTERVAL_MS: Millis = 30;
pub const DIAMETER_MOVE_MS: Millis = 400;
pub const RADIUS_MOVE_MS: Millis = 300;

const CENTER_PCT: f64 = 50.0;
const REACH_PCT: f64 = 45.0;

/// One pass of the cutter. `start`/`end` are in percent of the canvas (0..100 on both axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutMotion {
    pub index: u32,
    pub kind: CutKind,
    pub start: Point,
    pub end: Point,
    pub duration: Millis,
    /// Direction of travel, radians.
    pub rotation: f64,
}

impl CutMotion {
    /// Linear position `elapsed` ms into the move, clamped to the segment.
    pub fn position_at(&self, elapsed: Millis) -> Point {
        let t = if self.duration == 0 {
            1.0
        } else {
            (elapsed as f64 / self.duration as f64).min(1.0)
        };
        self.start.lerp(self.end, t)
    }
}

/// Where the cutter icon is drawn, in logical canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutterPose {
    pub position: Point,
    pub rotation: f64,
}

pub fn percent_to_px(p: Point, size: f64) -> Point {
    Point::new(p.x / 100.0 * size, p.y / 100.0 * size)
}

/// One motion per cut line: diameters for even counts, center-out radii for odd counts.
pub fn plan_motions(n: SliceCount) -> Vec<CutMotion> {
    let center = Point::new(CENTER_PCT, CENTER_PCT);
    (0..cut_count(n))
        .map(|i| {
            let angle = cut_angle(n, i);
            let (kind, start, end, duration) = if n.is_even() {
                (
                    CutKind::Diameter,
                    center + Vec2::from_angle(angle) * REACH_PCT,
                    center + Vec2::from_angle(angle + PI) * REACH_PCT,
                    DIAMETER_MOVE_MS,
                )
            } else {
                (
                    CutKind::Radius,
                    center,
                    center + Vec2::from_angle(angle) * REACH_PCT,
                    RADIUS_MOVE_MS,
                )
            };
            let d = end - start;
            CutMotion {
                index: i,
                kind,
                start,
                end,
                duration,
                rotation: d.y.atan2(d.x),
            }
        })
        .collect()
}

/// Wall time of a whole sequence, pre-rolls included.
pub fn sequence_duration(motions: &[CutMotion]) -> Millis {
    motions.iter().map(|m| PRE_ROLL_MS + m.duration).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/animate/motion.rs"]
mod tests;
