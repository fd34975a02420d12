use crate::draw::gradient::RadialGradient;
use crate::draw::list::{DrawList, Paint, StrokeStyle, circle, rect};
use crate::foundation::core::{BezPath, Point, Rgba8, Vec2};
use crate::foundation::rng::centered;
use rand::RngCore;
use std::f64::consts::TAU;

const SPECKLES: usize = 500;
pub(crate) const SCORE_LINES: usize = 24;

pub fn generate(out: &mut DrawList, c: Point, r: f64, rng: &mut dyn RngCore) {
    let body = RadialGradient::concentric(c, 0.0, r)
        .stop(0.0, Rgba8::rgb(0xf5, 0xcb, 0xa7))
        .stop(0.8, Rgba8::rgb(0xd3, 0x54, 0x00))
        .stop(1.0, Rgba8::rgb(0xa0, 0x40, 0x00));
    out.fill(circle(c, r), Paint::Radial(body));

    // Flaky butter speckle; each flake is a 2x2 square anchored at its top-left corner.
    let flake = Rgba8::rgba_f(255, 255, 255, 0.05);
    for _ in 0..SPECKLES {
        let p = c + Vec2::new(centered(rng), centered(rng)) * (2.0 * r);
        if p.distance(c) < r - 3.0 {
            out.fill_color(rect(p.x, p.y, 2.0, 2.0), flake);
        }
    }

    // Scored sun pattern: curved strokes from near the center out to the rim.
    let score = Rgba8::rgba_f(120, 40, 0, 0.6);
    for i in 0..SCORE_LINES {
        let start = (i as f64 / SCORE_LINES as f64) * TAU;
        let end = start + 0.5;
        let mut p = BezPath::new();
        p.move_to(c + Vec2::from_angle(start) * 10.0);
        p.quad_to(
            c + Vec2::from_angle(start + 0.2) * (r * 0.5),
            c + Vec2::from_angle(end) * (r - 10.0).max(0.0),
        );
        out.stroke(p, score, StrokeStyle::new(3.0).round());
    }

    let shine = RadialGradient::new(c - Vec2::new(r * 0.3, r * 0.3), 10.0, c, r)
        .stop(0.0, Rgba8::rgba_f(255, 255, 255, 0.3))
        .stop(1.0, Rgba8::rgba_f(255, 255, 255, 0.0));
    out.fill(circle(c, r), Paint::Radial(shine));
}
