use crate::draw::gradient::RadialGradient;
use crate::draw::list::{DrawList, DrawOp, Paint, circle, ellipse};
use crate::foundation::core::{Affine, BezPath, Point, Rgba8, Vec2};
use crate::texture::spiral::spiral_layout;
use rand::RngCore;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

pub(crate) const STRAWBERRY: f64 = 22.0;
/// Spiral reach, in berries, past which berries grow instead of multiplying.
pub(crate) const MAX_RINGS: f64 = 16.0;
const SEED: Rgba8 = Rgba8::rgb(0xf1, 0xc4, 0x0f);

/// The tart is laid out deterministically; `rng` is unused.
pub fn generate(out: &mut DrawList, c: Point, r: f64, _rng: &mut dyn RngCore) {
    out.fill_color(circle(c, r), Rgba8::rgb(0xe5, 0x98, 0x66));
    out.fill_color(circle(c, (r - 10.0).max(0.0)), Rgba8::rgb(0xfe, 0xf9, 0xe7));

    let size = berry_size(r);
    let scale = Affine::scale(size / STRAWBERRY);
    let berry = strawberry_path(STRAWBERRY);
    let flesh = RadialGradient::concentric(Point::ZERO, 2.0, STRAWBERRY / 2.0)
        .stop(0.0, Rgba8::rgb(0xe7, 0x4c, 0x3c))
        .stop(1.0, Rgba8::rgb(0x92, 0x2b, 0x21));
    for slot in spiral_layout(berry_reach(r), size) {
        let at = c + Vec2::from_angle(slot.angle) * slot.radius;
        let place =
            Affine::translate(at.to_vec2()) * Affine::rotate(slot.angle + FRAC_PI_2) * scale;
        out.push(DrawOp::fill(berry.clone(), Paint::Radial(flesh.clone())).with_transform(place));
        for seed in [(3.0, 3.0), (-3.0, -2.0), (0.0, 6.0)] {
            out.push(
                DrawOp::fill(circle(Point::from(seed), 1.0), Paint::Solid(SEED))
                    .with_transform(place),
            );
        }
    }

    out.fill_color(
        circle(c, (r - 10.0).max(0.0)),
        Rgba8::rgba_f(255, 200, 200, 0.15),
    );
    out.fill_color(
        ellipse(c - Vec2::new(r * 0.4, r * 0.4), 30.0, 15.0, FRAC_PI_4),
        Rgba8::rgba_f(255, 255, 255, 0.4),
    );
}

/// Berry edge length for a dish of radius `r`; keeps the berry count bounded on huge dishes.
pub(crate) fn berry_size(r: f64) -> f64 {
    STRAWBERRY.max((r - 20.0) / MAX_RINGS)
}

/// Outermost spiral radius, pulled in by the growth of the berry past its base size.
pub(crate) fn berry_reach(r: f64) -> f64 {
    r - 20.0 - (berry_size(r) - STRAWBERRY) / 2.0
}

/// Heart-ish berry: two mirrored cubic lobes, tip at the top.
fn strawberry_path(size: f64) -> BezPath {
    let h = size / 2.0;
    let mut p = BezPath::new();
    p.move_to((0.0, -h));
    p.curve_to((h, -h), (h, h), (0.0, h));
    p.curve_to((-h, h), (-h, -h), (0.0, -h));
    p.close_path();
    p
}
