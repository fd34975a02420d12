use crate::draw::list::{DrawList, DrawOp, Paint, StrokeStyle, circle, ellipse, line, polygon};
use crate::foundation::core::{Affine, Point, Rgba8, Vec2};
use crate::foundation::rng::{centered, unit};
use rand::RngCore;
use std::f64::consts::{PI, TAU};

const CRUST: Rgba8 = Rgba8::rgb(0xd6, 0x8a, 0x45);
const SAUCE: Rgba8 = Rgba8::rgb(0xb9, 0x2b, 0x27);
const CHEESE: Rgba8 = Rgba8::rgb(0xff, 0xec, 0xb3);
pub(crate) const PEPPERONI: Rgba8 = Rgba8::rgb(0xa9, 0x32, 0x26);
const BASIL: Rgba8 = Rgba8::rgb(0x2e, 0xcc, 0x71);
const BASIL_VEIN: Rgba8 = Rgba8::rgb(0x27, 0xae, 0x60);

const SAUCE_POINTS: usize = 100;
const CHEESE_BLOBS: usize = 15;
const OREGANO: usize = 50;
pub(crate) const PEPPERONI_COUNT: usize = 18;
pub(crate) const BASIL_COUNT: usize = 8;

pub fn generate(out: &mut DrawList, c: Point, r: f64, rng: &mut dyn RngCore) {
    out.fill_color(circle(c, r), CRUST);

    // Sauce with a scalloped edge just inside the crust.
    let sauce = polygon((0..=SAUCE_POINTS).map(|i| {
        let a = (i as f64 / SAUCE_POINTS as f64) * TAU;
        let wobble = (a * 10.0).sin() * 5.0;
        c + Vec2::from_angle(a) * (r - 15.0 + wobble).max(0.0)
    }));
    out.fill_color(sauce, SAUCE);

    // Melted cheese never spills past the sauce.
    let sauce_inner = (r - 20.0).max(0.0);
    for _ in 0..CHEESE_BLOBS {
        let dist = unit(rng) * r * 0.7;
        let a = unit(rng) * TAU;
        let size = (30.0 + unit(rng) * 40.0).min(sauce_inner - dist);
        if size > 0.0 {
            out.fill_color(circle(c + Vec2::from_angle(a) * dist, size), CHEESE);
        }
    }
    out.fill_color(circle(c, r * 0.5), CHEESE);

    let speckle = Rgba8::rgba_f(211, 84, 0, 0.3);
    let field = r - 20.0;
    for _ in 0..OREGANO {
        let p = c + Vec2::new(centered(rng), centered(rng)) * (2.0 * field);
        let radius = 2.0 + unit(rng) * 4.0;
        if p.distance(c) < field {
            out.fill_color(circle(p, radius), speckle);
        }
    }

    let p_size = r * 0.12;
    let reach = (r - 40.0).min(r - p_size - 6.0).max(0.0);
    let shadow = Rgba8::rgba_f(0, 0, 0, 0.2);
    let shine = Rgba8::rgba_f(255, 255, 255, 0.1);
    for _ in 0..PEPPERONI_COUNT {
        // uniform over the disk area
        let dist = unit(rng).sqrt() * reach;
        let a = unit(rng) * TAU;
        let p = c + Vec2::from_angle(a) * dist;
        out.fill_color(circle(p + Vec2::new(2.0, 2.0), p_size), shadow);
        out.fill_color(circle(p, p_size), PEPPERONI);
        out.fill_color(
            circle(p - Vec2::new(p_size * 0.3, p_size * 0.3), p_size * 0.5),
            shine,
        );
    }

    let leaf_reach = (r - 50.0).max(0.0);
    for _ in 0..BASIL_COUNT {
        let dist = unit(rng) * leaf_reach;
        let a = unit(rng) * TAU;
        let at = c + Vec2::from_angle(a) * dist;
        let place = Affine::translate(at.to_vec2()) * Affine::rotate(unit(rng) * PI);
        out.push(
            DrawOp::fill(ellipse(Point::ZERO, 15.0, 8.0, 0.0), Paint::Solid(BASIL))
                .with_transform(place),
        );
        out.push(
            DrawOp::stroke(
                line(Point::new(-15.0, 0.0), Point::new(15.0, 0.0)),
                BASIL_VEIN,
                StrokeStyle::new(1.0),
            )
            .with_transform(place),
        );
    }
}
