use super::*;
use crate::draw::list::{DrawMode, Paint};
use crate::foundation::core::Viewport;
use crate::foundation::rng::demo_rng;
use crate::texture::spiral::spiral_layout;

const CENTER: Point = Point::new(300.0, 300.0);
const RADIUS: f64 = 270.0;

fn within_dish(list: &DrawList, slack: f64) {
    for (i, op) in list.iter().enumerate() {
        let b = op.bounds();
        for corner in [
            Point::new(b.x0, b.y0),
            Point::new(b.x1, b.y0),
            Point::new(b.x0, b.y1),
            Point::new(b.x1, b.y1),
        ] {
            // bounding boxes of round shapes poke out at the corners, so check the box edges
            // against the dish square and the center of each op against the disk
            assert!((corner.x - CENTER.x).abs() <= RADIUS + slack, "op {i}: {b:?}");
            assert!((corner.y - CENTER.y).abs() <= RADIUS + slack, "op {i}: {b:?}");
        }
        assert!(b.center().distance(CENTER) <= RADIUS + slack, "op {i}: {b:?}");
    }
}

fn solid_count(list: &DrawList, color: crate::foundation::core::Rgba8) -> usize {
    list.iter()
        .filter(|op| matches!(op.paint, Paint::Solid(c) if c == color))
        .count()
}

#[test]
fn every_style_stays_within_the_dish() {
    for style in Style::ALL {
        for seed in 0..8 {
            let mut rng = demo_rng(Some(seed));
            let list = generate(style, CENTER, RADIUS, &mut rng);
            assert!(!list.is_empty());
            within_dish(&list, 1.0);
        }
    }
}

#[test]
fn every_style_starts_with_the_full_disk() {
    for style in Style::ALL {
        let mut rng = demo_rng(Some(1));
        let list = generate(style, CENTER, RADIUS, &mut rng);
        let b = list.ops[0].bounds();
        assert!((b.width() - 2.0 * RADIUS).abs() < 0.5, "{style}");
        assert!(b.center().distance(CENTER) < 1e-6, "{style}");
        assert_eq!(list.ops[0].mode, DrawMode::Fill);
    }
}

#[test]
fn pizza_has_its_toppings() {
    let mut rng = demo_rng(Some(42));
    let list = generate(Style::Pizza, CENTER, RADIUS, &mut rng);
    assert_eq!(solid_count(&list, pizza::PEPPERONI), pizza::PEPPERONI_COUNT);

    let strokes = list
        .iter()
        .filter(|op| matches!(op.mode, DrawMode::Stroke(_)))
        .count();
    assert_eq!(strokes, pizza::BASIL_COUNT);

    for op in list
        .iter()
        .filter(|op| matches!(op.paint, Paint::Solid(c) if c == pizza::PEPPERONI))
    {
        let b = op.bounds();
        assert!(b.center().distance(CENTER) <= RADIUS - 40.0 + 1e-6);
    }
}

#[test]
fn pizza_toppings_fit_small_dishes_too() {
    let center = Point::new(60.0, 60.0);
    let radius = 45.0;
    let mut rng = demo_rng(Some(9));
    let list = generate(Style::Pizza, center, radius, &mut rng);
    for op in list
        .iter()
        .filter(|op| matches!(op.paint, Paint::Solid(c) if c == pizza::PEPPERONI))
    {
        let b = op.bounds();
        assert!(b.center().distance(center) + b.width() / 2.0 <= radius + 0.5);
    }
}

#[test]
fn galette_scores_a_sun_pattern() {
    let mut rng = demo_rng(Some(3));
    let list = generate(Style::Galette, CENTER, RADIUS, &mut rng);
    let strokes: Vec<_> = list
        .iter()
        .filter_map(|op| match op.mode {
            DrawMode::Stroke(s) => Some(s),
            DrawMode::Fill => None,
        })
        .collect();
    assert_eq!(strokes.len(), galette::SCORE_LINES);
    assert!(strokes.iter().all(|s| s.width == 3.0 && s.round_caps));

    let gradients = list
        .iter()
        .filter(|op| matches!(op.paint, Paint::Radial(_)))
        .count();
    assert_eq!(gradients, 2);
}

#[test]
fn tart_places_one_berry_per_spiral_slot() {
    let mut rng = demo_rng(None);
    let list = generate(Style::Tart, CENTER, RADIUS, &mut rng);
    let berries = list
        .iter()
        .filter(|op| matches!(op.paint, Paint::Radial(_)))
        .count();
    assert_eq!(berries, spiral_layout(RADIUS - 20.0, tart::STRAWBERRY).len());
}

#[test]
fn huge_tarts_grow_their_berries_instead_of_their_count() {
    let r = Viewport::MAX_LOGICAL * 0.45;
    let c = Point::new(r + 30.0, r + 30.0);
    let list = generate(Style::Tart, c, r, &mut demo_rng(None));
    let berries: Vec<_> = list
        .iter()
        .filter(|op| matches!(op.paint, Paint::Radial(_)))
        .collect();
    let size = tart::berry_size(r);
    assert!(size > tart::STRAWBERRY);
    assert_eq!(berries.len(), spiral_layout(tart::berry_reach(r), size).len());
    assert!(berries.len() < 8_000, "{}", berries.len());
    for op in berries {
        let b = op.bounds();
        assert!(b.width() > tart::STRAWBERRY);
        // berries are centrally symmetric, so the box center is the spiral slot
        assert!(b.center().distance(c) + size / 2.0 <= r - 9.0 + 1e-6);
    }

    let default = spiral_layout(RADIUS - 20.0, tart::STRAWBERRY).len();
    assert_eq!(tart::berry_size(RADIUS), tart::STRAWBERRY);
    assert!(default > 1_000 && default < 8_000, "{default}");
}

#[test]
fn same_seed_same_texture() {
    for style in Style::ALL {
        let a = generate(style, CENTER, RADIUS, &mut demo_rng(Some(5)));
        let b = generate(style, CENTER, RADIUS, &mut demo_rng(Some(5)));
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.path, y.path);
            assert_eq!(x.paint, y.paint);
        }
    }
}
