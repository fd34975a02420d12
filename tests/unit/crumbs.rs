use super::*;
use crate::foundation::rng::demo_rng;
use crate::style::Style;

#[test]
fn bursts_respect_density_bounds() {
    let mut rng = demo_rng(Some(3));
    for style in Style::ALL {
        let spec = style.spec();
        let max = (3.0 * spec.crumb_density).floor() as usize + 1;
        let mut store = CrumbStore::new();
        for _ in 0..200 {
            let n = store.spawn_burst(Point::new(100.0, 100.0), spec, &mut rng);
            assert!((1..=max).contains(&n), "{style}: burst of {n}");
        }
    }
}

#[test]
fn crumbs_stay_near_the_sample_point_and_use_the_palette() {
    let mut rng = demo_rng(Some(11));
    let spec = Style::Galette.spec();
    let at = Point::new(40.0, 60.0);
    let mut store = CrumbStore::new();
    for _ in 0..50 {
        store.spawn_burst(at, spec, &mut rng);
    }
    for c in store.iter() {
        assert!((c.position.x - at.x).abs() <= CRUMB_SCATTER / 2.0);
        assert!((c.position.y - at.y).abs() <= CRUMB_SCATTER / 2.0);
        assert!(c.size >= 0.5 * spec.crumb_size && c.size <= 2.0 * spec.crumb_size);
        assert!(spec.crumb_colors.contains(&c.color));
        assert!((0.0..TAU).contains(&c.rotation));
    }
}

#[test]
fn clear_empties_the_store() {
    let mut rng = demo_rng(Some(5));
    let mut store = CrumbStore::new();
    for _ in 0..10 {
        store.spawn_burst(Point::ZERO, Style::Pizza.spec(), &mut rng);
    }
    assert!(store.len() >= 10);
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn draw_list_has_one_op_per_crumb_at_its_position() {
    let mut store = CrumbStore::new();
    store.push(Crumb {
        position: Point::new(10.0, 20.0),
        size: 2.0,
        color: Rgba8::WHITE,
        rotation: 0.0,
    });
    store.push(Crumb {
        position: Point::new(50.0, 5.0),
        size: 1.0,
        color: Rgba8::WHITE,
        rotation: 1.0,
    });

    for shape in [CrumbShape::Disk, CrumbShape::Shard] {
        let list = store.draw_list(shape);
        assert_eq!(list.len(), 2);
        let b = list.ops[0].bounds();
        assert!(b.contains(Point::new(10.0, 20.0)));
        assert!(b.width() <= 4.5);
    }
}
