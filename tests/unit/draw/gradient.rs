use super::*;

fn galette_body() -> RadialGradient {
    RadialGradient::concentric(Point::new(100.0, 100.0), 0.0, 80.0)
        .stop(0.0, Rgba8::rgb(0xf5, 0xcb, 0xa7))
        .stop(0.8, Rgba8::rgb(0xd3, 0x54, 0x00))
        .stop(1.0, Rgba8::rgb(0xa0, 0x40, 0x00))
}

#[test]
fn concentric_param_is_normalized_distance() {
    let g = galette_body();
    let t = g.param_at(Point::new(140.0, 100.0)).unwrap();
    assert!((t - 0.5).abs() < 1e-9);
    let t = g.param_at(Point::new(100.0, 100.0)).unwrap();
    assert!(t.abs() < 1e-9);
}

#[test]
fn colors_hit_stops_and_pad_outside() {
    let g = galette_body();
    assert_eq!(g.sample_premul(Point::new(100.0, 100.0)), [0xf5, 0xcb, 0xa7, 255]);
    assert_eq!(g.sample_premul(Point::new(164.0, 100.0)), [0xd3, 0x54, 0x00, 255]);
    assert_eq!(g.sample_premul(Point::new(300.0, 100.0)), [0xa0, 0x40, 0x00, 255]);
}

#[test]
fn stops_are_kept_sorted() {
    let g = RadialGradient::concentric(Point::ZERO, 0.0, 1.0)
        .stop(1.0, Rgba8::WHITE)
        .stop(0.0, Rgba8::TRANSPARENT)
        .stop(0.5, Rgba8::rgb(1, 2, 3));
    let offsets: Vec<f64> = g.stops.iter().map(|(o, _)| *o).collect();
    assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
}

#[test]
fn offset_focus_gradient_is_defined_inside_end_circle() {
    let c = Point::new(100.0, 100.0);
    let g = RadialGradient::new(Point::new(70.0, 70.0), 10.0, c, 100.0)
        .stop(0.0, Rgba8::rgba_f(255, 255, 255, 0.3))
        .stop(1.0, Rgba8::rgba_f(255, 255, 255, 0.0));
    for p in [c, Point::new(150.0, 120.0)] {
        let t = g.param_at(p).unwrap();
        assert!((0.0..=1.0).contains(&t), "t={t} at {p:?}");
    }
    // Inside the focus circle the parameter is negative and pads to the start color.
    assert!(g.param_at(Point::new(70.0, 70.0)).unwrap() < 0.0);
    assert_eq!(g.sample_premul(Point::new(70.0, 70.0))[3], 77);
}

#[test]
fn empty_gradient_is_transparent() {
    let g = RadialGradient::concentric(Point::ZERO, 0.0, 10.0);
    assert_eq!(g.sample_premul(Point::new(1.0, 1.0)), [0, 0, 0, 0]);
}
