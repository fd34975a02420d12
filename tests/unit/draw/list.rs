use super::*;

#[test]
fn fill_bounds_follow_transform() {
    let op = DrawOp::fill(circle(Point::ZERO, 10.0), Paint::Solid(Rgba8::WHITE))
        .with_transform(Affine::translate((50.0, 20.0)));
    let b = op.bounds();
    assert!((b.x0 - 40.0).abs() < 1e-6);
    assert!((b.y1 - 30.0).abs() < 1e-6);
}

#[test]
fn stroke_bounds_include_half_width() {
    let op = DrawOp::stroke(
        line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
        Rgba8::WHITE,
        StrokeStyle::new(4.0),
    );
    let b = op.bounds();
    assert_eq!(b, Rect::new(-2.0, -2.0, 12.0, 2.0));

    let scaled = op.with_transform(Affine::scale(2.0));
    assert_eq!(scaled.bounds(), Rect::new(-4.0, -4.0, 24.0, 4.0));
}

#[test]
fn list_bounds_union_ops() {
    let mut list = DrawList::new();
    assert!(list.bounds().is_none());
    list.fill_color(rect(0.0, 0.0, 2.0, 2.0), Rgba8::WHITE);
    list.fill_color(rect(10.0, 5.0, 2.0, 2.0), Rgba8::WHITE);
    assert_eq!(list.bounds(), Some(Rect::new(0.0, 0.0, 12.0, 7.0)));
}

#[test]
fn dashed_line_alternates_dashes_and_gaps() {
    let p = dashed_line(Point::new(0.0, 0.0), Point::new(45.0, 0.0), 10.0, 10.0);
    let moves = p
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    // dashes at 0, 20, 40 (last one clipped to the end)
    assert_eq!(moves, 3);
    assert_eq!(p.elements().last(), Some(&kurbo::PathEl::LineTo(Point::new(45.0, 0.0))));

    assert!(dashed_line(Point::ZERO, Point::ZERO, 10.0, 10.0).is_empty());
}

#[test]
fn tinted_keeps_geometry_and_mode() {
    let mut list = DrawList::new();
    list.stroke(
        line(Point::ZERO, Point::new(5.0, 5.0)),
        Rgba8::rgb(1, 2, 3),
        StrokeStyle::new(2.0).round(),
    );
    let tinted = list.tinted(Rgba8::WHITE);
    assert_eq!(tinted.len(), 1);
    assert_eq!(tinted.ops[0].paint, Paint::Solid(Rgba8::WHITE));
    assert_eq!(tinted.ops[0].mode, list.ops[0].mode);
}
