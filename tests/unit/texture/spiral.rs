use super::*;

#[test]
fn slots_walk_outward_and_stop_inside_the_limit() {
    let slots = spiral_layout(250.0, 22.0);
    assert!(slots.len() > 20);
    assert_eq!(slots[0], SpiralSlot { radius: 0.0, angle: 0.0 });
    for pair in slots.windows(2) {
        assert!(pair[1].radius > pair[0].radius);
        assert!(pair[1].angle - pair[0].angle >= MIN_STEP - 1e-12);
    }
    assert!(slots.iter().all(|s| s.radius < 250.0));
}

#[test]
fn neighbours_are_spaced_by_element_size_once_out_of_the_core() {
    let size = 22.0;
    let slots = spiral_layout(250.0, size);
    for pair in slots.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.radius < 3.0 * size {
            continue;
        }
        let step = b.angle - a.angle;
        let arc = step * a.radius;
        assert!((arc - size * SPACING).abs() < 1e-6, "arc {arc}");
    }
}

#[test]
fn degenerate_inputs_terminate() {
    assert!(spiral_layout(0.0, 22.0).is_empty());
    assert!(spiral_layout(-5.0, 22.0).is_empty());
    assert!(spiral_layout(100.0, 0.0).is_empty());
    assert!(spiral_layout(100.0, -1.0).is_empty());
    assert!(spiral_layout(f64::NAN, 10.0).is_empty());
    assert!(spiral_layout(f64::INFINITY, 10.0).is_empty());
    // tiny elements still make progress through the core nudge
    assert!(!spiral_layout(5.0, 0.01).is_empty());
}
