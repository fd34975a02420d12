use super::*;

fn session(style: Style, slices: u32) -> DemoSession {
    DemoSession::new(&DemoConfig {
        size: 120.0,
        style,
        slices: SliceCount::new(slices).unwrap(),
        seed: Some(42),
        ..DemoConfig::default()
    })
    .unwrap()
}

fn count(events: &[SessionEvent], pred: impl Fn(&SessionEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(e)).count()
}

#[test]
fn starts_whole_and_idle() {
    let s = session(Style::Galette, 6);
    assert_eq!(
        *s.state(),
        RenderState {
            style: Style::Galette,
            slices: SliceCount::new(6).unwrap(),
            cut: false,
            animating: false,
        }
    );
    assert_eq!(
        s.controls(),
        ControlsView {
            slices: 6,
            cuts: 3,
            button: CutButton::Cut,
            busy: false,
        }
    );
    assert!(s.cutter_pose().is_none());
    assert_eq!(CutButton::Cut.label(), "Cut now");
    assert_eq!(CutButton::Reset.label(), "Reset");
}

#[test]
fn a_full_cut_samples_every_30ms_and_then_settles() {
    let mut s = session(Style::Pizza, 2);
    let (outcome, ev) = s.press_cut();
    assert_eq!(outcome, CutOutcome::Started);
    assert_eq!(ev, vec![SessionEvent::Redraw]);
    assert!(s.state().animating);
    assert!(s.controls().busy);

    let ev = s.advance(450).unwrap();
    assert_eq!(count(&ev, |e| matches!(e, SessionEvent::MotionStarted { .. })), 1);
    // ticks at 30..=390ms into the 400ms move
    let bursts = count(&ev, |e| matches!(e, SessionEvent::CrumbsSpawned { .. }));
    assert_eq!(bursts, 13);
    assert_eq!(count(&ev, |e| *e == SessionEvent::CutCompleted), 1);
    assert_eq!(ev.last(), Some(&SessionEvent::Redraw));

    assert!(s.state().cut);
    assert!(!s.state().animating);
    assert_eq!(s.controls().button, CutButton::Reset);
    assert_eq!(s.active_intervals(), 0);
    assert!(!s.crumbs().is_empty());
    // one redraw for the press, one per burst, one at the end
    assert_eq!(s.redraw_requests(), 1 + 13 + 1);
}

#[test]
fn crumbs_follow_the_cutter_in_pixels() {
    let mut s = session(Style::Tart, 3);
    s.press_cut();
    let ev = s.advance(50 + 300).unwrap();
    let first = ev
        .iter()
        .find_map(|e| match e {
            SessionEvent::CrumbsSpawned { at, .. } => Some(*at),
            _ => None,
        })
        .unwrap();
    // first radius heads straight up from the center; 30ms into a 300ms move is 10% of the way
    assert!((first.x - 60.0).abs() < 1e-9);
    assert!((first.y - (60.0 - 0.1 * 0.45 * 120.0)).abs() < 1e-9);
}

#[test]
fn pressing_while_animating_is_ignored() {
    let mut s = session(Style::Pizza, 8);
    s.press_cut();
    s.advance(120).unwrap();
    let before = (*s.state(), s.crumbs().len(), s.redraw_requests());
    let (outcome, ev) = s.press_cut();
    assert_eq!(outcome, CutOutcome::Ignored);
    assert!(ev.is_empty());
    assert_eq!((*s.state(), s.crumbs().len(), s.redraw_requests()), before);
    assert_eq!(s.active_intervals(), 1);
}

#[test]
fn pressing_when_cut_resets_instantly() {
    let mut s = session(Style::Pizza, 4);
    s.press_cut();
    s.advance(5_000).unwrap();
    assert!(s.state().cut);
    assert!(!s.crumbs().is_empty());

    let now = s.now();
    let (outcome, _) = s.press_cut();
    assert_eq!(outcome, CutOutcome::Reset);
    assert!(!s.state().cut);
    assert!(s.crumbs().is_empty());
    assert_eq!(s.now(), now);
    assert_eq!(s.active_intervals(), 0);
}

#[test]
fn style_change_mid_cut_cancels_everything() {
    let mut s = session(Style::Pizza, 4);
    s.draw().unwrap();
    assert_eq!(s.texture_generations(), 1);
    s.press_cut();
    s.advance(200).unwrap();
    assert!(!s.crumbs().is_empty());
    assert_eq!(s.active_intervals(), 1);

    s.set_style(Style::Galette);
    assert!(s.crumbs().is_empty());
    assert!(!s.state().animating);
    assert!(!s.state().cut);
    assert_eq!(s.active_intervals(), 0);
    assert!(s.advance(2_000).unwrap().is_empty());

    s.draw().unwrap();
    assert_eq!(s.texture_generations(), 2);
}

#[test]
fn slider_validates_and_resets_the_cut() {
    let mut s = session(Style::Pizza, 4);
    assert!(s.set_slices(0).is_err());
    assert!(s.set_slices(25).is_err());
    assert_eq!(s.state().slices.get(), 4);

    s.press_cut();
    s.advance(100).unwrap();
    s.set_slices(7).unwrap();
    assert_eq!(s.controls().cuts, 7);
    assert!(!s.state().animating);
    assert!(s.crumbs().is_empty());
    assert_eq!(s.active_intervals(), 0);

    // the next press plans motions for the new count
    assert_eq!(s.press_cut().0, CutOutcome::Started);
    assert_eq!(s.animator().motions().len(), 7);
}

#[test]
fn redraw_reuses_the_texture_until_style_or_size_changes() {
    let mut s = session(Style::Tart, 6);
    let a = s.draw().unwrap();
    let b = s.draw().unwrap();
    assert_eq!(s.texture_generations(), 1);
    assert_eq!(a, b);

    s.set_slices(3).unwrap();
    s.draw().unwrap();
    assert_eq!(s.texture_generations(), 1);

    s.resize(Viewport::new(100.0, 1.5).unwrap()).unwrap();
    let c = s.draw().unwrap();
    assert_eq!(s.texture_generations(), 2);
    assert_eq!((c.width, c.height), (150, 150));

    assert!(s.resize(Viewport { size: 0.0, dpr: 1.0 }).is_err());
    assert_eq!(s.viewport().size, 100.0);
}

#[test]
fn cutter_is_visible_only_while_animating() {
    let mut s = session(Style::Pizza, 2);
    s.press_cut();
    let pose = s.cutter_pose().unwrap();
    // parked at the top of the vertical diameter, heading down
    assert!((pose.position.x - 60.0).abs() < 1e-9);
    assert!((pose.position.y - 0.05 * 120.0).abs() < 1e-9);
    assert!((pose.rotation - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    s.advance(1_000).unwrap();
    assert!(s.cutter_pose().is_none());
}

#[test]
fn cutter_svg_file_is_loaded_once_and_rebuilt_per_dpr() {
    let dir = std::path::Path::new("target/session_tests");
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join("square_cutter.svg");
    std::fs::write(
        &path,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/></svg>"##,
    )
    .unwrap();

    let config = DemoConfig {
        size: 120.0,
        cutter_svg: Some(path.clone()),
        seed: Some(1),
        ..DemoConfig::default()
    };
    let mut s = DemoSession::new(&config).unwrap();
    assert_eq!(s.cutter.pixel_size(), 48);
    // near the corner: opaque for the square, clear for the round default wheel
    let corner_alpha = |s: &DemoSession| {
        let i = (2 * s.cutter.pixel_size() as usize + 2) * 4;
        s.cutter.pixels()[i + 3]
    };
    assert_eq!(corner_alpha(&s), 255);

    s.resize(Viewport::new(120.0, 2.0).unwrap()).unwrap();
    assert_eq!(s.cutter.pixel_size(), 96);
    assert_eq!(corner_alpha(&s), 255);

    let missing = DemoConfig {
        cutter_svg: Some(dir.join("no_such_cutter.svg")),
        ..config
    };
    let err = DemoSession::new(&missing).unwrap_err();
    assert!(err.to_string().contains("no_such_cutter.svg"), "{err}");
}
