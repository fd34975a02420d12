use super::*;
use crate::crumbs::Crumb;
use crate::foundation::core::Point;
use crate::foundation::rng::demo_rng;
use crate::style::Style;
use crate::texture::cache::TextureCache;

const BG: Rgba8 = Rgba8::rgb(0x1a, 0x1a, 0x2e);

fn state(style: Style, n: u32, cut: bool) -> RenderState {
    RenderState {
        style,
        slices: SliceCount::new(n).unwrap(),
        cut,
        animating: false,
    }
}

fn texture(renderer: &mut SliceRenderer, style: Style, viewport: &Viewport) -> Texture {
    let mut cache = TextureCache::new();
    let mut rng = demo_rng(Some(17));
    cache
        .ensure(style, viewport, renderer.rasterizer_mut(), &mut rng)
        .unwrap()
        .clone()
}

fn close(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tol)
}

fn tex_px(t: &Texture, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * t.width() + x) * 4) as usize;
    let p = &t.pixels()[i..i + 4];
    [p[0], p[1], p[2], p[3]]
}

#[test]
fn frame_matches_the_viewport_and_clears_to_the_background() {
    let vp = Viewport::new(160.0, 1.0).unwrap();
    let mut r = SliceRenderer::new(BG);
    let t = texture(&mut r, Style::Pizza, &vp);
    let frame = r
        .render(&state(Style::Pizza, 8, false), &CrumbStore::new(), &t, &vp, None)
        .unwrap();
    assert_eq!((frame.width, frame.height), (160, 160));
    assert!(frame.premultiplied);
    let corner = frame.pixel(0, 0).unwrap();
    assert!(close(corner, BG.to_premul(), 4), "{corner:?}");
}

/// Whether `got` lies within the channel range of the 3x3 texels around (`x`, `y`).
fn within_neighborhood(t: &Texture, x: u32, y: u32, got: [u8; 4], tol: u8) -> bool {
    let mut lo = [255u8; 4];
    let mut hi = [0u8; 4];
    for ny in y - 1..=y + 1 {
        for nx in x - 1..=x + 1 {
            let p = tex_px(t, nx, ny);
            for c in 0..4 {
                lo[c] = lo[c].min(p[c]);
                hi[c] = hi[c].max(p[c]);
            }
        }
    }
    (0..4).all(|c| got[c] >= lo[c].saturating_sub(tol) && got[c] <= hi[c].saturating_add(tol))
}

#[test]
fn cut_wedges_show_the_texture_moved_outward() {
    let vp = Viewport::new(120.0, 1.0).unwrap();
    let mut r = SliceRenderer::new(BG);
    let t = texture(&mut r, Style::Galette, &vp);
    let frame = r
        .render(&state(Style::Galette, 2, true), &CrumbStore::new(), &t, &vp, None)
        .unwrap();
    // two slices: the right half moves 25px right, the left half 25px left
    for (tx, fx) in [(72u32, 97u32), (48, 23)] {
        for y in [52u32, 60, 68] {
            assert_eq!(tex_px(&t, tx, y)[3], 255);
            let got = frame.pixel(fx, y).unwrap();
            assert!(within_neighborhood(&t, tx, y, got, 4), "({fx},{y}): {got:?}");
        }
    }
    // the seam between the halves is now a 50px gap showing the halo or background
    let gap = frame.pixel(60, 60).unwrap();
    assert_ne!(gap, tex_px(&t, 60, 60));
}

#[test]
fn crumbs_and_cutter_are_painted() {
    let vp = Viewport::new(160.0, 1.0).unwrap();
    let mut r = SliceRenderer::new(BG);
    let t = texture(&mut r, Style::Pizza, &vp);
    let mut crumbs = CrumbStore::new();
    let red = Rgba8::rgb(255, 0, 0);
    crumbs.push(Crumb {
        position: Point::new(10.5, 150.5),
        size: 3.0,
        color: red,
        rotation: 0.0,
    });
    let icon = CutterIcon::pizza_wheel(48.0, 1.0).unwrap();
    let pose = CutterPose {
        position: Point::new(24.0, 24.0),
        rotation: 0.3,
    };
    let frame = r
        .render(
            &state(Style::Pizza, 3, false),
            &crumbs,
            &t,
            &vp,
            Some((&icon, pose)),
        )
        .unwrap();
    let crumb = frame.pixel(10, 150).unwrap();
    assert!(crumb[0] > 240 && crumb[1] < 20, "{crumb:?}");
    let hub = frame.pixel(24, 24).unwrap();
    assert!(close(hub, Rgba8::rgb(0x45, 0x5a, 0x64).to_premul(), 4), "{hub:?}");
}

#[test]
fn stale_textures_are_refused() {
    let vp = Viewport::new(80.0, 1.0).unwrap();
    let mut r = SliceRenderer::new(BG);
    let t = texture(&mut r, Style::Pizza, &vp);
    let err = r
        .render(&state(Style::Tart, 4, false), &CrumbStore::new(), &t, &vp, None)
        .unwrap_err();
    assert!(matches!(err, WedgeError::Render(_)));

    let bigger = Viewport::new(80.0, 2.0).unwrap();
    assert!(
        r.render(&state(Style::Pizza, 4, false), &CrumbStore::new(), &t, &bigger, None)
            .is_err()
    );

    // same 80px frame, but the dish was laid out for an 80px canvas, not a 40px one
    let retina = Viewport::new(40.0, 2.0).unwrap();
    assert_eq!(retina.physical_size(), t.width());
    let err = r
        .render(&state(Style::Pizza, 4, false), &CrumbStore::new(), &t, &retina, None)
        .unwrap_err();
    assert!(matches!(err, WedgeError::Render(_)));
}

#[test]
fn background_is_the_configured_color() {
    let r = SliceRenderer::new(BG);
    assert_eq!(r.background(), BG);
}

#[test]
fn blurred_layers_are_baked_once_per_key() {
    let vp = Viewport::new(80.0, 1.0).unwrap();
    let mut r = SliceRenderer::new(BG);
    let t = texture(&mut r, Style::Pizza, &vp);
    let s = state(Style::Pizza, 4, false);
    r.render(&s, &CrumbStore::new(), &t, &vp, None).unwrap();
    let halo_key = r.halo.as_ref().map(|(k, _)| *k);
    let glow_key = r.glow.as_ref().map(|(k, _)| *k);
    assert_eq!(halo_key.map(|k| k.what), Some(Style::Pizza.spec().shadow));
    assert_eq!(glow_key.map(|k| k.what), Some(SliceCount::new(4).unwrap()));

    let s6 = state(Style::Pizza, 6, false);
    r.render(&s6, &CrumbStore::new(), &t, &vp, None).unwrap();
    assert_eq!(r.halo.as_ref().map(|(k, _)| *k), halo_key);
    assert_eq!(
        r.glow.as_ref().map(|(k, _)| k.what),
        Some(SliceCount::new(6).unwrap())
    );
}
