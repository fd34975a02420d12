use super::*;

fn frame(data: Vec<u8>) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data,
        premultiplied: true,
    }
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = frame(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(f.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn straight_copy_undoes_premultiplication() {
    let f = frame(vec![64, 0, 0, 128, 255, 255, 255, 255]);
    let s = f.to_straight_rgba8();
    assert_eq!(&s[0..4], &[128, 0, 0, 128]);
    assert_eq!(&s[4..8], &[255, 255, 255, 255]);
}

#[test]
fn flattening_fills_transparent_pixels_with_the_background() {
    let f = frame(vec![0, 0, 0, 0, 255, 0, 0, 255]);
    let out = f.flattened_over(Rgba8::rgb(10, 20, 30));
    assert_eq!(&out[0..4], &[10, 20, 30, 255]);
    assert_eq!(&out[4..8], &[255, 0, 0, 255]);
}
