use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 128), 128);
}

#[test]
fn over_handles_transparent_and_opaque_sources() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
    assert_eq!(over(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);

    let half_white = [128, 128, 128, 128];
    let out = over([0, 0, 0, 255], half_white);
    assert_eq!(out[3], 255);
    assert!((i32::from(out[0]) - 128).abs() <= 1);
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = vec![64u8, 0, 32, 128, 5, 6, 7, 0, 9, 9, 9, 255];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 0, 64, 128]);
    assert_eq!(&px[4..8], &[5, 6, 7, 0]);
    assert_eq!(&px[8..12], &[9, 9, 9, 255]);
}
