use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn straight_roundtrip_keeps_opaque_pixels() {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([12, 34, 56, 255]));
    let canvas = RgbaCanvas::from_straight(&img);
    assert_eq!(canvas.pixel(1, 1), [12, 34, 56, 255]);
    assert_eq!(canvas.to_straight(), img);
}

#[test]
fn masked_by_scales_by_coverage() {
    let canvas = RgbaCanvas::filled(2, 1, [200, 100, 50, 255]);
    let cut = canvas.masked_by(&[0, 255]).unwrap();
    assert_eq!(cut.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(cut.pixel(1, 0), [200, 100, 50, 255]);

    let half = canvas.masked_by(&[128, 128]).unwrap();
    assert_eq!(half.pixel(0, 0)[3], 128);
    assert!(canvas.masked_by(&[0]).is_err());
}

#[test]
fn composite_at_clips_to_destination() {
    let mut dst = RgbaCanvas::new(4, 4);
    let src = RgbaCanvas::filled(3, 3, [9, 9, 9, 255]);
    dst.composite_at(&src, 2, -1);
    assert_eq!(dst.pixel(2, 0), [9, 9, 9, 255]);
    assert_eq!(dst.pixel(3, 1), [9, 9, 9, 255]);
    assert_eq!(dst.pixel(3, 2), [0, 0, 0, 0]);
    assert_eq!(dst.pixel(1, 0), [0, 0, 0, 0]);

    dst.composite_at(&src, 10, 10);
    dst.composite_at(&src, -3, 0);
    assert_eq!(dst.pixel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn crop_pads_outside_with_transparent() {
    let src = RgbaCanvas::filled(2, 2, [1, 2, 3, 255]);
    let out = src.crop(1, 1, 3, 3);
    assert_eq!((out.width(), out.height()), (3, 3));
    assert_eq!(out.pixel(0, 0), [1, 2, 3, 255]);
    assert_eq!(out.pixel(1, 0), [0, 0, 0, 0]);
}

#[test]
fn partial_coverage_keeps_straight_color() {
    let canvas = RgbaCanvas::filled(1, 1, [200, 100, 50, 255]);
    let mut acc = RgbaCanvas::new(1, 1);
    acc.composite_at(&canvas.masked_by(&[128]).unwrap(), 0, 0);
    let px = acc.to_straight().get_pixel(0, 0).0;
    assert_eq!(px[3], 128);
    for (got, want) in px[..3].iter().zip([200u8, 100, 50]) {
        assert!(got.abs_diff(want) <= 1, "{px:?}");
    }
}
