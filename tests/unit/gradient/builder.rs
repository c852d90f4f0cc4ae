use super::*;

const A: Rgb8 = Rgb8::new(253, 241, 0);
const B: Rgb8 = Rgb8::new(255, 255, 255);
const C: Rgb8 = Rgb8::new(127, 53, 0);

fn abc() -> GradientStops {
    GradientStops::new(&[(0.0, A), (0.4, B), (1.0, C)]).unwrap()
}

fn as_rgb(t: [f64; 3]) -> Rgb8 {
    Rgb8::new(t[0] as u8, t[1] as u8, t[2] as u8)
}

#[test]
fn stop_table_validation() {
    assert!(GradientStops::new(&[]).is_err());
    assert!(GradientStops::new(&[(0.0, A)]).is_err());
    assert!(GradientStops::new(&[(0.1, A), (1.0, B)]).is_err());
    assert!(GradientStops::new(&[(0.0, A), (0.9, B)]).is_err());
    assert!(GradientStops::new(&[(0.0, A), (0.5, B), (0.5, C), (1.0, C)]).is_err());
    assert!(GradientStops::new(&[(0.0, A), (0.6, B), (0.5, C), (1.0, C)]).is_err());
    assert!(GradientStops::new(&[(0.0, A), (f64::NAN, B), (1.0, C)]).is_err());
    assert_eq!(abc().stops().len(), 3);
}

#[test]
fn ramp_endpoints_follow_axis() {
    let v = ramp_2d(A, C, 3, 10, Axis::Vertical);
    assert_eq!((v.width(), v.height()), (3, 10));
    assert_eq!(as_rgb(v.get(2, 0).unwrap()), A);
    assert_eq!(as_rgb(v.get(0, 9).unwrap()), C);
    assert_eq!(v.get(0, 4), v.get(2, 4));

    let h = ramp_2d(A, C, 10, 3, Axis::Horizontal);
    assert_eq!(as_rgb(h.get(0, 2).unwrap()), A);
    assert_eq!(as_rgb(h.get(9, 0).unwrap()), C);
    assert_eq!(h.get(4, 0), h.get(4, 2));
}

#[test]
fn full_size_gradient_hits_stop_colors_exactly() {
    let g = linear_gradient(&abc(), 4, 100, 1.0, 0.5).unwrap();
    assert_eq!(g.height(), 100);
    assert_eq!(g.get(0, 0).unwrap(), A.to_f64());
    assert_eq!(g.get(3, 99).unwrap(), C.to_f64());
    // First segment ends on the middle stop.
    assert_eq!(g.get(0, 39).unwrap(), B.to_f64());
}

#[test]
fn margins_replicate_boundary_colors() {
    let g = linear_gradient(&abc(), 2, 100, 0.5, 0.5).unwrap();
    assert_eq!(g.height(), 100);
    for y in 0..25 {
        assert_eq!(g.get(1, y).unwrap(), A.to_f64());
    }
    for y in 75..100 {
        assert_eq!(g.get(1, y).unwrap(), C.to_f64());
    }
}

#[test]
fn shifted_center_moves_active_region() {
    let g = linear_gradient(&abc(), 1, 100, 0.5, 0.6).unwrap();
    // margin_up = 35, margin_down = 15
    assert_eq!(g.get(0, 34).unwrap(), A.to_f64());
    assert_ne!(g.get(0, 36).unwrap(), A.to_f64());
    assert_eq!(g.get(0, 85).unwrap(), C.to_f64());
}

#[test]
fn zero_height_slices_are_skipped() {
    let stops = GradientStops::new(&[(0.0, A), (0.001, B), (1.0, C)]).unwrap();
    let g = linear_gradient(&stops, 1, 100, 1.0, 0.5).unwrap();
    assert_eq!(g.height(), 100);
    assert_eq!(g.get(0, 0).unwrap(), B.to_f64());
}

#[test]
fn negative_margin_is_rejected() {
    assert!(linear_gradient(&abc(), 1, 100, 1.0, 0.3).is_err());
}

#[test]
fn quantize_truncates_and_pads_black() {
    let stops = GradientStops::new(&[(0.0, A), (1.0, C)]).unwrap();
    let g = linear_gradient(&stops, 2, 10, 0.5, 0.5).unwrap();
    let img = g.to_rgba_image(2, 12);
    assert_eq!(img.get_pixel(0, 0).0, [253, 241, 0, 255]);
    assert_eq!(img.get_pixel(1, 11).0, [0, 0, 0, 255]);

    let field = ramp_2d(Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255), 1, 3, Axis::Vertical);
    let img = field.to_rgba_image(1, 3);
    assert_eq!(img.get_pixel(0, 1).0, [127, 127, 127, 255]);
}
