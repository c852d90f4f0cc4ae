use super::*;

#[test]
fn parses_hex_and_keywords() {
    assert_eq!("#ff8000".parse::<Rgb8>().unwrap(), Rgb8::new(255, 128, 0));
    assert_eq!("#fff".parse::<Rgb8>().unwrap(), Rgb8::WHITE);
    assert_eq!("White".parse::<Rgb8>().unwrap(), Rgb8::WHITE);
    assert_eq!("violet".parse::<Rgb8>().unwrap(), Rgb8::new(238, 130, 238));
    assert_eq!("green".parse::<Rgb8>().unwrap(), Rgb8::new(0, 128, 0));
}

#[test]
fn rejects_malformed_colors() {
    assert!("#ff80".parse::<Rgb8>().is_err());
    assert!("#gg0000".parse::<Rgb8>().is_err());
    assert!("chartreuse-ish".parse::<Rgb8>().is_err());
}

#[test]
fn serde_uses_string_form() {
    let c: Rgb8 = serde_json::from_str("\"#102030\"").unwrap();
    assert_eq!(c, Rgb8::new(16, 32, 48));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#102030\"");
}

#[test]
fn plane_bounds_are_exclusive() {
    #[rustfmt::skip]
    let plane = [
        0, 0, 0, 0,
        0, 7, 0, 0,
        0, 0, 0, 9,
    ];
    let b = ContentBounds::of_plane(plane.into_iter(), 4).unwrap();
    assert_eq!(
        b,
        ContentBounds {
            left: 1,
            top: 1,
            right: 4,
            bottom: 3
        }
    );
    assert_eq!((b.width(), b.height()), (3, 2));
    assert!(ContentBounds::of_plane([0u8; 8].into_iter(), 4).is_none());
    assert!(ContentBounds::of_plane(std::iter::empty(), 0).is_none());
}
