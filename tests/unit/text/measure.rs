use std::path::Path;

use super::*;
use crate::text::{font::FontResource, layout::TextLayoutEngine};

fn shaped(text: &str, size: f32) -> ShapedText {
    let font = FontResource::load(Path::new("tests/data/fonts/DejaVuSans-Bold.ttf")).unwrap();
    TextLayoutEngine::new().shape(text, &font, size).unwrap()
}

#[test]
fn measurement_is_idempotent_and_unclipped() {
    let text = shaped("Hello", 60.0);
    let a = measure_text_width(&text, 150, 100).unwrap();
    let b = measure_text_width(&text, 150, 100).unwrap();
    assert_eq!(a, b);
    assert!(a > 0);

    let wide = render_text_mask(&text, a + 400, 100, (0.0, 0.0), 0.0)
        .unwrap()
        .bounds()
        .unwrap();
    assert_eq!(wide.right, a, "probe result matches an unclipped render");
}

#[test]
fn small_start_width_grows_until_text_fits() {
    let text = shaped("Hello world", 60.0);
    let from_small = measure_text_width(&text, 100, 100).unwrap();
    let from_large = measure_text_width(&text, 1500, 100).unwrap();
    assert_eq!(from_small, from_large);
}

#[test]
fn longer_text_measures_wider() {
    let short = measure_text_width(&shaped("AB", 60.0), 500, 100).unwrap();
    let long = measure_text_width(&shaped("ABABAB", 60.0), 500, 100).unwrap();
    assert!(long > short);
}

#[test]
fn text_without_ink_measures_zero() {
    assert_eq!(measure_text_width(&shaped("", 60.0), 500, 100).unwrap(), 0);
    assert_eq!(measure_text_width(&shaped("   ", 60.0), 500, 100).unwrap(), 0);
}

#[test]
fn probe_width_is_capped() {
    let err = measure_text_width(&shaped("A", 60.0), MAX_PROBE_WIDTH + 1, 100).unwrap_err();
    assert!(matches!(err, ChoyenError::TextTooWide { .. }));
}
