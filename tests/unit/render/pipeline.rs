use std::path::Path;

use super::*;

fn fonts() -> FontSet {
    FontSet::from_paths(
        Path::new("tests/data/fonts/DejaVuSans-Bold.ttf"),
        Path::new("tests/data/fonts/DejaVuSerif-Bold.ttf"),
    )
    .unwrap()
}

fn small_renderer() -> BannerRenderer {
    let settings = BannerSettings {
        default_width: 300,
        height: 160,
        ..BannerSettings::default()
    };
    BannerRenderer::new(fonts(), settings).unwrap()
}

#[test]
fn marker_selects_rainbow_recipe() {
    assert_eq!(
        BannerLine::parse_marked("$gold").unwrap(),
        BannerLine::rainbow("gold")
    );
    assert_eq!(
        BannerLine::parse_marked("gold").unwrap(),
        BannerLine::plain("gold")
    );
    assert_eq!(
        BannerLine::parse_marked("$$x").unwrap(),
        BannerLine::rainbow("$x")
    );
}

#[test]
fn marker_rejects_empty_lines() {
    for raw in ["", "$"] {
        let err = BannerLine::parse_marked(raw).unwrap_err();
        assert!(matches!(err, ChoyenError::Validation(_)));
    }
}

#[test]
fn renderer_rejects_invalid_settings() {
    let settings = BannerSettings {
        height: 0,
        ..BannerSettings::default()
    };
    assert!(BannerRenderer::new(fonts(), settings).is_err());
}

#[test]
fn small_banner_has_padding_and_content() {
    let banner = small_renderer()
        .render(&BannerRequest::new("AB", "cd"))
        .unwrap();
    assert!(banner.width() > 100);
    assert!(banner.height() > 30);

    let img = &banner.image;
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(img.width() - 1, img.height() - 1).0, [255, 255, 255]);
    assert!(img.pixels().any(|p| p.0 != [255, 255, 255]));
}

#[test]
fn rainbow_variants_keep_dimensions() {
    let renderer = small_renderer();
    let plain = renderer.render(&BannerRequest::new("Hi", "there")).unwrap();
    let rainbow = renderer
        .render(&BannerRequest {
            upper: BannerLine::rainbow("Hi"),
            lower: BannerLine::rainbow("there"),
            background: None,
        })
        .unwrap();
    assert_eq!(plain.image.dimensions(), rainbow.image.dimensions());
    assert_ne!(plain.image, rainbow.image);
}

#[test]
fn background_override_changes_padding() {
    let renderer = small_renderer();
    let mut request = BannerRequest::new("AB", "cd");
    request.background = Some(Rgb8::BLACK);
    let banner = renderer.render(&request).unwrap();
    assert_eq!(banner.image.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn rendering_is_deterministic() {
    let renderer = small_renderer();
    let request = BannerRequest::new("5000", "yen");
    let a = renderer.render(&request).unwrap();
    let b = renderer.render(&request).unwrap();
    assert_eq!(a.image, b.image);
}

#[test]
fn blank_lines_render_nothing() {
    let err = small_renderer()
        .render(&BannerRequest::new(" ", " "))
        .unwrap_err();
    assert!(matches!(err, ChoyenError::EmptyRender));
}

#[test]
fn gen_image_uses_classic_settings() {
    let banner = gen_image(&fonts(), "AB", "cd").unwrap();
    // The lower line starts at least 200px in and sits below the upper one.
    assert!(banner.width() > 300);
    assert!(banner.height() > 250);
}
