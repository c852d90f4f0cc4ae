use super::*;

#[test]
fn defaults_match_the_classic_banner() {
    let s = BannerSettings::default();
    assert_eq!(s.default_width, 1500);
    assert_eq!(s.height, 500);
    assert_eq!(s.background, Rgb8::WHITE);
    assert_eq!(s.tilt_degrees, 24.0);
    assert_eq!(s.font_scale, 0.7);
    assert_eq!(s.output_scale, 0.75);
    s.validate().unwrap();
}

#[test]
fn partial_json_fills_in_defaults() {
    let s: BannerSettings =
        serde_json::from_str(r##"{ "height": 300, "background": "#000000" }"##).unwrap();
    assert_eq!(s.height, 300);
    assert_eq!(s.background, Rgb8::BLACK);
    assert_eq!(s.default_width, 1500);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(serde_json::from_str::<BannerSettings>(r#"{ "hieght": 300 }"#).is_err());
}

#[test]
fn validate_rejects_degenerate_values() {
    let bad = [
        BannerSettings {
            height: 0,
            ..BannerSettings::default()
        },
        BannerSettings {
            default_width: 0,
            ..BannerSettings::default()
        },
        BannerSettings {
            default_width: MAX_PROBE_WIDTH + 1,
            ..BannerSettings::default()
        },
        BannerSettings {
            tilt_degrees: f64::NAN,
            ..BannerSettings::default()
        },
        BannerSettings {
            font_scale: -1.0,
            ..BannerSettings::default()
        },
        BannerSettings {
            output_scale: 0.0,
            ..BannerSettings::default()
        },
    ];
    for s in bad {
        assert!(matches!(s.validate(), Err(ChoyenError::Validation(_))), "{s:?}");
    }
}

#[test]
fn config_file_round_trips_through_disk() {
    let dir = std::path::PathBuf::from("target").join("settings_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("banner.json");
    std::fs::write(&path, r#"{ "tilt_degrees": 10.0, "background": "yellow" }"#).unwrap();

    let s = BannerSettings::from_json_path(&path).unwrap();
    assert_eq!(s.tilt_degrees, 10.0);
    assert_eq!(s.background, Rgb8::new(255, 255, 0));
}

#[test]
fn explicit_assets_dir_wins() {
    let dir = resolve_assets_dir(Some(PathBuf::from("somewhere"))).unwrap();
    assert_eq!(dir, PathBuf::from("somewhere"));
}

#[test]
fn default_width_up_to_probe_limit_is_accepted() {
    let s = BannerSettings {
        default_width: MAX_PROBE_WIDTH,
        ..BannerSettings::default()
    };
    s.validate().unwrap();

    let err = BannerSettings {
        default_width: 20_000,
        ..BannerSettings::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("default_width"));
}
