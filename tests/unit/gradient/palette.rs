use super::*;

#[test]
fn every_entry_is_opaque_and_sized() {
    let palette = Palette::generate(40, 270).unwrap();
    assert_eq!((palette.width(), palette.height()), (40, 270));
    for id in PaletteId::ALL {
        let img = palette.get(id);
        assert_eq!((img.width(), img.height()), (40, 270), "{id:?}");
        assert!(
            img.data().chunks_exact(4).all(|px| px[3] == 255),
            "{id:?} must be fully opaque"
        );
    }
}

#[test]
fn flat_entries_use_literal_colors() {
    let palette = Palette::generate(4, 4).unwrap();
    assert_eq!(palette.get(PaletteId::BaseStrokeBlack).pixel(1, 1), [0, 0, 0, 255]);
    assert_eq!(palette.get(PaletteId::StrokeBlack).pixel(3, 0), [16, 25, 58, 255]);
    assert_eq!(palette.get(PaletteId::StrokeWhite).pixel(0, 3), [221, 221, 221, 255]);
    assert_eq!(
        palette.get(PaletteId::BaseStrokeWhite).pixel(2, 2),
        [255, 255, 255, 255]
    );
}

#[test]
fn gradient_entries_start_with_first_stop_color() {
    let palette = Palette::generate(8, 270).unwrap();
    assert_eq!(palette.get(PaletteId::Gold).pixel(0, 0), [253, 241, 0, 255]);
    assert_eq!(palette.get(PaletteId::Rainbow).pixel(5, 0), [255, 0, 0, 255]);
    assert_eq!(palette.get(PaletteId::LowerSilver).pixel(7, 0), [0, 15, 36, 255]);
    assert_eq!(palette.get(PaletteId::Gold).pixel(0, 268), [243, 196, 11, 255]);
}
