use std::collections::BTreeMap;

use crate::{
    compose::composite::RgbaCanvas,
    foundation::{core::Rgb8, error::ChoyenResult},
    gradient::builder::{GradientStops, linear_gradient},
};

/// Gradient scale: the active region covers this share of the block height.
const GRADIENT_SIZE: f64 = 0.50;
/// Vertical center of the active region.
const GRADIENT_CENTER: f64 = 0.47;

const fn rgb(r: u8, g: u8, b: u8) -> Rgb8 {
    Rgb8::new(r, g, b)
}

const LOWER_SILVER: &[(f64, Rgb8)] = &[
    (0.0, rgb(0, 15, 36)),
    (0.10, rgb(255, 255, 255)),
    (0.18, rgb(55, 58, 59)),
    (0.25, rgb(55, 58, 59)),
    (0.5, rgb(200, 200, 200)),
    (0.75, rgb(55, 58, 59)),
    (0.85, rgb(25, 20, 31)),
    (0.91, rgb(240, 240, 240)),
    (0.95, rgb(166, 175, 194)),
    (1.0, rgb(50, 50, 50)),
];

const GOLD: &[(f64, Rgb8)] = &[
    (0.0, rgb(253, 241, 0)),
    (0.25, rgb(245, 253, 187)),
    (0.4, rgb(255, 255, 255)),
    (0.75, rgb(253, 219, 9)),
    (0.9, rgb(127, 53, 0)),
    (1.0, rgb(243, 196, 11)),
];

const STROKE_RED: &[(f64, Rgb8)] = &[
    (0.0, rgb(255, 100, 0)),
    (0.5, rgb(123, 0, 0)),
    (0.51, rgb(240, 0, 0)),
    (1.0, rgb(5, 0, 0)),
];

const RED: &[(f64, Rgb8)] = &[
    (0.0, rgb(230, 0, 0)),
    (0.5, rgb(123, 0, 0)),
    (0.51, rgb(240, 0, 0)),
    (1.0, rgb(5, 0, 0)),
];

const SILVER2: &[(f64, Rgb8)] = &[
    (0.0, rgb(245, 246, 248)),
    (0.15, rgb(255, 255, 255)),
    (0.35, rgb(195, 213, 220)),
    (0.5, rgb(160, 190, 201)),
    (0.51, rgb(160, 190, 201)),
    (0.52, rgb(196, 215, 222)),
    (1.0, rgb(255, 255, 255)),
];

const STROKE_NAVY: &[(f64, Rgb8)] = &[
    (0.0, rgb(16, 25, 58)),
    (0.03, rgb(255, 255, 255)),
    (0.08, rgb(16, 25, 58)),
    (0.2, rgb(16, 25, 58)),
    (1.0, rgb(16, 25, 58)),
];

const RAINBOW: &[(f64, Rgb8)] = &[
    (0.0, rgb(255, 0, 0)),
    (0.25, rgb(255, 255, 0)),
    (0.50, rgb(0, 128, 0)),
    (0.75, rgb(0, 0, 255)),
    (1.0, rgb(238, 130, 238)),
];

/// Identifier of one palette image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaletteId {
    /// Chrome ramp used for the lower line body and the upper line bevel.
    LowerSilver,
    /// Gold ramp used for the upper line bevel.
    Gold,
    /// Red ramp used for the upper line face.
    Red,
    /// Orange-to-dark red ramp used for the upper line inner stroke.
    StrokeRed,
    /// Pale blue-silver ramp used for the lower line face.
    Silver2,
    /// Navy ramp with a thin highlight, used for the lower line inner stroke.
    StrokeNavy,
    /// Red-yellow-green-blue-violet ramp used by the rainbow recipes.
    Rainbow,
    /// Flat black.
    BaseStrokeBlack,
    /// Flat navy-black.
    StrokeBlack,
    /// Flat light gray.
    StrokeWhite,
    /// Flat white.
    BaseStrokeWhite,
}

impl PaletteId {
    /// Every palette identifier, in declaration order.
    pub const ALL: [PaletteId; 11] = [
        PaletteId::LowerSilver,
        PaletteId::Gold,
        PaletteId::Red,
        PaletteId::StrokeRed,
        PaletteId::Silver2,
        PaletteId::StrokeNavy,
        PaletteId::Rainbow,
        PaletteId::BaseStrokeBlack,
        PaletteId::StrokeBlack,
        PaletteId::StrokeWhite,
        PaletteId::BaseStrokeWhite,
    ];

    fn fill(self) -> Fill {
        match self {
            PaletteId::LowerSilver => Fill::Gradient {
                stops: LOWER_SILVER,
                size: GRADIENT_SIZE,
                center: GRADIENT_CENTER + 0.1,
            },
            PaletteId::Gold => Fill::Gradient {
                stops: GOLD,
                size: GRADIENT_SIZE,
                center: GRADIENT_CENTER,
            },
            PaletteId::StrokeRed => Fill::Gradient {
                stops: STROKE_RED,
                size: GRADIENT_SIZE,
                center: GRADIENT_CENTER,
            },
            PaletteId::Red => Fill::Gradient {
                stops: RED,
                size: GRADIENT_SIZE,
                center: GRADIENT_CENTER,
            },
            PaletteId::Silver2 => Fill::Gradient {
                stops: SILVER2,
                size: GRADIENT_SIZE,
                center: GRADIENT_CENTER,
            },
            PaletteId::StrokeNavy => Fill::Gradient {
                stops: STROKE_NAVY,
                size: GRADIENT_SIZE,
                center: GRADIENT_CENTER,
            },
            PaletteId::Rainbow => Fill::Gradient {
                stops: RAINBOW,
                size: GRADIENT_SIZE * 0.9,
                center: GRADIENT_CENTER + 0.03,
            },
            PaletteId::BaseStrokeBlack => Fill::Flat(Rgb8::new(0, 0, 0)),
            PaletteId::StrokeBlack => Fill::Flat(Rgb8::new(16, 25, 58)),
            PaletteId::StrokeWhite => Fill::Flat(Rgb8::new(221, 221, 221)),
            PaletteId::BaseStrokeWhite => Fill::Flat(Rgb8::new(255, 255, 255)),
        }
    }
}

enum Fill {
    Gradient {
        stops: &'static [(f64, Rgb8)],
        size: f64,
        center: f64,
    },
    Flat(Rgb8),
}

/// Every [`PaletteId`] rendered as an opaque image of one common size.
///
/// Built once per text block and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Palette {
    width: u32,
    height: u32,
    images: BTreeMap<PaletteId, RgbaCanvas>,
}

impl Palette {
    /// Render every palette entry at `width × height`.
    #[tracing::instrument(level = "debug")]
    pub fn generate(width: u32, height: u32) -> ChoyenResult<Self> {
        let mut images = BTreeMap::new();
        for id in PaletteId::ALL {
            let image = match id.fill() {
                Fill::Gradient {
                    stops,
                    size,
                    center,
                } => {
                    let stops = GradientStops::new(stops)?;
                    let field = linear_gradient(&stops, width, height, size, center)?;
                    RgbaCanvas::from_straight(&field.to_rgba_image(width, height))
                }
                Fill::Flat(c) => RgbaCanvas::filled(width, height, [c.r, c.g, c.b, 255]),
            };
            images.insert(id, image);
        }
        Ok(Self {
            width,
            height,
            images,
        })
    }

    /// Common image width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Common image height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Image for `id`.
    pub fn get(&self, id: PaletteId) -> &RgbaCanvas {
        // generate() inserts every variant of PaletteId::ALL.
        &self.images[&id]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/palette.rs"]
mod tests;
