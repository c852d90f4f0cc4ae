use crate::gradient::palette::PaletteId::{self, *};

/// One draw pass of a text line: stroke the text at an offset and fill it with a palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerDescriptor {
    /// Pixel offset from the text origin.
    pub offset: (i32, i32),
    /// Stroke width at the reference banner height of 500px.
    pub stroke: u32,
    /// Palette image cut through the stroked text.
    pub palette: PaletteId,
}

const fn layer(x: i32, y: i32, stroke: u32, palette: PaletteId) -> LayerDescriptor {
    LayerDescriptor {
        offset: (x, y),
        stroke,
        palette,
    }
}

/// Which of the two banner lines a recipe draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    /// The gold/red sans line.
    Upper,
    /// The silver/navy serif line.
    Lower,
}

/// Ordered layer stack for one line; the first layer is the bottom-most.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recipe {
    /// Human-readable recipe name, used in logs.
    pub name: &'static str,
    /// Layers, back to front.
    pub layers: &'static [LayerDescriptor],
}

const UPPER_PLAIN: &[LayerDescriptor] = &[
    layer(4, 4, 22, BaseStrokeBlack),
    layer(4, 4, 20, LowerSilver),
    layer(0, 0, 16, BaseStrokeBlack),
    layer(0, 0, 10, Gold),
    layer(2, -3, 6, BaseStrokeBlack),
    layer(0, -3, 6, BaseStrokeWhite),
    layer(0, -3, 3, StrokeRed),
    layer(0, -3, 0, Red),
];

const UPPER_RAINBOW: &[LayerDescriptor] = &[
    layer(4, 4, 22, BaseStrokeBlack),
    layer(4, 4, 20, Rainbow),
    layer(0, 0, 16, BaseStrokeBlack),
    layer(0, 0, 10, Rainbow),
    layer(2, -3, 6, BaseStrokeBlack),
    layer(0, -3, 6, BaseStrokeWhite),
    layer(0, -3, 3, Rainbow),
    layer(0, -3, 0, Red),
    layer(0, 0, 16, BaseStrokeBlack),
    layer(0, 0, 10, Gold),
    layer(2, -3, 6, BaseStrokeBlack),
    layer(0, -3, 6, BaseStrokeWhite),
    layer(0, -3, 3, StrokeRed),
    layer(0, -3, 0, Red),
];

const LOWER_PLAIN: &[LayerDescriptor] = &[
    layer(5, 2, 22, BaseStrokeBlack),
    layer(5, 2, 19, LowerSilver),
    layer(0, 0, 17, StrokeBlack),
    layer(0, 0, 8, StrokeWhite),
    layer(0, 0, 7, StrokeNavy),
    layer(0, -3, 0, Silver2),
];

const LOWER_RAINBOW: &[LayerDescriptor] = &[
    layer(5, 2, 22, BaseStrokeBlack),
    layer(5, 2, 19, LowerSilver),
    layer(0, 0, 17, StrokeBlack),
    layer(0, 0, 8, StrokeWhite),
    layer(0, 0, 7, StrokeNavy),
    layer(0, -3, 0, Rainbow),
];

impl Recipe {
    /// Recipe for `line`, picking the rainbow variant when `rainbow` is set.
    pub fn for_line(line: Line, rainbow: bool) -> Self {
        match (line, rainbow) {
            (Line::Upper, false) => Self {
                name: "upper",
                layers: UPPER_PLAIN,
            },
            (Line::Upper, true) => Self {
                name: "upper-rainbow",
                layers: UPPER_RAINBOW,
            },
            (Line::Lower, false) => Self {
                name: "lower",
                layers: LOWER_PLAIN,
            },
            (Line::Lower, true) => Self {
                name: "lower-rainbow",
                layers: LOWER_RAINBOW,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/recipe.rs"]
mod tests;
