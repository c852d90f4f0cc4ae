use crate::{
    compose::{
        composite::{RgbaCanvas, over},
        layers::{LEFT_MARGIN, UP_MARGIN},
    },
    foundation::{
        core::{ContentBounds, Rgb8},
        error::{ChoyenError, ChoyenResult},
        math::round_half_up,
    },
};

/// Border added around the cropped banner: `PAD_X` on each side, `PAD_Y` on each side.
const PAD_X: u32 = 50;
const PAD_Y: u32 = 15;

/// Widths that decide how the two tilted lines interlock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerLayout {
    /// Width of the upper text block before tilting.
    pub upper_width: u32,
    /// Width of the lower text block before tilting.
    pub lower_width: u32,
    /// Horizontal indent of the lower line under the upper one.
    pub subset: u32,
    /// Banner height.
    pub height: u32,
}

impl BannerLayout {
    /// Indent of the lower line for an upper line measured at `measured_upper` px.
    pub fn subset_for(measured_upper: u32) -> u32 {
        measured_upper.saturating_sub(100).max(200)
    }
}

/// Place both tilted lines on one transparent canvas.
///
/// The upper line sits at `(0, 50)`. The lower line starts at `subset`, or is right-aligned
/// with the upper line when the upper one is wider than `lower + subset`.
#[tracing::instrument(level = "debug", skip(upper, lower))]
pub fn arrange_banner(
    upper: &RgbaCanvas,
    lower: &RgbaCanvas,
    layout: BannerLayout,
) -> RgbaCanvas {
    let BannerLayout {
        upper_width,
        lower_width,
        subset,
        height,
    } = layout;
    let width = upper_width.max(lower_width) + LEFT_MARGIN + subset + 100;
    let mut canvas = RgbaCanvas::new(width, height + UP_MARGIN + 30);

    canvas.composite_at(upper, 0, 50);

    let lower_y = round_half_up(f64::from(height) / 2.0) + 15;
    let lower_x = if upper_width > lower_width + subset {
        i64::from(upper_width) + i64::from(subset) - i64::from(lower_width)
    } else {
        i64::from(subset)
    };
    canvas.composite_at(lower, lower_x, lower_y);
    canvas
}

/// Bounding box of pixels with nonzero alpha.
pub fn content_bounds(canvas: &RgbaCanvas) -> Option<ContentBounds> {
    ContentBounds::of_plane(
        canvas.data().chunks_exact(4).map(|px| px[3]),
        canvas.width(),
    )
}

/// Crop `canvas` to its visible content.
pub fn crop_to_content(canvas: &RgbaCanvas) -> ChoyenResult<RgbaCanvas> {
    let bounds = content_bounds(canvas).ok_or(ChoyenError::EmptyRender)?;
    tracing::debug!(?bounds, "cropped banner");
    Ok(canvas.crop(bounds.left, bounds.top, bounds.width(), bounds.height()))
}

/// Flatten `content` onto an opaque `background` with a fixed border.
pub fn pad_onto_background(content: &RgbaCanvas, background: Rgb8) -> image::RgbImage {
    let width = content.width() + 2 * PAD_X;
    let height = content.height() + 2 * PAD_Y;
    let [r, g, b] = background.to_array();
    let bg = image::Rgb([r, g, b]);

    image::RgbImage::from_fn(width, height, |x, y| {
        if x < PAD_X || y < PAD_Y {
            return bg;
        }
        let src = content.pixel(x - PAD_X, y - PAD_Y);
        if src[3] == 0 {
            return bg;
        }
        let out = over([r, g, b, 255], src, 1.0);
        image::Rgb([out[0], out[1], out[2]])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/finish/banner.rs"]
mod tests;
