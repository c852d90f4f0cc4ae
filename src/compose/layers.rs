use crate::{
    compose::{composite::RgbaCanvas, recipe::Recipe},
    foundation::{error::ChoyenResult, math::round_half_up},
    gradient::palette::Palette,
    text::{layout::ShapedText, mask::render_text_mask},
};

/// Horizontal inset of the text origin inside the palette canvas.
pub const LEFT_MARGIN: u32 = 30;
/// Vertical inset of the text origin inside the palette canvas.
pub const UP_MARGIN: u32 = 20;

/// Recipe strokes are tuned for a 500px banner; scale them to `banner_height`.
pub fn stroke_for_height(stroke: u32, banner_height: u32) -> f64 {
    round_half_up(f64::from(stroke) * f64::from(banner_height) / 500.0) as f64
}

/// Stack every layer of `recipe` into one `block_width × block_height` text block.
///
/// Masks are rasterized on the palette canvas, so the block is the top-left window of the
/// palette area; text that spills past it is cut off.
///
/// Cuts and stacking stay premultiplied, so antialiased glyph edges keep their palette color
/// instead of darkening toward black.
#[tracing::instrument(level = "debug", skip(text, palette), fields(recipe = recipe.name))]
pub fn compose_text_block(
    text: &ShapedText,
    recipe: Recipe,
    palette: &Palette,
    block_width: u32,
    block_height: u32,
    banner_height: u32,
) -> ChoyenResult<RgbaCanvas> {
    let mut block = RgbaCanvas::new(block_width, block_height);
    for layer in recipe.layers {
        let origin = (
            f64::from(layer.offset.0) + f64::from(LEFT_MARGIN),
            f64::from(layer.offset.1) + f64::from(UP_MARGIN),
        );
        let mask = render_text_mask(
            text,
            palette.width(),
            palette.height(),
            origin,
            stroke_for_height(layer.stroke, banner_height),
        )?;
        let cut = palette.get(layer.palette).masked_by(mask.coverage())?;
        block.composite_at(&cut, 0, 0);
    }
    tracing::debug!(layers = recipe.layers.len(), "composed text block");
    Ok(block)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layers.rs"]
mod tests;
