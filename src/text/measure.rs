use crate::{
    foundation::error::{ChoyenError, ChoyenResult},
    text::{layout::ShapedText, mask::render_text_mask},
};

/// Growth of the probe canvas between attempts, and the slack the text must leave.
pub const MEASURE_STEP: u32 = 100;
/// Widest probe canvas tried before giving up.
pub const MAX_PROBE_WIDTH: u32 = 16_000;

/// Rendered width of `text`: the right edge of its ink bounding box.
///
/// The text is drawn at the origin of a probe canvas `start_width` wide; the canvas grows
/// by [`MEASURE_STEP`] until the ink ends at least `MEASURE_STEP` pixels before the right
/// border (exactly at that slack is accepted once the canvas has grown). Text without ink
/// measures `0`.
#[tracing::instrument(level = "debug", skip(text), fields(font = text.font().name()))]
pub fn measure_text_width(
    text: &ShapedText,
    start_width: u32,
    probe_height: u32,
) -> ChoyenResult<u32> {
    let mut width = start_width;
    let mut grown = false;
    loop {
        if width > MAX_PROBE_WIDTH {
            return Err(ChoyenError::TextTooWide {
                limit_px: MAX_PROBE_WIDTH,
            });
        }
        let mask = render_text_mask(text, width, probe_height, (0.0, 0.0), 0.0)?;
        let Some(bounds) = mask.bounds() else {
            return Ok(0);
        };

        let limit = width.saturating_sub(MEASURE_STEP);
        if bounds.right < limit || (grown && bounds.right == limit) {
            tracing::debug!(width = bounds.right, probe = width, "measured text");
            return Ok(bounds.right);
        }
        width += MEASURE_STEP;
        grown = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
