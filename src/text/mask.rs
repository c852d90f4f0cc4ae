use crate::{
    foundation::{
        core::ContentBounds,
        error::{ChoyenError, ChoyenResult},
    },
    text::layout::ShapedText,
};

/// 8-bit coverage plane: text drawn white on black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMask {
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl TextMask {
    /// Mask with no coverage.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major coverage values.
    pub fn coverage(&self) -> &[u8] {
        &self.coverage
    }

    /// Bounding box of covered pixels, or `None` when nothing was drawn.
    pub fn bounds(&self) -> Option<ContentBounds> {
        ContentBounds::of_plane(self.coverage.iter().copied(), self.width)
    }
}

/// Rasterize `text` into a `width × height` mask with its line box at `origin`.
///
/// A positive `stroke_px` grows every glyph outline by that many pixels on each side, the
/// way a stroked-and-filled glyph looks.
pub fn render_text_mask(
    text: &ShapedText,
    width: u32,
    height: u32,
    origin: (f64, f64),
    stroke_px: f64,
) -> ChoyenResult<TextMask> {
    if width == 0 || height == 0 || text.is_empty() {
        return Ok(TextMask::empty(width, height));
    }
    let w: u16 = width
        .try_into()
        .map_err(|_| ChoyenError::render("mask width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ChoyenError::render("mask height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.0, origin.1)));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    if stroke_px > 0.0 {
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(2.0 * stroke_px)
                .with_join(vello_cpu::kurbo::Join::Round),
        );
    }

    let font = text.font().glyph_font();
    for run in text.runs() {
        ctx.glyph_run(font)
            .font_size(run.font_size)
            .fill_glyphs(run.glyphs.iter().copied());
        if stroke_px > 0.0 {
            ctx.glyph_run(font)
                .font_size(run.font_size)
                .stroke_glyphs(run.glyphs.iter().copied());
        }
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(TextMask {
        width,
        height,
        coverage: pixmap.data().iter().map(|px| px.a).collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/mask.rs"]
mod tests;
