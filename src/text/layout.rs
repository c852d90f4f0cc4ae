use std::collections::HashMap;

use crate::{
    foundation::error::{ChoyenError, ChoyenResult},
    text::font::FontResource,
};

/// One shaped run: glyphs sharing a font size, positioned in layout space.
#[derive(Clone, Debug)]
pub struct ShapedRun {
    /// Font size in pixels.
    pub font_size: f32,
    /// Glyphs with layout-space positions; `y` is the baseline.
    pub glyphs: Vec<vello_cpu::Glyph>,
}

/// A single line of text shaped against one [`FontResource`].
///
/// Layout space has its origin at the top-left of the line box, so drawing at `(x, y)`
/// places the top of the line at `y`.
#[derive(Clone, Debug)]
pub struct ShapedText {
    font: FontResource,
    runs: Vec<ShapedRun>,
}

impl ShapedText {
    /// Face the glyph ids refer to.
    pub fn font(&self) -> &FontResource {
        &self.font
    }

    /// Shaped runs in visual order.
    pub fn runs(&self) -> &[ShapedRun] {
        &self.runs
    }

    /// `true` when no glyphs were produced.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.glyphs.is_empty())
    }
}

/// Stateful helper that shapes text with parley from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: HashMap<usize, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("registered_families", &self.families.len())
            .finish()
    }
}

impl TextLayoutEngine {
    /// Construct an engine with fresh parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Family name parley resolved for `font`, registering it on first use.
    pub fn family_name(&mut self, font: &FontResource) -> ChoyenResult<String> {
        let key = std::sync::Arc::as_ptr(font.bytes()) as usize;
        if let Some(name) = self.families.get(&key) {
            return Ok(name.clone());
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes().as_ref().clone()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            ChoyenError::font(format!("no font families registered from '{}'", font.name()))
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ChoyenError::font(format!("'{}' has no family name", font.name())))?
            .to_string();

        self.families.insert(key, family_name.clone());
        Ok(family_name)
    }

    /// Shape `text` as a single unwrapped line at `size_px`.
    pub fn shape(
        &mut self,
        text: &str,
        font: &FontResource,
        size_px: f32,
    ) -> ChoyenResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ChoyenError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let family_name = self.family_name(font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut runs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run
                    .positioned_glyphs()
                    .map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    })
                    .collect();
                runs.push(ShapedRun {
                    font_size: run.run().font_size(),
                    glyphs,
                });
            }
        }

        Ok(ShapedText {
            font: font.clone(),
            runs,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
