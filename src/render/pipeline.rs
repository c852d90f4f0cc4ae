use crate::{
    compose::{
        composite::RgbaCanvas,
        layers::{LEFT_MARGIN, UP_MARGIN, compose_text_block},
        recipe::{Line, Recipe},
    },
    finish::{
        banner::{BannerLayout, arrange_banner, crop_to_content, pad_onto_background},
        tilt::tilt,
    },
    foundation::{
        core::Rgb8,
        error::{ChoyenError, ChoyenResult},
        math::round_half_up,
    },
    gradient::palette::Palette,
    render::settings::BannerSettings,
    text::{
        font::{FontResource, FontSet},
        layout::{ShapedText, TextLayoutEngine},
        measure::measure_text_width,
    },
};

/// Prefix that switches a marked line to its rainbow recipe.
const RAINBOW_MARKER: char = '$';
/// Extra room given to each line beyond its measured width.
const WIDTH_SLACK: u32 = 300;

/// One line of banner text and the recipe variant it is drawn with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerLine {
    /// Text to draw.
    pub text: String,
    /// Draw with the rainbow recipe.
    pub rainbow: bool,
}

impl BannerLine {
    /// Line drawn with the plain recipe.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rainbow: false,
        }
    }

    /// Line drawn with the rainbow recipe.
    pub fn rainbow(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rainbow: true,
        }
    }

    /// Parse chat-style input where a leading `$` selects the rainbow recipe.
    ///
    /// Empty lines, with or without the marker, are rejected.
    pub fn parse_marked(raw: &str) -> ChoyenResult<Self> {
        let (text, rainbow) = match raw.strip_prefix(RAINBOW_MARKER) {
            Some(rest) => (rest, true),
            None => (raw, false),
        };
        if text.is_empty() {
            return Err(ChoyenError::validation("banner line must not be empty"));
        }
        Ok(Self {
            text: text.to_string(),
            rainbow,
        })
    }
}

/// Everything needed to draw one banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerRequest {
    /// Gold/red line.
    pub upper: BannerLine,
    /// Silver/navy line.
    pub lower: BannerLine,
    /// Overrides [`BannerSettings::background`] when set.
    pub background: Option<Rgb8>,
}

impl BannerRequest {
    /// Request with both lines drawn plain on the default background.
    pub fn new(upper: impl Into<String>, lower: impl Into<String>) -> Self {
        Self {
            upper: BannerLine::plain(upper),
            lower: BannerLine::plain(lower),
            background: None,
        }
    }
}

/// A finished, opaque banner.
#[derive(Clone, Debug)]
pub struct RenderedBanner {
    /// Final RGB pixels.
    pub image: image::RgbImage,
}

impl RenderedBanner {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Renders banners with a fixed font pair and settings.
#[derive(Clone, Debug)]
pub struct BannerRenderer {
    fonts: FontSet,
    settings: BannerSettings,
}

impl BannerRenderer {
    /// Create a renderer, validating `settings`.
    pub fn new(fonts: FontSet, settings: BannerSettings) -> ChoyenResult<Self> {
        settings.validate()?;
        Ok(Self { fonts, settings })
    }

    /// Settings this renderer draws with.
    pub fn settings(&self) -> &BannerSettings {
        &self.settings
    }

    /// Draw `request` into a finished banner.
    ///
    /// Nothing is cached between calls; any failing stage aborts the whole render.
    #[tracing::instrument(
        level = "info",
        skip(self, request),
        fields(upper = %request.upper.text, lower = %request.lower.text)
    )]
    pub fn render(&self, request: &BannerRequest) -> ChoyenResult<RenderedBanner> {
        let s = &self.settings;
        let half = u32::try_from(round_half_up(f64::from(s.height) / 2.0))
            .map_err(|_| ChoyenError::validation("banner height out of range"))?;

        let mut engine = TextLayoutEngine::new();
        let upper_text = shape_line(&mut engine, &request.upper, &self.fonts.upper, s, 0.35)?;
        let lower_text = shape_line(&mut engine, &request.lower, &self.fonts.lower, s, 0.37)?;

        let upper_measured = measure_text_width(&upper_text, s.default_width, half)?;
        let lower_measured = measure_text_width(&lower_text, s.default_width, half)?;

        let layout = BannerLayout {
            upper_width: s.default_width.max(upper_measured) + WIDTH_SLACK,
            lower_width: s.default_width.max(lower_measured) + WIDTH_SLACK,
            subset: BannerLayout::subset_for(upper_measured),
            height: s.height,
        };
        tracing::debug!(?layout, upper_measured, lower_measured, "laid out banner");

        let upper_block = draw_line(
            &upper_text,
            Recipe::for_line(Line::Upper, request.upper.rainbow),
            layout.upper_width,
            layout.upper_width,
            half,
            s.height,
        )?;
        let lower_block = draw_line(
            &lower_text,
            Recipe::for_line(Line::Lower, request.lower.rainbow),
            layout.lower_width,
            layout.lower_width + LEFT_MARGIN,
            half,
            s.height,
        )?;

        let upper_tilted = tilt(&upper_block, s.tilt_degrees)?;
        let lower_tilted = tilt(&lower_block, s.tilt_degrees)?;

        let arranged = arrange_banner(&upper_tilted, &lower_tilted, layout);
        let cropped = crop_to_content(&arranged)?;
        let background = request.background.unwrap_or(s.background);
        let image = pad_onto_background(&cropped, background);

        tracing::info!(width = image.width(), height = image.height(), "rendered banner");
        Ok(RenderedBanner { image })
    }
}

fn shape_line(
    engine: &mut TextLayoutEngine,
    line: &BannerLine,
    font: &FontResource,
    settings: &BannerSettings,
    size_ratio: f64,
) -> ChoyenResult<ShapedText> {
    let scaled = f64::from(settings.height) * size_ratio * settings.font_scale;
    let size = round_half_up(scaled) + i64::from(UP_MARGIN);
    engine.shape(&line.text, font, size as f32)
}

/// Generate the palette for one line and stack its recipe into a text block.
fn draw_line(
    text: &ShapedText,
    recipe: Recipe,
    line_width: u32,
    block_width: u32,
    half: u32,
    banner_height: u32,
) -> ChoyenResult<RgbaCanvas> {
    let palette = Palette::generate(line_width + LEFT_MARGIN, half + UP_MARGIN)?;
    compose_text_block(text, recipe, &palette, block_width, half, banner_height)
}

/// Render a plain banner for `upper` over `lower` with default settings.
pub fn gen_image(fonts: &FontSet, upper: &str, lower: &str) -> ChoyenResult<RenderedBanner> {
    BannerRenderer::new(fonts.clone(), BannerSettings::default())?
        .render(&BannerRequest::new(upper, lower))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
