//! Choyen renders the two-line "gold over silver" gradient banner.
//!
//! A banner is produced by a single linear pipeline:
//!
//! 1. **Gradients**: stop tables become vertical color ramps ([`linear_gradient`]).
//! 2. **Palette**: a fixed set of named ramps and flat fills sized for one text block ([`Palette`]).
//! 3. **Text**: each line is shaped with its own font and measured by probing ([`measure_text_width`]).
//! 4. **Layers**: every [`LayerDescriptor`] of a [`Recipe`] cuts one palette image through a
//!    stroked text mask; layers stack back to front into a text block.
//! 5. **Finish**: both blocks are sheared ([`tilt`]), interlocked, cropped to content and padded
//!    onto an opaque background.
//!
//! The whole render is pure: fonts are the only inputs read from disk, and they are loaded
//! up front into a [`FontSet`].
//!
//! # Getting started
//!
//! ```no_run
//! # fn main() -> choyen::ChoyenResult<()> {
//! let fonts = choyen::FontSet::from_dir("assets")?;
//! let banner = choyen::gen_image(&fonts, "5000兆円", "欲しい!")?;
//! banner.image.save("banner.png").map_err(anyhow::Error::from)?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod finish;
mod foundation;
mod gradient;
mod render;
mod text;

pub use compose::composite::{RgbaCanvas, over};
pub use compose::layers::{LEFT_MARGIN, UP_MARGIN, compose_text_block, stroke_for_height};
pub use compose::recipe::{LayerDescriptor, Line, Recipe};
pub use finish::banner::{
    BannerLayout, arrange_banner, content_bounds, crop_to_content, pad_onto_background,
};
pub use finish::tilt::{DEFAULT_TILT_DEGREES, tilt};
pub use foundation::core::{ContentBounds, Rgb8};
pub use foundation::error::{ChoyenError, ChoyenResult};
pub use foundation::math::{linspace, round_half_up};
pub use gradient::builder::{Axis, GradientField, GradientStops, linear_gradient, ramp_2d};
pub use gradient::palette::{Palette, PaletteId};
pub use render::encode::{OutputFormat, encode_banner, scale_banner};
pub use render::pipeline::{BannerLine, BannerRenderer, BannerRequest, RenderedBanner, gen_image};
pub use render::settings::{ASSETS_DIR_ENV, BannerSettings, resolve_assets_dir};
pub use text::font::{FontResource, FontSet, LOWER_FONT_FILE, UPPER_FONT_FILE};
pub use text::layout::{ShapedRun, ShapedText, TextLayoutEngine};
pub use text::mask::{TextMask, render_text_mask};
pub use text::measure::{MAX_PROBE_WIDTH, MEASURE_STEP, measure_text_width};
