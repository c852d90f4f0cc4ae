use std::io::Write;

use anyhow::Context;

use crate::{
    foundation::error::{ChoyenError, ChoyenResult},
    render::pipeline::RenderedBanner,
};

/// JPEG quality used for encoded banners.
const JPEG_QUALITY: u8 = 90;

/// Container format of an encoded banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Baseline JPEG.
    #[default]
    Jpeg,
    /// Lossless PNG.
    Png,
}

/// Resize `banner` by `scale` with a Lanczos filter.
///
/// Each dimension becomes `floor(dim * scale)`, never less than one pixel.
pub fn scale_banner(banner: &RenderedBanner, scale: f64) -> ChoyenResult<image::RgbImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ChoyenError::validation("output scale must be finite and > 0"));
    }
    let (w, h) = banner.image.dimensions();
    let tw = ((f64::from(w) * scale).floor() as u32).max(1);
    let th = ((f64::from(h) * scale).floor() as u32).max(1);
    if (tw, th) == (w, h) {
        return Ok(banner.image.clone());
    }
    Ok(image::imageops::resize(
        &banner.image,
        tw,
        th,
        image::imageops::FilterType::Lanczos3,
    ))
}

/// Scale `banner` and write it to `writer` as `format`.
#[tracing::instrument(level = "debug", skip(banner, writer))]
pub fn encode_banner<W: Write>(
    banner: &RenderedBanner,
    scale: f64,
    format: OutputFormat,
    writer: W,
) -> ChoyenResult<()> {
    let img = scale_banner(banner, scale)?;
    match format {
        OutputFormat::Jpeg => img
            .write_with_encoder(image::codecs::jpeg::JpegEncoder::new_with_quality(
                writer,
                JPEG_QUALITY,
            ))
            .context("encode banner as JPEG")?,
        OutputFormat::Png => img
            .write_with_encoder(image::codecs::png::PngEncoder::new(writer))
            .context("encode banner as PNG")?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
