use std::sync::Arc;

use crate::{
    compose::composite::RgbaCanvas,
    foundation::error::{ChoyenError, ChoyenResult},
};

/// Shear angle of the classic banner.
pub const DEFAULT_TILT_DEGREES: f64 = 24.0;

/// Shear `block` so its top edge leans right by `angle_deg`.
///
/// The output is `round(w + h * tan(angle))` wide and as tall as the input. Source pixel
/// `(u, v)` lands at `(u - tan * v + h * tan, v)`, so the bottom row stays put and the top
/// row moves right by the full shear distance. Resampling is bilinear; area outside the
/// sheared block stays transparent.
#[tracing::instrument(level = "debug", skip(block), fields(w = block.width(), h = block.height()))]
pub fn tilt(block: &RgbaCanvas, angle_deg: f64) -> ChoyenResult<RgbaCanvas> {
    let (w, h) = (block.width(), block.height());
    let tan = angle_deg.to_radians().tan();
    let dist = f64::from(h) * tan;
    let out_w = (f64::from(w) + dist).round().max(0.0) as u32;

    if w == 0 || h == 0 || out_w == 0 {
        return Ok(RgbaCanvas::new(out_w, h));
    }
    let cw: u16 = out_w
        .try_into()
        .map_err(|_| ChoyenError::render("tilted width exceeds u16"))?;
    let ch: u16 = h
        .try_into()
        .map_err(|_| ChoyenError::render("tilted height exceeds u16"))?;

    let paint = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(canvas_to_pixmap(block)?)),
        sampler: vello_cpu::peniko::ImageSampler::default()
            .with_quality(vello_cpu::peniko::ImageQuality::Medium),
    };

    let mut ctx = vello_cpu::RenderContext::new(cw, ch);
    ctx.set_transform(vello_cpu::kurbo::Affine::new([
        1.0, 0.0, -tan, 1.0, dist, 0.0,
    ]));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(w),
        f64::from(h),
    ));
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(cw, ch);
    ctx.render_to_pixmap(&mut pixmap);
    RgbaCanvas::from_premul_bytes(out_w, h, pixmap.data_as_u8_slice().to_vec())
}

fn canvas_to_pixmap(canvas: &RgbaCanvas) -> ChoyenResult<vello_cpu::Pixmap> {
    let w: u16 = canvas
        .width()
        .try_into()
        .map_err(|_| ChoyenError::render("block width exceeds u16"))?;
    let h: u16 = canvas
        .height()
        .try_into()
        .map_err(|_| ChoyenError::render("block height exceeds u16"))?;

    let mut may_have_opacities = false;
    let pixels = canvas
        .data()
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/finish/tilt.rs"]
mod tests;
