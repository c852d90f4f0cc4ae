use std::cmp::Ordering;

use crate::foundation::{
    core::Rgb8,
    error::{ChoyenError, ChoyenResult},
    math::{linspace, round_half_up},
};

/// Direction along which a two-color ramp varies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    /// Color changes from the top row to the bottom row.
    #[default]
    Vertical,
    /// Color changes from the left column to the right column.
    Horizontal,
}

/// Validated gradient stop table.
///
/// Positions are strictly increasing, start at `0.0` and end at `1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStops {
    stops: Vec<(f64, Rgb8)>,
}

impl GradientStops {
    /// Validate and build a stop table from `(position, color)` pairs.
    pub fn new(stops: &[(f64, Rgb8)]) -> ChoyenResult<Self> {
        if stops.len() < 2 {
            return Err(ChoyenError::validation("gradient needs at least two stops"));
        }
        if stops[0].0 != 0.0 || stops[stops.len() - 1].0 != 1.0 {
            return Err(ChoyenError::validation(
                "gradient stops must start at 0.0 and end at 1.0",
            ));
        }
        for pair in stops.windows(2) {
            if pair[0].0.partial_cmp(&pair[1].0) != Some(Ordering::Less) {
                return Err(ChoyenError::validation(format!(
                    "gradient stop positions must be strictly increasing ({} then {})",
                    pair[0].0, pair[1].0
                )));
            }
        }
        Ok(Self {
            stops: stops.to_vec(),
        })
    }

    /// The stops in position order.
    pub fn stops(&self) -> &[(f64, Rgb8)] {
        &self.stops
    }

    /// Color of the stop at position `0.0`.
    pub fn first_color(&self) -> Rgb8 {
        self.stops[0].1
    }

    /// Color of the stop at position `1.0`.
    pub fn last_color(&self) -> Rgb8 {
        self.stops[self.stops.len() - 1].1
    }
}

/// Row-major field of floating point RGB samples.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientField {
    width: u32,
    height: u32,
    texels: Vec<[f64; 3]>,
}

impl GradientField {
    /// An empty field of the given width.
    pub fn empty(width: u32) -> Self {
        Self {
            width,
            height: 0,
            texels: Vec::new(),
        }
    }

    /// Field width in samples.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Field height in rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at `(x, y)`, if inside the field.
    pub fn get(&self, x: u32, y: u32) -> Option<[f64; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.texels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Append `other` below this field.
    pub fn vstack(&mut self, other: GradientField) -> ChoyenResult<()> {
        if other.height == 0 {
            return Ok(());
        }
        if other.width != self.width {
            return Err(ChoyenError::validation(
                "vstack expects gradient fields of equal width",
            ));
        }
        self.height += other.height;
        self.texels.extend(other.texels);
        Ok(())
    }

    /// Quantize into an opaque RGBA image of exactly `width × height`.
    ///
    /// Channels are truncated toward zero. Rows past the end of the field are opaque black,
    /// rows past `height` are dropped.
    pub fn to_rgba_image(&self, width: u32, height: u32) -> image::RgbaImage {
        image::RgbaImage::from_fn(width, height, |x, y| match self.get(x, y) {
            Some([r, g, b]) => image::Rgba([r as u8, g as u8, b as u8, 255]),
            None => image::Rgba([0, 0, 0, 255]),
        })
    }
}

/// Two-color linear ramp of `width × height` samples.
pub fn ramp_2d(start: Rgb8, stop: Rgb8, width: u32, height: u32, axis: Axis) -> GradientField {
    let (start, stop) = (start.to_f64(), stop.to_f64());
    let len = match axis {
        Axis::Vertical => height,
        Axis::Horizontal => width,
    } as usize;
    let channels: [Vec<f64>; 3] = std::array::from_fn(|c| linspace(start[c], stop[c], len));

    let mut texels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        for x in 0..width as usize {
            let i = match axis {
                Axis::Vertical => y,
                Axis::Horizontal => x,
            };
            texels.push([channels[0][i], channels[1][i], channels[2][i]]);
        }
    }
    GradientField {
        width,
        height,
        texels,
    }
}

/// Multi-stop vertical gradient.
///
/// The active region spans `size` of the total height and is centered at `center`; the
/// margins above and below replicate the first and last stop colors. Each stop pair gets
/// `round_half_up(height * size * Δposition)` rows, so the stacked height can differ from
/// `height` by rounding.
#[tracing::instrument(level = "trace", skip(stops))]
pub fn linear_gradient(
    stops: &GradientStops,
    width: u32,
    height: u32,
    size: f64,
    center: f64,
) -> ChoyenResult<GradientField> {
    let h = f64::from(height);
    let margin_up = round_half_up(h * (center - size / 2.0));
    let margin_down = round_half_up(h * (1.0 - center - size / 2.0));
    if margin_up < 0 || margin_down < 0 {
        return Err(ChoyenError::validation(format!(
            "gradient size {size} at center {center} leaves a negative margin"
        )));
    }

    let mut out = GradientField::empty(width);
    let first = stops.first_color();
    out.vstack(ramp_2d(first, first, width, margin_up as u32, Axis::Vertical))?;

    for pair in stops.stops().windows(2) {
        let (pk, from) = pair[0];
        let (k, to) = pair[1];
        let rows = round_half_up(h * size * (k - pk)).max(0) as u32;
        out.vstack(ramp_2d(from, to, width, rows, Axis::Vertical))?;
    }

    let last = stops.last_color();
    out.vstack(ramp_2d(last, last, width, margin_down as u32, Axis::Vertical))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/builder.rs"]
mod tests;
