use crate::foundation::{
    error::{ChoyenError, ChoyenResult},
    math::mul_div255_u8,
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of premultiplied `src` onto `dst`, scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Owned premultiplied RGBA8 surface, row-major and tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaCanvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Canvas where every pixel is the premultiplied `px`.
    pub fn filled(width: u32, height: u32, px: PremulRgba8) -> Self {
        Self {
            width,
            height,
            data: px.repeat(width as usize * height as usize),
        }
    }

    /// Wrap raw premultiplied bytes.
    pub fn from_premul_bytes(width: u32, height: u32, data: Vec<u8>) -> ChoyenResult<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(ChoyenError::render(format!(
                "canvas bytes do not match {width}x{height} rgba8"
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Premultiply a straight-alpha image.
    pub fn from_straight(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.as_raw().clone();
        for px in data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            for c in &mut px[..3] {
                *c = mul_div255_u8(u16::from(*c), a);
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Unpremultiply into a straight-alpha image.
    pub fn to_straight(&self) -> image::RgbaImage {
        let mut data = self.data.clone();
        for px in data.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        // Length matches width * height * 4 by construction.
        image::RgbaImage::from_raw(self.width, self.height, data)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`; transparent outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> PremulRgba8 {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite the pixel at `(x, y)`; ignored outside the canvas.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: PremulRgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Scale every pixel of `self` by the matching 8-bit coverage in `mask`.
    ///
    /// This is the "paste through mask" step: the palette image survives only where the
    /// text was drawn.
    pub fn masked_by(&self, mask: &[u8]) -> ChoyenResult<Self> {
        if mask.len() != self.width as usize * self.height as usize {
            return Err(ChoyenError::render(
                "mask size does not match canvas size",
            ));
        }
        let mut out = self.clone();
        for (px, &m) in out.data.chunks_exact_mut(4).zip(mask) {
            if m == 255 {
                continue;
            }
            for c in px.iter_mut() {
                *c = mul_div255_u8(u16::from(*c), u16::from(m));
            }
        }
        Ok(out)
    }

    /// Composite `src` over `self` with its top-left corner at `(dx, dy)`.
    ///
    /// Parts of `src` outside `self` are clipped.
    pub fn composite_at(&mut self, src: &RgbaCanvas, dx: i64, dy: i64) {
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (dx + i64::from(src.width)).min(i64::from(self.width));
        let y1 = (dy + i64::from(src.height)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let row_px = (x1 - x0) as usize;
        for y in y0..y1 {
            let sy = (y - dy) as usize;
            let sx = (x0 - dx) as usize;
            let s = (sy * src.width as usize + sx) * 4;
            let d = (y as usize * self.width as usize + x0 as usize) * 4;
            let src_row = &src.data[s..s + row_px * 4];
            let dst_row = &mut self.data[d..d + row_px * 4];
            for (dp, sp) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
                let out = over([dp[0], dp[1], dp[2], dp[3]], [sp[0], sp[1], sp[2], sp[3]], 1.0);
                dp.copy_from_slice(&out);
            }
        }
    }

    /// Copy of the `width × height` region at `(x, y)`; pixels outside are transparent.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        let mut out = Self::new(width, height);
        out.copy_from(self, -i64::from(x), -i64::from(y));
        out
    }

    fn copy_from(&mut self, src: &RgbaCanvas, dx: i64, dy: i64) {
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (dx + i64::from(src.width)).min(i64::from(self.width));
        let y1 = (dy + i64::from(src.height)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let row_bytes = (x1 - x0) as usize * 4;
        for y in y0..y1 {
            let s = (((y - dy) as usize) * src.width as usize + (x0 - dx) as usize) * 4;
            let d = (y as usize * self.width as usize + x0 as usize) * 4;
            self.data[d..d + row_bytes].copy_from_slice(&src.data[s..s + row_bytes]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composite.rs"]
mod tests;
