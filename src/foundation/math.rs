/// Round to the nearest integer, ties away from zero.
///
/// The decision is made on the shortest decimal representation that round-trips to `v`, so
/// a product such as `500.0 * 0.35 * 0.7` (`122.49999999999999`) rounds down even though a
/// naive `+ 0.5` would round it up.
pub fn round_half_up(v: f64) -> i64 {
    if !v.is_finite() {
        return 0;
    }
    let repr = format!("{}", v.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let Ok(mut n) = int_part.parse::<i64>() else {
        return v.round() as i64;
    };
    if frac_part.as_bytes().first().is_some_and(|d| *d >= b'5') {
        n += 1;
    }
    if v.is_sign_negative() { -n } else { n }
}

/// `n` evenly spaced samples from `start` to `stop` inclusive.
///
/// A single sample is `start`; the last sample is exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = stop;
            out
        }
    }
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
