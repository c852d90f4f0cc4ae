use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    foundation::{
        core::Rgb8,
        error::{ChoyenError, ChoyenResult},
    },
    text::measure::MAX_PROBE_WIDTH,
};

/// Environment variable naming the directory that holds the banner fonts.
pub const ASSETS_DIR_ENV: &str = "CHOYEN_ASSETS_DIR";

/// Tunables of a banner render.
///
/// Every field has a default, so a JSON config only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BannerSettings {
    /// Minimum probe width used when measuring a line.
    pub default_width: u32,
    /// Banner height before cropping and padding.
    pub height: u32,
    /// Color behind the text.
    pub background: Rgb8,
    /// Shear applied to both lines, in degrees.
    pub tilt_degrees: f64,
    /// Font size factor relative to the line height.
    pub font_scale: f64,
    /// Resize factor applied when encoding.
    pub output_scale: f64,
}

impl Default for BannerSettings {
    fn default() -> Self {
        Self {
            default_width: 1500,
            height: 500,
            background: Rgb8::WHITE,
            tilt_degrees: crate::finish::tilt::DEFAULT_TILT_DEGREES,
            font_scale: 0.7,
            output_scale: 0.75,
        }
    }
}

impl BannerSettings {
    /// Reject settings that cannot produce a banner.
    pub fn validate(&self) -> ChoyenResult<()> {
        if self.height < 2 {
            return Err(ChoyenError::validation("height must be >= 2"));
        }
        if self.default_width == 0 || self.default_width > MAX_PROBE_WIDTH {
            return Err(ChoyenError::validation(format!(
                "default_width must be in 1..={MAX_PROBE_WIDTH}"
            )));
        }
        if !self.tilt_degrees.is_finite() || !(0.0..80.0).contains(&self.tilt_degrees) {
            return Err(ChoyenError::validation(
                "tilt_degrees must be in [0, 80)",
            ));
        }
        if !self.font_scale.is_finite() || self.font_scale <= 0.0 {
            return Err(ChoyenError::validation("font_scale must be finite and > 0"));
        }
        if !self.output_scale.is_finite() || self.output_scale <= 0.0 {
            return Err(ChoyenError::validation(
                "output_scale must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Read settings from a JSON file and validate them.
    pub fn from_json_path(path: &Path) -> ChoyenResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let settings: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config '{}'", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Font directory: `explicit` if given, else [`ASSETS_DIR_ENV`], else `assets/` next to the
/// running executable.
pub fn resolve_assets_dir(explicit: Option<PathBuf>) -> ChoyenResult<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(ASSETS_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let exe = std::env::current_exe().context("locate current executable")?;
    let dir = exe
        .parent()
        .ok_or_else(|| ChoyenError::validation("executable has no parent directory"))?;
    Ok(dir.join("assets"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
