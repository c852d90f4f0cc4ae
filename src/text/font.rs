use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::foundation::error::{ChoyenError, ChoyenResult};

/// File name of the black-weight sans face used for the upper line.
pub const UPPER_FONT_FILE: &str = "NotoSansCJKSC-Black.ttf";
/// File name of the black-weight serif face used for the lower line.
pub const LOWER_FONT_FILE: &str = "NotoSerifCJKSC-Black.ttf";

/// Raw font file held in memory, ready for shaping and glyph rasterization.
#[derive(Clone)]
pub struct FontResource {
    name: String,
    bytes: Arc<Vec<u8>>,
    data: vello_cpu::peniko::FontData,
}

impl fmt::Debug for FontResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResource")
            .field("name", &self.name)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

impl FontResource {
    /// Read a TrueType/OpenType file from disk.
    pub fn load(path: &Path) -> ChoyenResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(name, bytes)
    }

    /// Wrap in-memory font bytes.
    ///
    /// Only the container signature is checked here; faces that fail to shape are reported
    /// by [`TextLayoutEngine`](crate::TextLayoutEngine).
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> ChoyenResult<Self> {
        let name = name.into();
        let signature = bytes.get(..4).unwrap_or_default();
        let known = matches!(
            signature,
            [0x00, 0x01, 0x00, 0x00]
                | [b'O', b'T', b'T', b'O']
                | [b't', b'r', b'u', b'e']
                | [b't', b't', b'c', b'f']
        );
        if !known {
            return Err(ChoyenError::font(format!(
                "'{name}' is not a TrueType/OpenType font"
            )));
        }
        let bytes = Arc::new(bytes);
        let data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
            0,
        );
        Ok(Self { name, bytes, data })
    }

    /// Display name, usually the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw font bytes.
    pub fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }

    pub(crate) fn glyph_font(&self) -> &vello_cpu::peniko::FontData {
        &self.data
    }
}

/// The pair of faces a banner is drawn with.
#[derive(Clone, Debug)]
pub struct FontSet {
    /// Face for the upper line.
    pub upper: FontResource,
    /// Face for the lower line.
    pub lower: FontResource,
}

impl FontSet {
    /// Load [`UPPER_FONT_FILE`] and [`LOWER_FONT_FILE`] from `dir`.
    #[tracing::instrument(level = "debug")]
    pub fn from_dir(dir: impl AsRef<Path> + fmt::Debug) -> ChoyenResult<Self> {
        let dir = dir.as_ref();
        Self::from_paths(&dir.join(UPPER_FONT_FILE), &dir.join(LOWER_FONT_FILE))
    }

    /// Load the two faces from explicit paths.
    pub fn from_paths(upper: &Path, lower: &Path) -> ChoyenResult<Self> {
        Ok(Self {
            upper: FontResource::load(upper)?,
            lower: FontResource::load(lower)?,
        })
    }

    /// Paths [`FontSet::from_dir`] reads from.
    pub fn default_paths(dir: &Path) -> (PathBuf, PathBuf) {
        (dir.join(UPPER_FONT_FILE), dir.join(LOWER_FONT_FILE))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
