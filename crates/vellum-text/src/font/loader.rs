use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;

use crate::font::{FontFace, Result};

/// Key for identifying a font within the cache.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum FontKey {
    /// Font file on disk plus face index (for collections).
    File { path: PathBuf, index: u32 },
    /// Font registered from an in-memory buffer under a caller-chosen name.
    Memory { name: String, index: u32 },
}

impl FontKey {
    pub fn file(path: impl AsRef<Path>, index: usize) -> Self {
        Self::File {
            path: path.as_ref().to_path_buf(),
            index: index as u32,
        }
    }

    pub fn memory(name: impl Into<String>, index: usize) -> Self {
        Self::Memory {
            name: name.into(),
            index: index as u32,
        }
    }
}

/// Simple in-memory font cache.
///
/// Disk fonts are keyed by path and face index; embedded fonts are
/// registered once under a name and shared from then on.
#[derive(Debug, Default)]
pub struct FontCache {
    fonts: HashMap<FontKey, Arc<FontFace>>,
}

impl FontCache {
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
        }
    }

    /// Get a font face from the cache or load it from disk.
    pub fn get_or_load(&mut self, path: impl AsRef<Path>, index: usize) -> Result<Arc<FontFace>> {
        let key = FontKey::file(&path, index);
        if let Some(face) = self.fonts.get(&key) {
            return Ok(face.clone());
        }

        log::debug!("loading font {} (face {})", path.as_ref().display(), index);
        let face = Arc::new(FontFace::from_path(path, index)?);
        self.fonts.insert(key, face.clone());
        Ok(face)
    }

    /// Register a font face parsed from an in-memory buffer, e.g. an
    /// embedded default font. Replaces any face previously registered
    /// under the same name.
    pub fn register_memory(
        &mut self,
        name: impl Into<String>,
        data: Vec<u8>,
        index: usize,
    ) -> Result<Arc<FontFace>> {
        let key = FontKey::memory(name, index);
        let face = Arc::new(FontFace::from_vec(data, index)?);
        self.fonts.insert(key, face.clone());
        Ok(face)
    }

    /// Retrieve a font by key if it exists.
    pub fn get(&self, key: &FontKey) -> Option<Arc<FontFace>> {
        self.fonts.get(key).cloned()
    }
}

/// Load a font face directly from disk without caching.
pub fn load_font(path: impl AsRef<Path>, index: usize) -> Result<FontFace> {
    FontFace::from_path(path, index)
}
