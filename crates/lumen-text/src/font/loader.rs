use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;

use super::{FontHandle, PixelFont, Result};

/// Key for identifying a font within the cache.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FontKey {
    /// Path to the font file on disk.
    pub path: PathBuf,
    /// Pixel size, stored as raw bits so the key stays hashable.
    pub px_bits: u32,
}

impl FontKey {
    pub fn new(path: impl AsRef<Path>, px: f32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            px_bits: px.to_bits(),
        }
    }
}

/// In-memory font cache keyed by file path and pixel size.
#[derive(Default)]
pub struct FontCache {
    fonts: HashMap<FontKey, FontHandle>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a font from the cache or load it from disk.
    pub fn get_or_load(&mut self, path: impl AsRef<Path>, px: f32) -> Result<FontHandle> {
        let key = FontKey::new(&path, px);
        if let Some(font) = self.fonts.get(&key) {
            return Ok(font.clone());
        }

        let font: FontHandle = Arc::new(PixelFont::from_path(&key.path, px)?);
        self.fonts.insert(key, font.clone());
        Ok(font)
    }

    /// Register an already constructed font under an explicit key.
    pub fn insert(&mut self, key: FontKey, font: FontHandle) {
        self.fonts.insert(key, font);
    }

    pub fn get(&self, key: &FontKey) -> Option<FontHandle> {
        self.fonts.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BlockFont;

    #[test]
    fn insert_and_get_round_trip() {
        let mut cache = FontCache::new();
        let key = FontKey::new("fonts/5x7.ttf", 7.0);
        cache.insert(key.clone(), Arc::new(BlockFont::default()));
        let font = cache.get(&key).expect("cached");
        assert_eq!(font.measure("AB"), 10);
        assert!(cache.get(&FontKey::new("fonts/5x7.ttf", 8.0)).is_none());
    }

    #[test]
    fn loads_each_path_and_size_once() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/demo.ttf");
        let mut cache = FontCache::new();
        let first = cache.get_or_load(path, 12.0).unwrap();
        let again = cache.get_or_load(path, 12.0).unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(cache.len(), 1);

        cache.get_or_load(path, 16.0).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let mut cache = FontCache::new();
        assert!(cache.get_or_load("/nonexistent/font.ttf", 8.0).is_err());
        assert!(cache.is_empty());
    }
}
