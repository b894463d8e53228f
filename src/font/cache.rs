//! Glyph metric caches.
//!
//! Lookups take a read lock. A miss queries the typeface with no lock held
//! and then inserts with `entry().or_insert`, so two threads racing on the
//! same character both compute it and the first insert wins. Either way the
//! stored value is a complete lookup result.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::typeface::{Font, FontKey, FontMetrics, GlyphMetrics, Typeface};

/// Glyph metrics for one typeface at one size.
#[derive(Debug)]
pub struct GlyphCache {
    key: FontKey,
    typeface: Arc<dyn Typeface>,
    metrics: FontMetrics,
    glyphs: RwLock<HashMap<char, Option<GlyphMetrics>>>,
}

impl GlyphCache {
    /// Create an empty cache for `typeface` at `size`.
    #[must_use]
    pub fn new(typeface: Arc<dyn Typeface>, size: f32) -> Self {
        let metrics = typeface.metrics(size);
        Self {
            key: FontKey::new(typeface.id(), size),
            typeface,
            metrics,
            glyphs: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn key(&self) -> FontKey {
        self.key
    }

    #[must_use]
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Metrics for `ch`, or `None` when the typeface has no definition.
    #[must_use]
    pub fn glyph(&self, ch: char) -> Option<GlyphMetrics> {
        if let Some(entry) = self.read().get(&ch) {
            return *entry;
        }
        let looked_up = self.typeface.glyph(ch, self.key.size());
        *self.write().entry(ch).or_insert(looked_up)
    }

    /// Populate the cache with every character of `text`.
    pub fn prepare(&self, text: &str) {
        let missing: Vec<char> = {
            let glyphs = self.read();
            let mut missing: Vec<char> = text.chars().filter(|c| !glyphs.contains_key(c)).collect();
            missing.sort_unstable();
            missing.dedup();
            missing
        };
        if missing.is_empty() {
            return;
        }

        let size = self.key.size();
        let looked_up: Vec<(char, Option<GlyphMetrics>)> = missing
            .into_iter()
            .map(|c| (c, self.typeface.glyph(c, size)))
            .collect();

        let mut glyphs = self.write();
        for (c, metrics) in looked_up {
            glyphs.entry(c).or_insert(metrics);
        }
    }

    /// Number of cached characters, including cached misses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<char, Option<GlyphMetrics>>> {
        self.glyphs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<char, Option<GlyphMetrics>>> {
        self.glyphs.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Registry of [`GlyphCache`]s keyed by (typeface, size).
#[derive(Debug, Default)]
pub struct FontCache {
    caches: RwLock<HashMap<FontKey, Arc<GlyphCache>>>,
}

impl FontCache {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    #[must_use]
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<FontCache>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Glyph cache for `font`, created on first use.
    #[must_use]
    pub fn get(&self, font: &Font) -> Arc<GlyphCache> {
        let key = font.key();
        if let Some(cache) = self
            .caches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(cache);
        }

        let built = Arc::new(GlyphCache::new(Arc::clone(font.typeface()), font.size()));
        let mut caches = self.caches.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(caches.entry(key).or_insert(built))
    }

    /// Number of (typeface, size) caches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.caches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cache. Caches already handed out stay usable.
    pub fn clear(&self) {
        self.caches
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
