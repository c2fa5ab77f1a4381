use crate::cache::CacheSource;
use crate::config::StackBuilder;
use crate::source::{is_blank, Source};

/// The cache-fronted resolver chain — the single entry point for lookups.
///
/// `get` consults the cache first, then each configured source in priority
/// order, stopping at the first match and writing it back into the cache
/// (insert-only, so under racing misses the first resolution wins). When no
/// cache is configured the cache steps are simply skipped. The chain itself
/// is stateless beyond its cache and source references and can be shared
/// across threads freely.
pub struct PropertyStack {
    cache: Option<CacheSource>,
    sources: Vec<Box<dyn Source>>,
}

impl PropertyStack {
    /// Create a stack over the given sources, first-priority first. A
    /// `cache_size` of zero disables caching.
    pub fn new(cache_size: usize, sources: Vec<Box<dyn Source>>) -> Self {
        let cache = (cache_size > 0).then(|| CacheSource::new(cache_size));
        Self { cache, sources }
    }

    pub fn builder() -> StackBuilder {
        StackBuilder::new()
    }

    /// Resolve the key and interpret it as a base-10 signed integer. Absent,
    /// blank, or unparsable values yield `default`.
    pub fn get_number(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(value) => value.trim().parse().unwrap_or(default),
            None => default,
        }
    }

    /// Resolve the key and interpret it as a boolean flag. Only the literals
    /// `"true"` and `"false"` (case-insensitive) are recognized; anything
    /// else, including an absent key, yields `default`.
    pub fn get_flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            None => default,
        }
    }
}

impl Source for PropertyStack {
    fn get(&self, key: &str) -> Option<String> {
        if is_blank(key) {
            return None;
        }
        if let Some(cache) = &self.cache {
            // A hit already refreshed its own recency.
            if let Some(hit) = cache.get(key) {
                return Some(hit);
            }
        }
        for source in &self.sources {
            if let Some(value) = source.get(key) {
                if let Some(cache) = &self.cache {
                    cache.touch(key, &value);
                }
                return Some(value);
            }
        }
        None
    }
}
