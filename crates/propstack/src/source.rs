use std::collections::HashMap;

use tracing::debug;

/// A single place a property value can come from.
///
/// Implementations attempt to resolve the lookup and answer `None` when they
/// cannot. The contract is uniform across every source:
/// - a blank (empty or whitespace-only) key is always `None`;
/// - matching is case sensitive and exact;
/// - `None` means "not found", never an error — failures inside a source are
///   logged and absorbed.
pub trait Source: Send + Sync {
    /// Find the value for the specified key.
    fn get(&self, key: &str) -> Option<String>;
}

pub(crate) fn is_blank(key: &str) -> bool {
    key.trim().is_empty()
}

/// Process-level properties supplied by the host application at construction
/// (the analogue of JVM system properties: CLI overrides, hard-coded
/// defaults, and the like). The table is immutable once built.
pub struct SystemSource {
    props: HashMap<String, String>,
}

impl SystemSource {
    pub fn new<K, V, I>(props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            props: props
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Source for SystemSource {
    fn get(&self, key: &str) -> Option<String> {
        if is_blank(key) {
            return None;
        }
        self.props.get(key).cloned()
    }
}

/// Resolves a lookup against the process environment, read live on every
/// call. Non-UTF-8 values are treated as absent.
pub struct EnvSource;

impl Source for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        if is_blank(key) {
            return None;
        }
        std::env::var(key).ok()
    }
}

/// A source that always successfully finds nothing.
pub struct NullSource;

impl Source for NullSource {
    fn get(&self, key: &str) -> Option<String> {
        debug!(key, "null source lookup");
        None
    }
}
