use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::properties;
use crate::source::{is_blank, Source};

/// How long a loaded table is considered fresh when no interval is given.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// A [`Source`] backed by an ordered list of property files, merged into one
/// table with later files overriding earlier ones on duplicate keys.
///
/// The table is rebuilt lazily: each `get` first checks, without taking any
/// lock, whether the last reload is older than the refresh interval. Only
/// stale callers contend on the reload mutex, and the staleness check is
/// repeated under it so that at most one of them actually re-reads the
/// files. An interval of zero reloads on every lookup.
///
/// A file that cannot be read during a reload is logged and skipped; it does
/// not abort the rest of the reload. An empty path list yields a source that
/// always resolves nothing.
pub struct FileSource {
    paths: Vec<PathBuf>,
    refresh_interval_ms: u64,
    table: RwLock<HashMap<String, String>>,
    // Milliseconds since the UNIX epoch; 0 means never refreshed.
    last_refreshed: AtomicU64,
    reload_lock: Mutex<()>,
}

impl FileSource {
    /// Create a source over the given file paths using
    /// [`DEFAULT_REFRESH_INTERVAL`]. Empty paths are dropped silently.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_refresh_interval(paths, DEFAULT_REFRESH_INTERVAL)
    }

    /// Create a source over the given file paths with an explicit refresh
    /// interval.
    pub fn with_refresh_interval<I, P>(paths: I, interval: Duration) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths
            .into_iter()
            .map(Into::into)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        Self {
            paths,
            refresh_interval_ms: interval.as_millis() as u64,
            table: RwLock::new(HashMap::new()),
            last_refreshed: AtomicU64::new(0),
            reload_lock: Mutex::new(()),
        }
    }

    fn reload_due(&self) -> bool {
        let last = self.last_refreshed.load(Ordering::Acquire);
        now_millis().saturating_sub(last) >= self.refresh_interval_ms
    }

    fn maybe_reload(&self) {
        if !self.reload_due() {
            return;
        }
        let _guard = self.reload_lock.lock();
        // A concurrent caller may have just finished the reload.
        if !self.reload_due() {
            return;
        }
        let mut fresh = HashMap::new();
        for path in &self.paths {
            match fs::read_to_string(path) {
                Ok(text) => properties::parse_into(&text, &mut fresh),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable properties file");
                }
            }
        }
        debug!(files = self.paths.len(), entries = fresh.len(), "reloaded properties table");
        *self.table.write() = fresh;
        self.last_refreshed.store(now_millis(), Ordering::Release);
    }
}

impl Source for FileSource {
    fn get(&self, key: &str) -> Option<String> {
        if is_blank(key) {
            return None;
        }
        self.maybe_reload();
        self.table.read().get(key).cloned()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
