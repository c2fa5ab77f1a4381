use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::file::{FileSource, DEFAULT_REFRESH_INTERVAL};
use crate::source::Source;

/// A [`Source`] over every `*.properties` file in one directory.
///
/// Discovery happens once, at construction: the directory is listed
/// non-recursively, plain files named `*.properties` are kept, and the list
/// is sorted lexicographically so the override order is deterministic (later
/// names win on duplicate keys). Lookups delegate to an internal
/// [`FileSource`], so the discovered files are still re-read on the usual
/// refresh interval.
///
/// A path that is not an existing directory, or a directory with no matching
/// files, degrades to a source that always resolves nothing.
pub struct DirectorySource {
    inner: Option<FileSource>,
}

impl DirectorySource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_refresh_interval(path, DEFAULT_REFRESH_INTERVAL)
    }

    pub fn with_refresh_interval(path: impl AsRef<Path>, interval: Duration) -> Self {
        let files = discover(path.as_ref());
        let inner = if files.is_empty() {
            None
        } else {
            Some(FileSource::with_refresh_interval(files, interval))
        };
        Self { inner }
    }
}

fn discover(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        warn!(path = %dir.display(), "not a directory, source will resolve nothing");
        return Vec::new();
    }
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "failed to list directory");
            return Vec::new();
        }
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(".properties"))
        })
        .collect();
    files.sort();
    debug!(path = %dir.display(), count = files.len(), "discovered properties files");
    files
}

impl Source for DirectorySource {
    fn get(&self, key: &str) -> Option<String> {
        debug!(key, "attempting directory lookup");
        self.inner.as_ref().and_then(|files| files.get(key))
    }
}
