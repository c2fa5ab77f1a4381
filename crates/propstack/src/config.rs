use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::chain::PropertyStack;
use crate::dir::DirectorySource;
use crate::error::StackError;
use crate::file::{FileSource, DEFAULT_REFRESH_INTERVAL};
use crate::resource::ResourceSource;
use crate::source::{EnvSource, Source, SystemSource};

/// Cache size used by [`StackBuilder::with_caching`].
pub const DEFAULT_CACHE_SIZE: usize = 64;

/// Builder for a [`PropertyStack`].
///
/// The priority order is fixed: system properties, environment, files,
/// directory, embedded resources, then any extra sources in the order they
/// were added.
pub struct StackBuilder {
    cache_size: usize,
    system: Option<HashMap<String, String>>,
    use_environment: bool,
    files: Vec<PathBuf>,
    directory: Option<PathBuf>,
    resources: Option<ResourceSource>,
    refresh_interval: Duration,
    extra: Vec<Box<dyn Source>>,
}

impl StackBuilder {
    pub fn new() -> Self {
        Self {
            cache_size: 0,
            system: None,
            use_environment: true,
            files: Vec::new(),
            directory: None,
            resources: None,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            extra: Vec::new(),
        }
    }

    /// Derive a builder from a deserialized [`StackConfig`].
    pub fn from_config(config: StackConfig) -> Self {
        let mut builder = Self::new();
        builder.cache_size = if config.cache.enabled {
            if config.cache.size < 1 {
                DEFAULT_CACHE_CAPACITY
            } else {
                config.cache.size
            }
        } else {
            0
        };
        builder.use_environment = config.use_environment;
        builder.files = config.files;
        builder.directory = config.directory;
        builder.refresh_interval = Duration::from_millis(config.refresh_interval_ms);
        builder
    }

    /// Cache recently resolved properties, using [`DEFAULT_CACHE_SIZE`]
    /// entries.
    pub fn with_caching(mut self) -> Self {
        self.cache_size = DEFAULT_CACHE_SIZE;
        self
    }

    /// Cache recently resolved properties with an explicit capacity. Zero
    /// disables caching.
    pub fn cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Supply the process-level property table (highest priority).
    pub fn system_properties<K, V, I>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.system = Some(
            props
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Skip the environment source. It is consulted by default.
    pub fn without_environment(mut self) -> Self {
        self.use_environment = false;
        self
    }

    /// Property files to consult, in override order (later wins).
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// A directory whose `*.properties` files are consulted.
    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory = Some(path.into());
        self
    }

    /// Refresh interval for the file and directory sources.
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Property resources embedded in the binary, loaded in override order.
    pub fn with_resources<E: RustEmbed>(mut self, paths: &[&str]) -> Self {
        self.resources = Some(ResourceSource::from_embedded::<E>(paths));
        self
    }

    /// Append an arbitrary source at the end of the chain (for example a
    /// remote key/value store).
    pub fn with_source(mut self, source: Box<dyn Source>) -> Self {
        self.extra.push(source);
        self
    }

    pub fn build(self) -> PropertyStack {
        let mut sources: Vec<Box<dyn Source>> = Vec::new();
        if let Some(props) = self.system {
            sources.push(Box::new(SystemSource::new(props)));
        }
        if self.use_environment {
            sources.push(Box::new(EnvSource));
        }
        if !self.files.is_empty() {
            sources.push(Box::new(FileSource::with_refresh_interval(
                self.files,
                self.refresh_interval,
            )));
        }
        if let Some(dir) = self.directory {
            sources.push(Box::new(DirectorySource::with_refresh_interval(
                dir,
                self.refresh_interval,
            )));
        }
        if let Some(resources) = self.resources {
            sources.push(Box::new(resources));
        }
        sources.extend(self.extra);
        PropertyStack::new(self.cache_size, sources)
    }
}

impl Default for StackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Declarative configuration ──────────────────────────────────

/// TOML-deserializable description of a stack — the declarative counterpart
/// of [`StackBuilder`]. Remote sources carry credentials and clients of
/// their own, so they are appended programmatically via
/// [`StackBuilder::with_source`] rather than described here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub cache: CacheConfig,
    /// Property files in override order (later wins).
    pub files: Vec<PathBuf>,
    /// Directory whose `*.properties` files are consulted.
    pub directory: Option<PathBuf>,
    /// How long file-backed tables stay fresh, in milliseconds.
    pub refresh_interval_ms: u64,
    /// Whether the process environment is consulted.
    pub use_environment: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub size: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            files: Vec::new(),
            directory: None,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL.as_millis() as u64,
            use_environment: true,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl StackConfig {
    /// Load a config from a TOML file.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, StackError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading stack configuration");
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            StackError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}
