//! # propstack
//!
//! Layered string-property resolution. A [`PropertyStack`] consults an
//! ordered chain of sources (process properties, environment, files, a
//! directory of files, embedded resources, remote stores) and returns the
//! first match, fronted by a bounded LRU cache. File-backed sources refresh
//! themselves lazily on a time budget.
//!
//! Lookups never fail: an unresolvable key is `None`, and the typed
//! accessors fall back to a caller-supplied default. The only fallible
//! operation in the crate is loading a [`StackConfig`] from disk.

pub mod cache;
pub mod chain;
pub mod config;
pub mod dir;
pub mod error;
pub mod file;
mod properties;
pub mod resource;
pub mod source;

pub use cache::{CacheSource, LruCache, DEFAULT_CACHE_CAPACITY};
pub use chain::PropertyStack;
pub use config::{CacheConfig, StackBuilder, StackConfig, DEFAULT_CACHE_SIZE};
pub use dir::DirectorySource;
pub use error::{Result, StackError};
pub use file::{FileSource, DEFAULT_REFRESH_INTERVAL};
pub use resource::ResourceSource;
pub use source::{EnvSource, NullSource, Source, SystemSource};
