//! # propstack-consul
//!
//! Remote key/value source for [`propstack`], backed by the Consul KV HTTP
//! API. The only supported operation is fetching a single raw value with
//! `GET http://{host}:{port}/v1/kv/{prefix}/{key}?raw`, where `prefix` is
//! the leading part of a hierarchical key (omitted when blank) — the key
//! hierarchy is treated as a namespace.
//!
//! No retries and no caching happen here; the chain's cache in `propstack`
//! is the only caching layer. Any non-success response or transport failure
//! is logged at debug level and resolves to nothing.

pub mod client;
pub mod mock;
pub mod source;

pub use client::{HttpKvClient, KvClient, DEFAULT_HOST, DEFAULT_PORT};
pub use source::ConsulSource;
