use propstack::Source;
use tracing::debug;

use crate::client::{HttpKvClient, KvClient};

/// A [`Source`] that reads from a Consul KV store.
///
/// The optional prefix is the leading part of the hierarchical key, so a
/// stack configured with prefix `app/web` resolves `timeout` against
/// `app/web/timeout`. Not-found, transport failures, and non-success
/// responses all resolve to `None` — the chain simply moves on.
pub struct ConsulSource {
    client: Box<dyn KvClient>,
    prefix: Option<String>,
}

impl ConsulSource {
    /// Target an agent at `host:port` with an optional key prefix.
    pub fn new(host: impl Into<String>, port: u16, prefix: Option<String>) -> Self {
        Self {
            client: Box::new(HttpKvClient::new(host, port)),
            prefix,
        }
    }

    /// Target a local agent on the default port.
    pub fn localhost(prefix: Option<String>) -> Self {
        Self {
            client: Box::new(HttpKvClient::localhost()),
            prefix,
        }
    }

    /// Use an injected client, primarily for testing.
    pub fn with_client(client: Box<dyn KvClient>, prefix: Option<String>) -> Self {
        Self { client, prefix }
    }
}

impl Source for ConsulSource {
    fn get(&self, key: &str) -> Option<String> {
        debug!(key, "attempting consul lookup");
        self.client.get_value(self.prefix.as_deref(), key)
    }
}
