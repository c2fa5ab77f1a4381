//! Mock key/value client for deterministic testing.
//!
//! Returns pre-configured values without making any HTTP calls.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::client::KvClient;

/// A mock [`KvClient`] that answers from a fixed table.
///
/// # Example
/// ```
/// use propstack_consul::mock::MockKvClient;
/// let client = MockKvClient::new().with_value(Some("app"), "timeout", "30");
/// ```
pub struct MockKvClient {
    values: HashMap<String, String>,
    /// Track all lookups received (for assertions in tests).
    pub requests: Mutex<Vec<(Option<String>, String)>>,
    failing: bool,
}

impl MockKvClient {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            requests: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// Pre-load a value under the composed `{prefix}/{key}` path.
    pub fn with_value(mut self, prefix: Option<&str>, key: &str, value: &str) -> Self {
        self.values.insert(compose(prefix, key), value.to_owned());
        self
    }

    /// Make every lookup behave like a transport failure.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

impl Default for MockKvClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KvClient for MockKvClient {
    fn get_value(&self, prefix: Option<&str>, key: &str) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .push((prefix.map(str::to_owned), key.to_owned()));
        if self.failing || key.trim().is_empty() {
            return None;
        }
        self.values.get(&compose(prefix, key)).cloned()
    }
}

fn compose(prefix: Option<&str>, key: &str) -> String {
    match prefix.filter(|p| !p.trim().is_empty()) {
        Some(prefix) => format!("{prefix}/{key}"),
        None => key.to_owned(),
    }
}
