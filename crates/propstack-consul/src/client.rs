use tracing::debug;

/// Default Consul agent port.
pub const DEFAULT_PORT: u16 = 8500;
/// Default Consul agent host.
pub const DEFAULT_HOST: &str = "localhost";

/// Facade over the Consul KV read. Implemented over HTTP by
/// [`HttpKvClient`]; tests inject [`crate::mock::MockKvClient`] instead.
pub trait KvClient: Send + Sync {
    /// Fetch the raw value stored under `{prefix}/{key}` (`{key}` alone when
    /// the prefix is blank). `None` when the key is blank, the key is
    /// absent, or the store cannot be reached.
    fn get_value(&self, prefix: Option<&str>, key: &str) -> Option<String>;
}

impl<T: KvClient + ?Sized> KvClient for std::sync::Arc<T> {
    fn get_value(&self, prefix: Option<&str>, key: &str) -> Option<String> {
        (**self).get_value(prefix, key)
    }
}

/// Blocking HTTP implementation of [`KvClient`].
pub struct HttpKvClient {
    client: reqwest::blocking::Client,
    host: String,
    port: u16,
}

impl HttpKvClient {
    /// Create a client for the given agent. An empty host falls back to
    /// [`DEFAULT_HOST`], port 0 to [`DEFAULT_PORT`].
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let host = host.into();
        Self {
            client: reqwest::blocking::Client::new(),
            host: if host.is_empty() {
                DEFAULT_HOST.to_owned()
            } else {
                host
            },
            port: if port == 0 { DEFAULT_PORT } else { port },
        }
    }

    /// Client for a local agent on the default port.
    pub fn localhost() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }

    fn url_for(&self, prefix: Option<&str>, key: &str) -> String {
        match prefix.filter(|p| !p.trim().is_empty()) {
            Some(prefix) => format!(
                "http://{}:{}/v1/kv/{}/{}?raw",
                self.host, self.port, prefix, key
            ),
            None => format!("http://{}:{}/v1/kv/{}?raw", self.host, self.port, key),
        }
    }
}

impl KvClient for HttpKvClient {
    fn get_value(&self, prefix: Option<&str>, key: &str) -> Option<String> {
        if key.trim().is_empty() {
            return None;
        }
        let url = self.url_for(prefix, key);
        match self.client.get(&url).send() {
            Ok(response) if response.status().is_success() => match response.text() {
                Ok(body) => Some(body),
                Err(err) => {
                    debug!(%url, error = %err, "failed to read response body");
                    None
                }
            },
            Ok(response) => {
                debug!(%url, status = %response.status(), "unexpected response");
                None
            }
            Err(err) => {
                debug!(%url, error = %err, "request failed");
                None
            }
        }
    }
}
