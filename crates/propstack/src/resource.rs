use std::collections::HashMap;

use rust_embed::RustEmbed;
use tracing::debug;

use crate::properties;
use crate::source::{is_blank, Source};

/// A [`Source`] over property texts compiled into the binary.
///
/// The table is built eagerly at construction and never refreshed — embedded
/// content cannot change for the lifetime of the process. Listed resources
/// that do not exist (or are not UTF-8) are skipped silently; entries from
/// later resources override earlier ones on duplicate keys.
pub struct ResourceSource {
    table: HashMap<String, String>,
}

impl ResourceSource {
    /// Build from assets embedded with [`rust_embed`], loading `paths` in
    /// order.
    pub fn from_embedded<E: RustEmbed>(paths: &[&str]) -> Self {
        let mut table = HashMap::new();
        for path in paths {
            match E::get(path) {
                Some(file) => match std::str::from_utf8(&file.data) {
                    Ok(text) => properties::parse_into(text, &mut table),
                    Err(_) => debug!(path, "embedded resource is not UTF-8, skipping"),
                },
                None => debug!(path, "embedded resource not found, skipping"),
            }
        }
        Self { table }
    }

    /// Build from `(name, text)` pairs, typically paired with
    /// `include_str!`. The name is only used for diagnostics.
    pub fn from_static(entries: &[(&str, &str)]) -> Self {
        let mut table = HashMap::new();
        for (name, text) in entries {
            debug!(name, "loading static resource");
            properties::parse_into(text, &mut table);
        }
        Self { table }
    }
}

impl Source for ResourceSource {
    fn get(&self, key: &str) -> Option<String> {
        if is_blank(key) {
            return None;
        }
        self.table.get(key).cloned()
    }
}
