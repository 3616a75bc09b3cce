//! Ordered HTML attribute maps and their serialization.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static ATTR_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_:][a-z_:.0-9-]*$").expect("valid attribute key pattern"));

/// Attributes emitted first and even when empty.
const PRIORITIZED: [&str; 3] = ["type", "name", "value"];

/// An insertion-ordered map of HTML attributes.
///
/// Keys are trimmed and lowercased. Setting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = normalize_key(&key.into());
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets an attribute when `value` is present.
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.set(key, value.to_string());
        }
    }

    /// Gets an attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = normalize_key(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the attribute is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the map as `key="value"` pairs.
    ///
    /// `type`, `name` and `value` come first and are emitted even when
    /// empty. Other attributes follow in insertion order and are skipped when
    /// their trimmed value is empty. Keys that are not valid attribute names
    /// are dropped.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut parts = Vec::with_capacity(self.entries.len());

        for key in PRIORITIZED {
            if let Some(value) = self.get(key) {
                parts.push(format!(r#"{key}="{}""#, html_escape(value.trim())));
            }
        }

        for (key, value) in &self.entries {
            if PRIORITIZED.contains(&key.as_str()) || !ATTR_KEY.is_match(key) {
                continue;
            }
            let value = value.trim();
            if !value.is_empty() {
                parts.push(format!(r#"{key}="{}""#, html_escape(value)));
            }
        }

        parts.join(" ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Escapes HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
