//! Validation errors raised by a failed submission, keyed by field.

use std::collections::HashMap;

use ironhtml::html;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Current validation errors of one form instance.
///
/// The store is populated by whatever executes the validation schema and
/// is only read during rendering. Each field holds at most one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorStore {
    /// Identifier of the form instance on the page; prefixes reference ids.
    #[serde(default)]
    unit_tag: String,
    /// Error message keyed by field name.
    #[serde(default)]
    errors: HashMap<String, String>,
}

impl ValidationErrorStore {
    /// Creates an empty store for the given form instance.
    pub fn new(unit_tag: impl Into<String>) -> Self {
        Self {
            unit_tag: unit_tag.into(),
            errors: HashMap::new(),
        }
    }

    /// Decodes a store from JSON, e.g. one carried across a redirect.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FormError::Json`] if the input is not a valid store.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The form instance identifier.
    #[must_use]
    pub fn unit_tag(&self) -> &str {
        &self.unit_tag
    }

    /// Replaces the form instance identifier.
    pub fn set_unit_tag(&mut self, unit_tag: impl Into<String>) {
        self.unit_tag = unit_tag.into();
    }

    /// Records an error for a field, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Returns the error for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether the field has an error.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// The id that `aria-describedby` points at, if the field has an error.
    #[must_use]
    pub fn reference(&self, field: &str) -> Option<String> {
        self.contains(field)
            .then(|| format!("{}-ve-{field}", self.unit_tag))
    }

    /// The inline error tip for a field, or an empty string.
    #[must_use]
    pub fn markup(&self, field: &str) -> String {
        self.get(field).map_or_else(String::new, |message| {
            html! { span.class("wfp-not-valid-tip") }
                .attr("aria-hidden", "true")
                .text(message)
                .render()
        })
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Removes all errors.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl std::fmt::Display for ValidationErrorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort();
        for (field, message) in fields {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}
