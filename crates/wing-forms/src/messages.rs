//! Validation message catalog.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Identifier of a user-facing validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageId {
    /// A required field is empty.
    InvalidRequired,
    /// The input is shorter than `minlength`.
    InvalidTooShort,
    /// The input is longer than `maxlength`.
    InvalidTooLong,
    /// The input is not an email address.
    InvalidEmail,
    /// The input is not a URL.
    InvalidUrl,
    /// The input is not a telephone number.
    InvalidTel,
}

impl MessageId {
    /// All message identifiers.
    pub const ALL: [Self; 6] = [
        Self::InvalidRequired,
        Self::InvalidTooShort,
        Self::InvalidTooLong,
        Self::InvalidEmail,
        Self::InvalidUrl,
        Self::InvalidTel,
    ];

    /// The identifier as used in catalogs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequired => "invalid_required",
            Self::InvalidTooShort => "invalid_too_short",
            Self::InvalidTooLong => "invalid_too_long",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidUrl => "invalid_url",
            Self::InvalidTel => "invalid_tel",
        }
    }

    /// Describes when the message is shown, for form authors.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidRequired => "There is a field that the sender must fill in",
            Self::InvalidTooShort => {
                "There is a field with input that is shorter than the minimum allowed length"
            }
            Self::InvalidTooLong => {
                "There is a field with input that is longer than the maximum allowed length"
            }
            Self::InvalidEmail => "Email address that the sender entered is invalid",
            Self::InvalidUrl => "URL that the sender entered is invalid",
            Self::InvalidTel => "Telephone number that the sender entered is invalid",
        }
    }

    /// The built-in English message.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::InvalidRequired => "Please fill out this field.",
            Self::InvalidTooShort => "This field has a too short input.",
            Self::InvalidTooLong => "This field has a too long input.",
            Self::InvalidEmail => "Please enter an email address.",
            Self::InvalidUrl => "Please enter a URL.",
            Self::InvalidTel => "Please enter a telephone number.",
        }
    }

    /// Looks up an identifier by its catalog name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of localized validation messages.
pub trait MessageRegistry {
    /// Returns the message for an identifier.
    fn lookup(&self, id: MessageId) -> String;
}

/// Built-in messages with optional per-form overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    overrides: HashMap<MessageId, String>,
}

impl MessageCatalog {
    /// Creates a catalog with the built-in messages only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides one message.
    #[must_use]
    pub fn with_override(mut self, id: MessageId, message: impl Into<String>) -> Self {
        self.overrides.insert(id, message.into());
        self
    }

    /// Builds a catalog from a JSON object of overrides, e.g.
    /// `{"invalid_email": "That does not look like an email."}`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Json`] for malformed JSON and
    /// [`FormError::Messages`] for unknown identifiers.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (name, message) in raw {
            let Some(id) = MessageId::from_name(&name) else {
                return Err(FormError::Messages(format!("unknown message id '{name}'")));
            };
            catalog.overrides.insert(id, message);
        }
        Ok(catalog)
    }
}

impl MessageRegistry for MessageCatalog {
    fn lookup(&self, id: MessageId) -> String {
        self.overrides
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.default_message().to_string())
    }
}
