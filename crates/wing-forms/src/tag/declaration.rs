//! Field declarations parsed from bracket tags.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Span;
use crate::error::TagError;
use crate::options::{ResolvedOptions, TagOptions};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-zA-Z:._-]+$").expect("valid name pattern"));

/// The semantic type of a text-like field, with the required marker stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    /// Single-line plain text.
    Text,
    /// Email address.
    Email,
    /// URL.
    Url,
    /// Telephone number.
    Tel,
}

impl BaseType {
    /// All supported base types.
    pub const ALL: [Self; 4] = [Self::Text, Self::Email, Self::Url, Self::Tel];

    /// Returns the lowercase type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Url => "url",
            Self::Tel => "tel",
        }
    }

    /// Parses a tag type name such as `"email*"`.
    #[must_use]
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        let base = type_name.trim().trim_end_matches('*');
        Self::ALL.into_iter().find(|t| t.as_str() == base)
    }

    /// Whether values of this type get a format rule and a `validates-as` class.
    #[must_use]
    pub const fn has_format(self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field declaration from a form definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    type_name: String,
    base_type: BaseType,
    name: String,
    options: Vec<String>,
    values: Vec<String>,
    span: Span,
}

impl FieldDeclaration {
    /// Creates a declaration with no options or values.
    ///
    /// An empty `name` is allowed; such a field renders as nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::UnknownType`] if `type_name` is not text, email,
    /// url or tel (optionally followed by `*`), and [`TagError::InvalidName`]
    /// if a non-empty name contains characters outside `[0-9a-zA-Z:._-]`.
    pub fn new(type_name: &str, name: impl Into<String>) -> Result<Self, TagError> {
        Self::from_parts(
            type_name,
            name.into(),
            Vec::new(),
            Vec::new(),
            Span::default(),
        )
    }

    pub(crate) fn from_parts(
        type_name: &str,
        name: String,
        options: Vec<String>,
        values: Vec<String>,
        span: Span,
    ) -> Result<Self, TagError> {
        let type_name = type_name.trim();
        let base_type =
            BaseType::from_type_name(type_name).ok_or_else(|| TagError::UnknownType {
                type_name: type_name.to_string(),
                span,
            })?;

        if !name.is_empty() && !NAME_PATTERN.is_match(&name) {
            return Err(TagError::InvalidName { name, span });
        }

        Ok(Self {
            type_name: type_name.to_string(),
            base_type,
            name,
            options,
            values,
            span,
        })
    }

    /// Parses a tag's attribute text. With `name_attr`, the first option
    /// becomes the name.
    pub(crate) fn parse(
        type_name: &str,
        body: &str,
        span: Span,
        name_attr: bool,
    ) -> Result<Self, TagError> {
        let (mut options, values) = parse_attributes(body, span)?;
        let name = if name_attr && !options.is_empty() {
            options.remove(0)
        } else {
            String::new()
        };
        Self::from_parts(type_name, name, options, values, span)
    }

    /// Adds a raw option token.
    #[must_use]
    pub fn option(mut self, token: impl Into<String>) -> Self {
        self.options.push(token.into());
        self
    }

    /// Adds a value (default or placeholder candidate).
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// The declared type, e.g. `"email*"`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The base type.
    #[must_use]
    pub const fn base_type(&self) -> BaseType {
        self.base_type
    }

    /// The field name, possibly empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw option tokens, in declaration order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The quoted values, in declaration order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Where the declaration appeared in the form source.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Whether the type carries the required marker.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.type_name.ends_with('*')
    }

    /// Parses the option tokens into a typed list.
    #[must_use]
    pub fn tag_options(&self) -> TagOptions {
        TagOptions::parse(&self.options)
    }

    /// Resolves the options into a typed record.
    #[must_use]
    pub fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions::resolve(self)
    }
}

/// Splits tag attribute text into option tokens followed by quoted values.
fn parse_attributes(body: &str, span: Span) -> Result<(Vec<String>, Vec<String>), TagError> {
    let mut options = Vec::new();
    let mut values = Vec::new();
    let mut chars = body.char_indices().peekable();

    while let Some(&(i, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '"' || c == '\'' {
            chars.next();
            let rest = &body[i + 1..];
            let close = rest.find(c).ok_or(TagError::UnterminatedQuote { span })?;
            values.push(rest[..close].to_string());
            while chars.peek().is_some_and(|&(j, _)| j <= i + close + 1) {
                chars.next();
            }
            continue;
        }

        let rest = &body[i..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = &rest[..len];
        if !values.is_empty() {
            return Err(TagError::UnexpectedToken {
                token: token.to_string(),
                span,
            });
        }
        options.push(token.to_string());
        while chars.peek().is_some_and(|&(j, _)| j < i + len) {
            chars.next();
        }
    }

    Ok((options, values))
}
