//! Validation schema derivation.
//!
//! The schema is an ordered rule list handed to the validation engine. For
//! each field the order is: `required`, the format rule, `minlength`,
//! `maxlength`. Engines may stop at the first failing rule per field, so the
//! order is part of the contract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::messages::{MessageId, MessageRegistry};
use crate::tag::{BaseType, FieldDeclaration};

/// A single validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum ValidationRule {
    /// The field must not be empty.
    Required { field: String, error: String },
    /// The field must be an email address.
    Email { field: String, error: String },
    /// The field must be a URL.
    Url { field: String, error: String },
    /// The field must be a telephone number.
    Tel { field: String, error: String },
    /// The field must have at least `threshold` characters.
    MinLength {
        field: String,
        threshold: u32,
        error: String,
    },
    /// The field must have at most `threshold` characters.
    MaxLength {
        field: String,
        threshold: u32,
        error: String,
    },
}

impl ValidationRule {
    /// The rule name as serialized.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::Email { .. } => "email",
            Self::Url { .. } => "url",
            Self::Tel { .. } => "tel",
            Self::MinLength { .. } => "minlength",
            Self::MaxLength { .. } => "maxlength",
        }
    }

    /// The field the rule applies to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field, .. }
            | Self::Email { field, .. }
            | Self::Url { field, .. }
            | Self::Tel { field, .. }
            | Self::MinLength { field, .. }
            | Self::MaxLength { field, .. } => field,
        }
    }

    /// The length threshold, for length rules.
    #[must_use]
    pub const fn threshold(&self) -> Option<u32> {
        match self {
            Self::MinLength { threshold, .. } | Self::MaxLength { threshold, .. } => {
                Some(*threshold)
            }
            _ => None,
        }
    }

    /// The message shown when the rule fails.
    #[must_use]
    pub fn error(&self) -> &str {
        match self {
            Self::Required { error, .. }
            | Self::Email { error, .. }
            | Self::Url { error, .. }
            | Self::Tel { error, .. }
            | Self::MinLength { error, .. }
            | Self::MaxLength { error, .. } => error,
        }
    }

    /// The catalog identifier of the rule's message.
    #[must_use]
    pub const fn message_id(&self) -> MessageId {
        match self {
            Self::Required { .. } => MessageId::InvalidRequired,
            Self::Email { .. } => MessageId::InvalidEmail,
            Self::Url { .. } => MessageId::InvalidUrl,
            Self::Tel { .. } => MessageId::InvalidTel,
            Self::MinLength { .. } => MessageId::InvalidTooShort,
            Self::MaxLength { .. } => MessageId::InvalidTooLong,
        }
    }
}

/// An ordered list of validation rules for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationSchema {
    rules: Vec<ValidationRule>,
}

impl ValidationSchema {
    /// Creates an empty schema.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    pub fn add_rule(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    /// The rules in order.
    #[must_use]
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Iterates over the rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationRule> {
        self.rules.iter()
    }

    /// The rules that apply to one field, in order.
    pub fn rules_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationRule> {
        self.rules.iter().filter(move |r| r.field() == field)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the schema has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Serializes the schema as a compact JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FormError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the schema as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FormError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a ValidationSchema {
    type Item = &'a ValidationRule;
    type IntoIter = std::slice::Iter<'a, ValidationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Derives the validation schema of a form from its field declarations.
///
/// Nameless declarations are skipped. Lengths come from
/// [`FieldDeclaration::resolve`], so a conflicting pair yields no length
/// rules, and a zero threshold yields no rule.
pub fn build_validation_schema<'a, I>(
    declarations: I,
    messages: &dyn MessageRegistry,
) -> ValidationSchema
where
    I: IntoIterator<Item = &'a FieldDeclaration>,
{
    let mut schema = ValidationSchema::new();

    for declaration in declarations {
        let field = declaration.name();
        if field.is_empty() {
            debug!("Skipping nameless [{}]", declaration.type_name());
            continue;
        }

        if declaration.is_required() {
            schema.add_rule(ValidationRule::Required {
                field: field.to_string(),
                error: messages.lookup(MessageId::InvalidRequired),
            });
        }

        match declaration.base_type() {
            BaseType::Email => schema.add_rule(ValidationRule::Email {
                field: field.to_string(),
                error: messages.lookup(MessageId::InvalidEmail),
            }),
            BaseType::Url => schema.add_rule(ValidationRule::Url {
                field: field.to_string(),
                error: messages.lookup(MessageId::InvalidUrl),
            }),
            BaseType::Tel => schema.add_rule(ValidationRule::Tel {
                field: field.to_string(),
                error: messages.lookup(MessageId::InvalidTel),
            }),
            BaseType::Text => {}
        }

        let resolved = declaration.resolve();
        if let Some(threshold) = resolved.minlength.filter(|&t| t > 0) {
            schema.add_rule(ValidationRule::MinLength {
                field: field.to_string(),
                threshold,
                error: messages.lookup(MessageId::InvalidTooShort),
            });
        }
        if let Some(threshold) = resolved.maxlength.filter(|&t| t > 0) {
            schema.add_rule(ValidationRule::MaxLength {
                field: field.to_string(),
                threshold,
                error: messages.lookup(MessageId::InvalidTooLong),
            });
        }
    }

    debug!(rules = schema.len(), "Built validation schema");
    schema
}
