//! Error types for form parsing and catalog loading.

use thiserror::Error;

use crate::tag::Span;

/// Errors raised while parsing a single bracket tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The tag's type name is not one of the supported base types.
    #[error("unknown field type '{type_name}' at {span}")]
    UnknownType { type_name: String, span: Span },

    /// The field name contains characters outside `[0-9a-zA-Z:._-]`.
    #[error("invalid field name '{name}' at {span}")]
    InvalidName { name: String, span: Span },

    /// A quoted value was opened but never closed.
    #[error("unterminated quoted value at {span}")]
    UnterminatedQuote { span: Span },

    /// An option token appeared after the first quoted value.
    #[error("unexpected option '{token}' after quoted values at {span}")]
    UnexpectedToken { token: String, span: Span },
}

impl TagError {
    /// Returns the source location of the error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnknownType { span, .. }
            | Self::InvalidName { span, .. }
            | Self::UnterminatedQuote { span }
            | Self::UnexpectedToken { span, .. } => *span,
        }
    }
}

/// Form-level errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A tag in the form source could not be parsed.
    #[error(transparent)]
    Tag(#[from] TagError),

    /// A message catalog override was rejected.
    #[error("invalid message catalog: {0}")]
    Messages(String),

    /// JSON input could not be decoded.
    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_error_span() {
        let err = TagError::UnterminatedQuote {
            span: Span::new(3, 9),
        };
        assert_eq!(err.span(), Span::new(3, 9));
    }

    #[test]
    fn test_tag_error_display() {
        let err = TagError::InvalidName {
            name: "bad name!".to_string(),
            span: Span::new(0, 12),
        };
        assert_eq!(err.to_string(), "invalid field name 'bad name!' at 0..12");
    }

    #[test]
    fn test_form_error_from_tag() {
        let err: FormError = TagError::UnknownType {
            type_name: "date".to_string(),
            span: Span::new(0, 6),
        }
        .into();
        assert!(matches!(err, FormError::Tag(_)));
        assert_eq!(err.to_string(), "unknown field type 'date' at 0..6");
    }
}
