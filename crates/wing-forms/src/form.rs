//! Form definitions: literal markup interleaved with field declarations.

use std::collections::HashSet;
use std::fmt;

use tracing::warn;

use crate::error::Result;
use crate::messages::MessageRegistry;
use crate::options::ResolvedOptions;
use crate::pipeline::FieldRenderer;
use crate::registry::FieldTypeRegistry;
use crate::schema::{ValidationSchema, build_validation_schema};
use crate::tag::{FieldDeclaration, Lexer, Span, TokenKind};

/// One piece of a form definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Markup copied to the output as-is.
    Text(String),
    /// A field declaration, replaced by its rendered input.
    Field(FieldDeclaration),
}

/// A problem in a form definition that does not stop it from working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthoringWarning {
    /// `maxlength` is below `minlength`; neither is applied.
    ConflictingLengths {
        /// Field name.
        field: String,
    },
    /// Length options on a type that ignores them.
    IgnoredLengths {
        /// Field name.
        field: String,
    },
    /// A size option on a type that ignores it.
    IgnoredSize {
        /// Field name.
        field: String,
    },
    /// More than one field shares a name.
    DuplicateName {
        /// Field name.
        field: String,
    },
    /// A field without a name; it renders as nothing.
    MissingName {
        /// The declared type.
        type_name: String,
    },
}

impl fmt::Display for AuthoringWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingLengths { field } => write!(
                f,
                "field '{field}': maxlength is less than minlength, both are ignored"
            ),
            Self::IgnoredLengths { field } => {
                write!(f, "field '{field}': length options are not supported")
            }
            Self::IgnoredSize { field } => {
                write!(f, "field '{field}': the size option is not supported")
            }
            Self::DuplicateName { field } => {
                write!(f, "field '{field}' is declared more than once")
            }
            Self::MissingName { type_name } => {
                write!(f, "[{type_name}] has no name and will not be rendered")
            }
        }
    }
}

/// An ordered form definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDefinition {
    segments: Vec<Segment>,
    registry: FieldTypeRegistry,
}

impl FormDefinition {
    /// Parses form source. Tags whose type is not in `registry` stay text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FormError::Tag`] when a registered tag is malformed.
    pub fn parse(source: &str, registry: &FieldTypeRegistry) -> Result<Self> {
        let mut segments: Vec<Segment> = Vec::new();

        for token in Lexer::new(source) {
            let segment = match token.kind {
                TokenKind::Text(text) | TokenKind::Escaped(text) => Segment::Text(text),
                TokenKind::Tag { type_name, body } => {
                    tag_segment(source, registry, &type_name, &body, token.span)?
                }
            };

            match segment {
                Segment::Text(text) => {
                    if let Some(Segment::Text(last)) = segments.last_mut() {
                        last.push_str(&text);
                        continue;
                    }
                    segments.push(Segment::Text(text));
                }
                field => segments.push(field),
            }
        }

        let form = Self {
            segments,
            registry: registry.clone(),
        };
        for warning in form.authoring_warnings() {
            warn!("{warning}");
        }
        Ok(form)
    }

    /// The segments in source order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The field declarations in source order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Field(field) => Some(field),
            Segment::Text(_) => None,
        })
    }

    /// The first field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields().find(|f| f.name() == name)
    }

    /// Renders the whole form, replacing each field with its markup.
    #[must_use]
    pub fn render(&self, renderer: &FieldRenderer<'_>) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Text(text) => text.clone(),
                Segment::Field(field) => renderer.render(field).to_html(),
            })
            .collect()
    }

    /// Derives the validation schema of this form.
    #[must_use]
    pub fn validation_schema(&self, messages: &dyn MessageRegistry) -> ValidationSchema {
        build_validation_schema(self.fields(), messages)
    }

    /// Checks the definition for problems that are tolerated at runtime.
    #[must_use]
    pub fn authoring_warnings(&self) -> Vec<AuthoringWarning> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();

        for field in self.fields() {
            let name = field.name();
            if name.is_empty() {
                warnings.push(AuthoringWarning::MissingName {
                    type_name: field.type_name().to_string(),
                });
                continue;
            }

            if !seen.insert(name) {
                warnings.push(AuthoringWarning::DuplicateName {
                    field: name.to_string(),
                });
            }

            let options = field.tag_options();
            let has_lengths = options.get_maxlength_option().is_some()
                || options.get_minlength_option().is_some();
            let caps = self.registry.get(field.type_name());
            let length_limits = caps.is_none_or(|caps| caps.length_limits);
            let size = caps.is_none_or(|caps| caps.size);

            if has_lengths && !length_limits {
                warnings.push(AuthoringWarning::IgnoredLengths {
                    field: name.to_string(),
                });
            } else if ResolvedOptions::has_conflicting_lengths(field) {
                warnings.push(AuthoringWarning::ConflictingLengths {
                    field: name.to_string(),
                });
            }

            if options.size_option().is_some() && !size {
                warnings.push(AuthoringWarning::IgnoredSize {
                    field: name.to_string(),
                });
            }
        }

        warnings
    }
}

/// A registered tag becomes a field; any other tag is kept as its source text.
fn tag_segment(
    source: &str,
    registry: &FieldTypeRegistry,
    type_name: &str,
    body: &str,
    span: Span,
) -> Result<Segment> {
    let Some(caps) = registry.get(type_name) else {
        let text = span.slice(source).unwrap_or_default().to_string();
        return Ok(Segment::Text(text));
    };
    let field = FieldDeclaration::parse(type_name, body, span, caps.name_attr)?;
    Ok(Segment::Field(field))
}

impl FromIterator<FieldDeclaration> for FormDefinition {
    fn from_iter<I: IntoIterator<Item = FieldDeclaration>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Segment::Field).collect(),
            registry: FieldTypeRegistry::text_types(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormError;
    use crate::error_store::ValidationErrorStore;
    use crate::messages::MessageCatalog;
    use crate::providers::{Html5Support, NoHangover};
    use crate::registry::FieldCapabilities;

    fn parse(source: &str) -> FormDefinition {
        FormDefinition::parse(source, &FieldTypeRegistry::text_types()).unwrap()
    }

    #[test]
    fn test_parse_fields() {
        let source = r#"[text* your-name] [email* your-email maxlength:40 "x"] [submit]"#;
        let form = parse(source);
        let names: Vec<&str> = form.fields().map(FieldDeclaration::name).collect();
        assert_eq!(names, ["your-name", "your-email"]);

        let email = form.field("your-email").unwrap();
        assert!(email.is_required());
        assert_eq!(email.values(), ["x"]);
        assert_eq!(email.options(), ["maxlength:40"]);
    }

    #[test]
    fn test_unregistered_tags_stay_text() {
        let form = parse(r#"a [submit "Send"] b"#);
        let text = Segment::Text(r#"a [submit "Send"] b"#.to_string());
        assert_eq!(form.segments(), [text]);
    }

    #[test]
    fn test_escaped_tag_is_text() {
        let form = parse("Use [[text your-name]] to add a field.");
        assert_eq!(form.fields().count(), 0);
        assert_eq!(
            form.segments(),
            [Segment::Text("Use [text your-name] to add a field.".to_string())]
        );
    }

    #[test]
    fn test_malformed_tag_is_error() {
        let registry = FieldTypeRegistry::text_types();
        let err = FormDefinition::parse(r#"[text name "open]"#, &registry).unwrap_err();
        assert!(matches!(err, FormError::Tag(_)));
    }

    #[test]
    fn test_registered_unknown_base_type_is_error() {
        let mut registry = FieldTypeRegistry::text_types();
        registry.register("date", FieldCapabilities::TEXT_INPUT);
        let err = FormDefinition::parse("[date when]", &registry).unwrap_err();
        assert!(matches!(err, FormError::Tag(_)));
    }

    #[test]
    fn test_type_without_name_attr() {
        let mut registry = FieldTypeRegistry::new();
        registry.register("text", FieldCapabilities::default());
        let form = FormDefinition::parse("[text looks-like-a-name]", &registry).unwrap();
        let field = form.fields().next().unwrap();
        assert_eq!(field.name(), "");
        assert_eq!(field.options(), ["looks-like-a-name"]);
    }

    #[test]
    fn test_render_form() {
        let form = parse("<label>Name [text your-name]</label>");
        let errors = ValidationErrorStore::new("f");
        let renderer = FieldRenderer::new(&errors, &NoHangover, &Html5Support(true));
        let html = form.render(&renderer);
        assert!(html.starts_with("<label>Name <span"));
        assert!(html.contains(r#"name="your-name""#));
        assert!(html.ends_with("</span></label>"));
    }

    #[test]
    fn test_validation_schema() {
        let form = parse("[email* your-email maxlength:40] [text note]");
        let schema = form.validation_schema(&MessageCatalog::new());
        let rules: Vec<&str> = schema.iter().map(|r| r.name()).collect();
        assert_eq!(rules, ["required", "email", "maxlength"]);
    }

    #[test]
    fn test_authoring_warnings() {
        let form = parse("[url site minlength:50 maxlength:10] [text site] [text]");
        assert_eq!(
            form.authoring_warnings(),
            [
                AuthoringWarning::ConflictingLengths {
                    field: "site".to_string()
                },
                AuthoringWarning::DuplicateName {
                    field: "site".to_string()
                },
                AuthoringWarning::MissingName {
                    type_name: "text".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_ignored_lengths_warning() {
        let mut registry = FieldTypeRegistry::new();
        registry.register(
            "tel",
            FieldCapabilities {
                length_limits: false,
                ..FieldCapabilities::TEXT_INPUT
            },
        );
        let form = FormDefinition::parse("[tel phone maxlength:5]", &registry).unwrap();
        assert_eq!(
            form.authoring_warnings(),
            [AuthoringWarning::IgnoredLengths {
                field: "phone".to_string()
            }]
        );
    }

    #[test]
    fn test_ignored_size_warning() {
        let mut registry = FieldTypeRegistry::new();
        registry.register(
            "url",
            FieldCapabilities {
                size: false,
                ..FieldCapabilities::TEXT_INPUT
            },
        );
        let form = FormDefinition::parse("[url site 20/]", &registry).unwrap();
        assert_eq!(
            form.authoring_warnings(),
            [AuthoringWarning::IgnoredSize {
                field: "site".to_string()
            }]
        );
    }

    #[test]
    fn test_from_iterator() {
        let form: FormDefinition = [FieldDeclaration::new("text", "a").unwrap()]
            .into_iter()
            .collect();
        assert_eq!(form.fields().count(), 1);
        assert!(form.authoring_warnings().is_empty());
    }

    #[test]
    fn test_warning_display() {
        let warning = AuthoringWarning::ConflictingLengths {
            field: "site".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "field 'site': maxlength is less than minlength, both are ignored"
        );
    }
}
