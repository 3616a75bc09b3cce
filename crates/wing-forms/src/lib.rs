//! # wing-forms
//!
//! Tag-based form field rendering and validation schema derivation.
//!
//! This crate provides:
//! - A parser for bracket-tag form definitions (`[email* your-email]`)
//! - Typed resolution of tag options (size, lengths, class, id, ...)
//! - Rendering of text, email, URL and telephone inputs with ARIA state
//! - An ordered validation schema for a separate validation engine
//!
//! ## Quick Start
//!
//! ```rust
//! use wing_forms::{
//!     FieldRenderer, FieldTypeRegistry, FormDefinition, Html5Support, MessageCatalog,
//!     NoHangover, ValidationErrorStore,
//! };
//!
//! let source = r#"<label>Your email [email* your-email maxlength:40 placeholder "you@example.com"]</label>"#;
//! let form = FormDefinition::parse(source, &FieldTypeRegistry::text_types()).unwrap();
//!
//! // Schema for the validation engine
//! let schema = form.validation_schema(&MessageCatalog::new());
//! let rules: Vec<&str> = schema.iter().map(|r| r.name()).collect();
//! assert_eq!(rules, ["required", "email", "maxlength"]);
//!
//! // Page display
//! let errors = ValidationErrorStore::new("wfp-f1-o1");
//! let renderer = FieldRenderer::new(&errors, &NoHangover, &Html5Support(true));
//! let html = form.render(&renderer);
//! assert!(html.contains(r#"aria-required="true""#));
//! ```
//!
//! ## After a failed submission
//!
//! ```rust
//! use std::collections::HashMap;
//! use wing_forms::{FieldDeclaration, Html5Support, ValidationErrorStore, render_field};
//!
//! let field = FieldDeclaration::new("url*", "site").unwrap();
//!
//! let mut errors = ValidationErrorStore::new("wfp-f1-o1");
//! errors.insert("site", "Please enter a URL.");
//! let mut previous = HashMap::new();
//! previous.insert("site".to_string(), "example".to_string());
//!
//! let rendered = render_field(&field, &errors, &previous, &Html5Support(true));
//! assert_eq!(rendered.attributes.get("aria-invalid"), Some("true"));
//! assert_eq!(rendered.attributes.get("aria-describedby"), Some("wfp-f1-o1-ve-site"));
//! assert_eq!(rendered.attributes.get("value"), Some("example"));
//! ```

pub mod attrs;
mod error;
mod error_store;
mod form;
pub mod messages;
pub mod options;
mod pipeline;
pub mod providers;
pub mod registry;
mod render;
pub mod schema;
pub mod tag;

pub use attrs::AttributeMap;
pub use error::{FormError, Result, TagError};
pub use error_store::ValidationErrorStore;
pub use form::{AuthoringWarning, FormDefinition, Segment};
pub use messages::{MessageCatalog, MessageId, MessageRegistry};
pub use options::ResolvedOptions;
pub use pipeline::FieldRenderer;
pub use providers::{CapabilityProbe, HangoverProvider, Html5Support, NoHangover};
pub use registry::{FieldCapabilities, FieldTypeRegistry};
pub use render::{RenderedField, form_control_class, render_field};
pub use schema::{ValidationRule, ValidationSchema, build_validation_schema};
pub use tag::{BaseType, FieldDeclaration};
