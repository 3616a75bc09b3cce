//! Explicit composition of the rendering collaborators.

use crate::error_store::ValidationErrorStore;
use crate::providers::{CapabilityProbe, HangoverProvider};
use crate::render::{RenderedField, render_field};
use crate::tag::FieldDeclaration;

/// Renders field declarations against one request's collaborators.
///
/// ```rust
/// use wing_forms::{FieldDeclaration, FieldRenderer, Html5Support, NoHangover, ValidationErrorStore};
///
/// let errors = ValidationErrorStore::new("wfp-f1-o1");
/// let renderer = FieldRenderer::new(&errors, &NoHangover, &Html5Support(true));
///
/// let field = FieldDeclaration::new("email*", "your-email").unwrap();
/// let html = renderer.render(&field).to_html();
/// assert!(html.contains(r#"type="email""#));
/// ```
#[derive(Clone, Copy)]
pub struct FieldRenderer<'a> {
    errors: &'a ValidationErrorStore,
    hangover: &'a dyn HangoverProvider,
    probe: &'a dyn CapabilityProbe,
}

impl std::fmt::Debug for FieldRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRenderer")
            .field("errors", &self.errors)
            .field("typed_inputs", &self.probe.supports_typed_inputs())
            .finish_non_exhaustive()
    }
}

impl<'a> FieldRenderer<'a> {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(
        errors: &'a ValidationErrorStore,
        hangover: &'a dyn HangoverProvider,
        probe: &'a dyn CapabilityProbe,
    ) -> Self {
        Self {
            errors,
            hangover,
            probe,
        }
    }

    /// The error store this renderer reads.
    #[must_use]
    pub const fn errors(&self) -> &'a ValidationErrorStore {
        self.errors
    }

    /// Renders one declaration.
    #[must_use]
    pub fn render(&self, declaration: &FieldDeclaration) -> RenderedField {
        render_field(declaration, self.errors, self.hangover, self.probe)
    }
}
