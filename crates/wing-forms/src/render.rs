//! Rendering of text-like field declarations to `<input>` elements.

use ironhtml::html;

use crate::attrs::AttributeMap;
use crate::error_store::ValidationErrorStore;
use crate::options::join_classes;
use crate::providers::{CapabilityProbe, HangoverProvider};
use crate::tag::FieldDeclaration;

/// The attributes and error markup of one rendered field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedField {
    /// Field name, carried for the wrapper's `data-name`.
    pub name: String,
    /// Input attributes in insertion order.
    pub attributes: AttributeMap,
    /// Inline error tip, or empty.
    pub error_markup: String,
}

impl RenderedField {
    /// Whether nothing was rendered (the declaration had no name).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The `<input>` element alone.
    #[must_use]
    pub fn input_html(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("<input {} />", self.attributes.to_html())
    }

    /// The input wrapped with its error tip:
    /// `<span class="wfp-form-control-wrap" data-name="..."><input ... />tip</span>`.
    #[must_use]
    pub fn to_html(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        html! { span.class("wfp-form-control-wrap") }
            .attr("data-name", &self.name)
            .raw(self.input_html())
            .raw(&self.error_markup)
            .render()
    }
}

/// Base classes of a form control: the shared control class, the module
/// class, the type class and the required marker.
#[must_use]
pub fn form_control_class(declaration: &FieldDeclaration, module_class: &str) -> String {
    let type_class = format!("wfp-{}", declaration.base_type());
    let required = declaration
        .is_required()
        .then_some("wfp-validates-as-required");

    join_classes(
        ["wfp-form-control"]
            .into_iter()
            .chain(module_class.split_whitespace())
            .chain([type_class.as_str()])
            .chain(required),
    )
}

/// Renders one declaration.
///
/// A declaration without a name renders as an empty [`RenderedField`].
/// The output depends only on the arguments, so repeated calls with the
/// same inputs are byte-identical.
pub fn render_field(
    declaration: &FieldDeclaration,
    errors: &ValidationErrorStore,
    hangover: &dyn HangoverProvider,
    probe: &dyn CapabilityProbe,
) -> RenderedField {
    let name = declaration.name();
    if name.is_empty() {
        return RenderedField::default();
    }

    let base_type = declaration.base_type();
    let resolved = declaration.resolve();
    let reference = errors.reference(name);

    let mut class = form_control_class(declaration, "wfp-text");
    if base_type.has_format() {
        class.push_str(" wfp-validates-as-");
        class.push_str(base_type.as_str());
    }
    if reference.is_some() {
        class.push_str(" wfp-not-valid");
    }

    let mut attrs = AttributeMap::new();
    attrs.set("size", resolved.size_or_default().to_string());
    attrs.set_opt("maxlength", resolved.maxlength);
    attrs.set_opt("minlength", resolved.minlength);
    attrs.set("class", resolved.class_option(&class));
    attrs.set_opt("id", resolved.id.as_deref());
    attrs.set_opt("tabindex", resolved.tabindex);
    attrs.set_opt("autocomplete", resolved.autocomplete.as_deref());

    if resolved.readonly {
        attrs.set("readonly", "readonly");
    }

    if declaration.is_required() {
        attrs.set("aria-required", "true");
    }

    match reference {
        Some(reference) => {
            attrs.set("aria-invalid", "true");
            attrs.set("aria-describedby", reference);
        }
        None => attrs.set("aria-invalid", "false"),
    }

    let mut value = declaration.values().first().cloned().unwrap_or_default();
    if resolved.placeholder {
        attrs.set("placeholder", value);
        value = String::new();
    }
    if let Some(default) = resolved.default {
        value = default;
    }
    if let Some(previous) = hangover.hangover(name) {
        value = previous;
    }
    attrs.set("value", value);

    let input_type = if probe.supports_typed_inputs() {
        base_type.as_str()
    } else {
        "text"
    };
    attrs.set("type", input_type);
    attrs.set("name", name);

    RenderedField {
        name: name.to_string(),
        attributes: attrs,
        error_markup: errors.markup(name),
    }
}
