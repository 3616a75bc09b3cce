//! Registry of the field types a form definition may declare.

use std::collections::BTreeMap;

/// What a registered field type accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCapabilities {
    /// The first token after the type is the field name.
    pub name_attr: bool,
    /// The type carries the required marker.
    pub required: bool,
    /// `minlength` / `maxlength` options are meaningful.
    pub length_limits: bool,
    /// The `size` option is meaningful.
    pub size: bool,
    /// The `pattern` option is meaningful.
    pub pattern: bool,
}

impl FieldCapabilities {
    /// Capabilities of a single-line text-like input.
    pub const TEXT_INPUT: Self = Self {
        name_attr: true,
        required: false,
        length_limits: true,
        size: true,
        pattern: false,
    };

    /// Returns a copy with the required marker set.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Maps tag type names (e.g. `"email*"`) to their capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTypeRegistry {
    types: BTreeMap<String, FieldCapabilities>,
}

impl FieldTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with `text`, `email`, `url`, `tel` and their required
    /// variants.
    #[must_use]
    pub fn text_types() -> Self {
        let mut registry = Self::new();
        for base in ["text", "email", "url", "tel"] {
            registry.register(base, FieldCapabilities::TEXT_INPUT);
            registry.register(format!("{base}*"), FieldCapabilities::TEXT_INPUT.required());
        }
        registry
    }

    /// Registers a type, replacing any earlier entry.
    pub fn register(&mut self, type_name: impl Into<String>, capabilities: FieldCapabilities) {
        self.types.insert(type_name.into(), capabilities);
    }

    /// The capabilities of a type.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<FieldCapabilities> {
        self.types.get(type_name).copied()
    }

    /// Whether a type is registered.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// The registered type names, sorted.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}
