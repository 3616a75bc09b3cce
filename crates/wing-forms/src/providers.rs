//! Request-scoped collaborators consulted while rendering.

use std::collections::HashMap;

/// Supplies values submitted in a previous, failed attempt.
pub trait HangoverProvider {
    /// The previously submitted value of a field, if any.
    fn hangover(&self, name: &str) -> Option<String>;
}

/// A provider with no previous submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHangover;

impl HangoverProvider for NoHangover {
    fn hangover(&self, _name: &str) -> Option<String> {
        None
    }
}

impl HangoverProvider for HashMap<String, String> {
    fn hangover(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Reports what the rendering target supports.
pub trait CapabilityProbe {
    /// Whether `type="email"`, `"url"` and `"tel"` inputs are understood.
    fn supports_typed_inputs(&self) -> bool;
}

/// A fixed answer for [`CapabilityProbe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Html5Support(pub bool);

impl Default for Html5Support {
    fn default() -> Self {
        Self(true)
    }
}

impl CapabilityProbe for Html5Support {
    fn supports_typed_inputs(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hangover() {
        assert_eq!(NoHangover.hangover("anything"), None);
    }

    #[test]
    fn test_map_hangover() {
        let mut values = HashMap::new();
        values.insert("your-name".to_string(), "Ada".to_string());
        assert_eq!(values.hangover("your-name"), Some("Ada".to_string()));
        assert_eq!(values.hangover("other"), None);
    }

    #[test]
    fn test_html5_support_default() {
        assert!(Html5Support::default().supports_typed_inputs());
        assert!(!Html5Support(false).supports_typed_inputs());
    }
}
