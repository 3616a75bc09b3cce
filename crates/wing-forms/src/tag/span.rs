//! Source location tracking for tags.

use std::fmt;

/// A byte range in the form source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes, zero if inverted.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the slice of `source` covered by this span, or `None` if the
    /// span is out of range or not on character boundaries.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 10);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn test_span_slice() {
        let source = "Name [text your-name]";
        let span = Span::new(5, 21);
        assert_eq!(span.slice(source), Some("[text your-name]"));
    }

    #[test]
    fn test_inverted_span_is_empty() {
        let span = Span::new(10, 4);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.slice("0123456789ab"), None);
    }

    #[test]
    fn test_slice_out_of_range() {
        assert_eq!(Span::new(3, 40).slice("short"), None);
        assert_eq!(Span::new(0, 1).slice("\u{e9}t\u{e9}"), None);
        assert_eq!(Span::new(0, 2).slice("\u{e9}t\u{e9}"), Some("\u{e9}"));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(2, 7).to_string(), "2..7");
    }
}
