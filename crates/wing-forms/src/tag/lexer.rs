//! Form source tokenizer.
//!
//! Splits form source into literal text and bracket tags. A tag is
//! `[type attrs]` where `type` is made of `[0-9a-zA-Z_*-]`; `[[type attrs]]`
//! escapes a tag so it is emitted literally. Doubled brackets around anything
//! else, and anything that does not close properly, stay text.

use super::Span;

/// The kind of a form source token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Literal text between tags.
    Text(String),
    /// An escaped tag; carries the single-bracket text to emit.
    Escaped(String),
    /// A bracket tag with its type name and the raw attribute text.
    Tag {
        /// The type name, including any trailing `*`.
        type_name: String,
        /// Everything between the type name and the closing bracket.
        body: String,
    },
}

/// A token with its location in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The source span.
    pub span: Span,
}

/// A lexer that tokenizes form source.
pub struct Lexer<'a> {
    /// The input source.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            span: Span::new(self.start, self.pos),
        }
    }

    /// Consumes at least one character, then everything up to the next `[`.
    fn scan_text(&mut self) -> Token {
        self.advance();
        while self.peek().is_some_and(|c| c != '[') {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        self.make_token(TokenKind::Text(text.to_string()))
    }

    /// Scans `[[type body]]`. Returns `None` unless the doubled brackets wrap
    /// a well-formed tag.
    fn scan_escaped(&mut self) -> Option<Token> {
        let input = self.input;
        let inner = &input[self.pos + 1..];
        let (type_len, body_len) = tag_extent(inner)?;
        let tag_len = type_len + body_len + 2;
        if !inner[tag_len..].starts_with(']') {
            return None;
        }

        let text = inner[..tag_len].to_string();
        self.pos += tag_len + 2;
        Some(self.make_token(TokenKind::Escaped(text)))
    }

    /// Scans `[type body]`. Returns `None` when the bracket does not open a tag.
    fn scan_tag(&mut self) -> Option<Token> {
        let input = self.input;
        let rest = &input[self.pos..];
        let (type_len, body_len) = tag_extent(rest)?;
        let body_start = 1 + type_len;

        let type_name = rest[1..body_start].to_string();
        let body = rest[body_start..body_start + body_len].to_string();
        self.pos += type_len + body_len + 2;
        Some(self.make_token(TokenKind::Tag { type_name, body }))
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.start = self.pos;
        if self.peek()? != '[' {
            return Some(self.scan_text());
        }

        let token = if self.peek_next() == Some('[') {
            self.scan_escaped()
        } else {
            self.scan_tag()
        };
        Some(token.unwrap_or_else(|| self.scan_text()))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn is_type_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '*')
}

/// Measures a `[type body]` tag at the start of `source`, returning the byte
/// lengths of the type name and of the body.
fn tag_extent(source: &str) -> Option<(usize, usize)> {
    let rest = source.strip_prefix('[')?;
    let type_len = rest.find(|c: char| !is_type_char(c)).unwrap_or(rest.len());
    if type_len == 0 {
        return None;
    }

    let after_type = &rest[type_len..];
    let body_len = after_type.find(']')?;
    let body = &after_type[..body_len];
    if body.contains('[') || !(body.is_empty() || body.starts_with(char::is_whitespace)) {
        return None;
    }
    Some((type_len, body_len))
}
