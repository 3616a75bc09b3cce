//! Bracket-tag syntax for form definitions.
//!
//! A form definition is free text with embedded field tags:
//!
//! ```text
//! <label>Your email [email* your-email maxlength:40 placeholder "you@example.com"]</label>
//! ```
//!
//! The first token after the type is the field name, followed by option
//! tokens and then quoted values.

mod declaration;
mod lexer;
mod span;

pub use declaration::{BaseType, FieldDeclaration};
pub use lexer::{Lexer, Token, TokenKind};
pub use span::Span;
