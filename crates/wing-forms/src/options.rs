//! Tag option parsing and resolution.
//!
//! Raw option tokens come in three shapes:
//! - `key:value`, e.g. `maxlength:40`, `class:wide`, `default:hello`
//! - `size/maxlength` shorthand, e.g. `40/100` or `/100`
//! - bare flags, e.g. `readonly`, `placeholder`
//!
//! [`TagOptions`] parses the tokens once; [`ResolvedOptions`] is the typed
//! record the renderer and the schema builder consume.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::tag::FieldDeclaration;

static DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]*)/([0-9]*)$").expect("valid dimensions pattern"));
static UNSIGNED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid unsigned pattern"));
static SIGNED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("valid signed pattern"));
static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-0-9a-zA-Z_]+$").expect("valid ident pattern"));
static AUTOCOMPLETE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-0-9a-zA-Z]+$").expect("valid autocomplete pattern"));

/// A single parsed option token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOption {
    /// `key:value`.
    Keyed {
        /// The part before the first colon.
        key: String,
        /// Everything after the first colon.
        value: String,
    },
    /// `size/maxlength` shorthand; either side may be empty.
    Dimensions {
        /// The size part.
        size: Option<String>,
        /// The maxlength part.
        maxlength: Option<String>,
    },
    /// A bare word.
    Flag(String),
}

impl TagOption {
    /// Parses one raw token.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if let Some(caps) = DIMENSIONS.captures(token) {
            let part = |i: usize| {
                caps.get(i)
                    .map(|m| m.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };
            return Self::Dimensions {
                size: part(1),
                maxlength: part(2),
            };
        }

        match token.split_once(':') {
            Some((key, value)) => Self::Keyed {
                key: key.to_string(),
                value: value.to_string(),
            },
            None => Self::Flag(token.to_string()),
        }
    }
}

/// The parsed option list of one field declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    options: Vec<TagOption>,
}

impl TagOptions {
    /// Parses raw option tokens, keeping declaration order.
    #[must_use]
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self {
            options: tokens
                .iter()
                .map(|t| TagOption::parse(t.as_ref()))
                .collect(),
        }
    }

    /// Returns the parsed options.
    #[must_use]
    pub fn as_slice(&self) -> &[TagOption] {
        &self.options
    }

    /// Whether a bare flag is present.
    #[must_use]
    pub fn has_option(&self, flag: &str) -> bool {
        self.options
            .iter()
            .any(|o| matches!(o, TagOption::Flag(f) if f == flag))
    }

    /// All values of `key:value` options whose value matches `pattern`.
    fn values<'a>(&'a self, key: &'a str, pattern: &'a Regex) -> impl Iterator<Item = &'a str> {
        self.options.iter().filter_map(move |o| match o {
            TagOption::Keyed { key: k, value } if k == key && pattern.is_match(value) => {
                Some(value.as_str())
            }
            _ => None,
        })
    }

    fn first_unsigned(&self, key: &str) -> Option<u32> {
        self.values(key, &UNSIGNED).next().and_then(coerce_unsigned)
    }

    pub(crate) fn size_option(&self) -> Option<u32> {
        self.first_unsigned("size").or_else(|| {
            self.options.iter().find_map(|o| match o {
                TagOption::Dimensions {
                    size: Some(size), ..
                } => coerce_unsigned(size),
                _ => None,
            })
        })
    }

    /// The first `size:N` option, else the size part of a `N/M` option,
    /// else `default`.
    #[must_use]
    pub fn get_size_option(&self, default: u32) -> u32 {
        self.size_option().unwrap_or(default)
    }

    /// The first `maxlength:N` option, else the second part of a `N/M` option.
    #[must_use]
    pub fn get_maxlength_option(&self) -> Option<u32> {
        self.first_unsigned("maxlength").or_else(|| {
            self.options.iter().find_map(|o| match o {
                TagOption::Dimensions {
                    maxlength: Some(max),
                    ..
                } => coerce_unsigned(max),
                _ => None,
            })
        })
    }

    /// The first `minlength:N` option.
    #[must_use]
    pub fn get_minlength_option(&self) -> Option<u32> {
        self.first_unsigned("minlength")
    }

    /// `base` followed by every `class:` option, deduplicated.
    #[must_use]
    pub fn get_class_option(&self, base: &str) -> String {
        join_classes(base.split_whitespace().chain(self.values("class", &IDENT)))
    }

    /// The first `id:` option.
    #[must_use]
    pub fn get_id_option(&self) -> Option<String> {
        self.values("id", &IDENT).next().map(str::to_string)
    }

    /// The first `tabindex:` option.
    #[must_use]
    pub fn get_tabindex_option(&self) -> Option<i32> {
        self.values("tabindex", &SIGNED)
            .next()
            .and_then(|v| v.parse().ok())
    }

    /// The first `autocomplete:` option.
    #[must_use]
    pub fn get_autocomplete_option(&self) -> Option<String> {
        self.values("autocomplete", &AUTOCOMPLETE)
            .next()
            .map(str::to_string)
    }

    /// The first non-empty `default:` option, else `fallback`.
    #[must_use]
    pub fn get_default_option(&self, fallback: &str) -> String {
        self.options
            .iter()
            .find_map(|o| match o {
                TagOption::Keyed { key, value } if key == "default" && !value.is_empty() => {
                    Some(value.clone())
                }
                _ => None,
            })
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Typed options of one field, resolved once from its declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    /// Declared input size, if any.
    pub size: Option<u32>,
    /// Maximum length. Absent when it conflicts with `minlength`.
    pub maxlength: Option<u32>,
    /// Minimum length. Absent when it conflicts with `maxlength`.
    pub minlength: Option<u32>,
    /// User-declared classes, space-joined.
    pub class: String,
    /// `id` attribute.
    pub id: Option<String>,
    /// `tabindex` attribute.
    pub tabindex: Option<i32>,
    /// `autocomplete` attribute.
    pub autocomplete: Option<String>,
    /// Whether the input is read-only.
    pub readonly: bool,
    /// Whether the first value is shown as a placeholder.
    pub placeholder: bool,
    /// Declared default value.
    pub default: Option<String>,
}

impl ResolvedOptions {
    /// Input size used when none is declared.
    pub const DEFAULT_SIZE: u32 = 40;

    /// Resolves a declaration's options.
    ///
    /// A `maxlength` smaller than `minlength` cannot be satisfied; both are
    /// dropped rather than rejecting the field.
    #[must_use]
    pub fn resolve(declaration: &FieldDeclaration) -> Self {
        let options = declaration.tag_options();

        let mut maxlength = options.get_maxlength_option();
        let mut minlength = options.get_minlength_option();
        if let (Some(max), Some(min)) = (maxlength, minlength) {
            if max < min {
                debug!(
                    field = declaration.name(),
                    maxlength = max,
                    minlength = min,
                    "Dropping conflicting length constraints"
                );
                maxlength = None;
                minlength = None;
            }
        }

        let default = options.get_default_option("");

        Self {
            size: options.size_option(),
            maxlength,
            minlength,
            class: options.get_class_option(""),
            id: options.get_id_option(),
            tabindex: options.get_tabindex_option(),
            autocomplete: options.get_autocomplete_option(),
            readonly: options.has_option("readonly"),
            placeholder: options.has_option("placeholder") || options.has_option("watermark"),
            default: (!default.is_empty()).then_some(default),
        }
    }

    /// The declared size, or [`Self::DEFAULT_SIZE`].
    #[must_use]
    pub fn size_or_default(&self) -> u32 {
        self.size.unwrap_or(Self::DEFAULT_SIZE)
    }

    /// `base` classes followed by the user classes, deduplicated.
    #[must_use]
    pub fn class_option(&self, base: &str) -> String {
        join_classes(base.split_whitespace().chain(self.class.split_whitespace()))
    }

    /// Whether both lengths were declared but dropped as conflicting.
    #[must_use]
    pub fn has_conflicting_lengths(declaration: &FieldDeclaration) -> bool {
        let options = declaration.tag_options();
        matches!(
            (options.get_maxlength_option(), options.get_minlength_option()),
            (Some(max), Some(min)) if max < min
        )
    }
}

/// Coerces a digit string to `u32`; overflow yields `None`.
fn coerce_unsigned(value: &str) -> Option<u32> {
    value.parse().ok()
}

pub(crate) fn join_classes<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for token in tokens.filter(|t| !t.is_empty()) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen.join(" ")
}
