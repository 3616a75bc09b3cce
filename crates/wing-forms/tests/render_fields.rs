//! Tests for field rendering.

mod common;
use common::*;

use wing_forms::ValidationErrorStore;

#[test]
fn required_email_scenario() {
    let field = render(&decl("email*", "your-email", &["maxlength:40"]));
    let attrs = &field.attributes;
    assert_eq!(attrs.get("aria-required"), Some("true"));
    assert_eq!(attrs.get("aria-invalid"), Some("false"));
    assert_eq!(attrs.get("type"), Some("email"));
    assert_eq!(attrs.get("maxlength"), Some("40"));
    assert!(field.error_markup.is_empty());
}

#[test]
fn conflicting_lengths_absent_from_attributes() {
    for (min, max) in [(50, 10), (2, 1), (100, 0)] {
        let minlength = format!("minlength:{min}");
        let maxlength = format!("maxlength:{max}");
        let field = render(&decl("url", "site", &[&minlength, &maxlength]));
        let attrs = &field.attributes;
        assert!(!attrs.contains("minlength"), "min {min} max {max}");
        assert!(!attrs.contains("maxlength"), "min {min} max {max}");
    }
}

#[test]
fn rendering_is_idempotent() {
    let options = ["class:wide", "id:phone", "minlength:7"];
    let declaration = decl("tel*", "phone", &options).value("555");
    let mut errors = ValidationErrorStore::new("wfp-f2-o1");
    errors.insert("phone", "Please enter a telephone number.");

    let first = render_with(&declaration, &errors, &[("phone", "abc")]);
    let second = render_with(&declaration, &errors, &[("phone", "abc")]);
    assert_eq!(first, second);
    assert_eq!(first.to_html(), second.to_html());
}

#[test]
fn hangover_overrides_default() {
    let declaration = decl("text", "your-name", &["default:Anonymous"]).value("Guest");
    let errors = ValidationErrorStore::new("f");
    let field = render_with(&declaration, &errors, &[("your-name", "Ada Lovelace")]);
    assert_eq!(field.attributes.get("value"), Some("Ada Lovelace"));
    assert!(field.input_html().contains(r#"value="Ada Lovelace""#));
}

#[test]
fn hangover_for_other_field_is_ignored() {
    let declaration = decl("text", "your-name", &[]).value("Guest");
    let errors = ValidationErrorStore::new("f");
    let field = render_with(&declaration, &errors, &[("your-email", "a@b.c")]);
    assert_eq!(field.attributes.get("value"), Some("Guest"));
}

#[test]
fn empty_name_renders_nothing() {
    let field = render(&decl("text*", "", &["maxlength:10"]));
    assert!(field.attributes.is_empty());
    assert!(field.error_markup.is_empty());
    assert!(field.to_html().is_empty());
}

#[test]
fn error_state_is_reflected() {
    let mut errors = ValidationErrorStore::new("wfp-f9-o2");
    errors.insert("your-email", "Please enter an email address.");
    let field = render_with(&decl("email*", "your-email", &[]), &errors, &[]);

    assert_eq!(field.attributes.get("aria-invalid"), Some("true"));
    assert_eq!(
        field.attributes.get("aria-describedby"),
        Some("wfp-f9-o2-ve-your-email")
    );
    let html = field.to_html();
    assert!(html.contains("wfp-not-valid"));
    assert!(html.contains("Please enter an email address."));
}

#[test]
fn values_are_escaped() {
    let declaration = decl("text", "q", &[]).value(r#""><script>alert(1)</script>"#);
    let html = render(&declaration).input_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&quot;&gt;&lt;script&gt;"));
}
