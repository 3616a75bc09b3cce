//! Tests for parsing and rendering whole form definitions.

mod common;
use common::*;

use wing_forms::{
    AuthoringWarning, FieldDeclaration, FieldRenderer, FieldTypeRegistry, FormDefinition,
    FormError, Html5Support, MessageCatalog, NoHangover, Segment, TagError, ValidationErrorStore,
};

const CONTACT_FORM: &str = r#"<label> Your name
    [text* your-name autocomplete:name] </label>

<label> Your email
    [email* your-email maxlength:40 placeholder "you@example.com"] </label>

<label> Website
    [url site minlength:50 maxlength:10] </label>

[submit "Send"]"#;

#[test]
fn parses_declarations_in_order() {
    let form = parse_form(CONTACT_FORM);
    let fields: Vec<(&str, &str)> = form.fields().map(|f| (f.type_name(), f.name())).collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], ("text*", "your-name"));
    assert_eq!(fields[1], ("email*", "your-email"));
    assert_eq!(fields[2], ("url", "site"));
    assert_eq!(
        form.field("your-email").unwrap().values(),
        ["you@example.com"]
    );
}

#[test]
fn schema_for_contact_form() {
    let schema = parse_form(CONTACT_FORM).validation_schema(&MessageCatalog::new());
    assert_eq!(
        rule_summary(&schema),
        vec![
            rule("required", "your-name", None),
            rule("required", "your-email", None),
            rule("email", "your-email", None),
            rule("maxlength", "your-email", Some(40)),
            rule("url", "site", None),
        ]
    );
}

#[test]
fn renders_whole_form() {
    let form = parse_form(CONTACT_FORM);
    let mut errors = ValidationErrorStore::new("wfp-f1-o1");
    errors.insert("your-name", "Please fill out this field.");
    let renderer = FieldRenderer::new(&errors, &NoHangover, &Html5Support(true));
    let html = form.render(&renderer);

    assert!(html.starts_with("<label> Your name"));
    assert!(html.contains(r#"placeholder="you@example.com""#));
    assert!(html.contains(r#"autocomplete="name""#));
    let reference = r#"aria-describedby="wfp-f1-o1-ve-your-name""#;
    assert!(html.contains(reference));
    assert!(html.contains("Please fill out this field."));
    assert!(html.ends_with(r#"[submit "Send"]"#));
    assert_eq!(html.matches("wfp-form-control-wrap").count(), 3);
}

#[test]
fn warns_about_conflicting_lengths() {
    let form = parse_form(CONTACT_FORM);
    assert_eq!(
        form.authoring_warnings(),
        [AuthoringWarning::ConflictingLengths {
            field: "site".to_string()
        }]
    );
}

#[test]
fn escaped_tags_are_literal() {
    let form = parse_form("Type [[email* your-email]] into the editor.");
    assert_eq!(form.fields().count(), 0);
    let text = Segment::Text("Type [email* your-email] into the editor.".to_string());
    assert_eq!(form.segments(), [text]);
}

#[test]
fn escape_does_not_swallow_later_fields() {
    let form = parse_form("see [[x] and [text* your-name]]");
    let names: Vec<&str> = form.fields().map(FieldDeclaration::name).collect();
    assert_eq!(names, ["your-name"]);

    let schema = form.validation_schema(&MessageCatalog::new());
    assert_eq!(
        rule_summary(&schema),
        vec![rule("required", "your-name", None)]
    );
}

#[test]
fn doubled_brackets_around_markup_are_kept() {
    let form = parse_form("matrix [[1,2]]");
    let text = Segment::Text("matrix [[1,2]]".to_string());
    assert_eq!(form.segments(), [text]);
}

#[test]
fn invalid_name_is_rejected() {
    let registry = FieldTypeRegistry::text_types();
    let err = FormDefinition::parse("[text your/name]", &registry).unwrap_err();
    assert!(matches!(err, FormError::Tag(TagError::InvalidName { .. })));
}

#[test]
fn tag_error_reports_span() {
    let source = "abc [email x 'open]";
    let err = FormDefinition::parse(source, &FieldTypeRegistry::text_types()).unwrap_err();
    match err {
        FormError::Tag(tag) => {
            assert_eq!(tag.span().slice(source), Some("[email x 'open]"));
        }
        other => panic!("Expected tag error, got {other:?}"),
    }
}
