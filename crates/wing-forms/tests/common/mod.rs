#![allow(dead_code)]

use std::collections::HashMap;

use wing_forms::{
    FieldDeclaration, FieldTypeRegistry, FormDefinition, Html5Support, MessageCatalog, NoHangover,
    RenderedField, ValidationErrorStore, ValidationSchema, render_field,
};

pub fn decl(type_name: &str, name: &str, options: &[&str]) -> FieldDeclaration {
    let mut declaration = FieldDeclaration::new(type_name, name)
        .unwrap_or_else(|e| panic!("Failed to declare [{type_name} {name}]: {e}"));
    for option in options {
        declaration = declaration.option(*option);
    }
    declaration
}

pub fn parse_form(source: &str) -> FormDefinition {
    FormDefinition::parse(source, &FieldTypeRegistry::text_types())
        .unwrap_or_else(|e| panic!("Failed to parse: {source}\nError: {e:?}"))
}

pub fn render(declaration: &FieldDeclaration) -> RenderedField {
    render_field(
        declaration,
        &ValidationErrorStore::new("wfp-f1-o1"),
        &NoHangover,
        &Html5Support(true),
    )
}

pub fn render_with(
    declaration: &FieldDeclaration,
    errors: &ValidationErrorStore,
    hangover: &[(&str, &str)],
) -> RenderedField {
    let previous: HashMap<String, String> = hangover
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    render_field(declaration, errors, &previous, &Html5Support(true))
}

pub fn schema(declarations: &[FieldDeclaration]) -> ValidationSchema {
    wing_forms::build_validation_schema(declarations, &MessageCatalog::new())
}

pub fn rule_summary(schema: &ValidationSchema) -> Vec<(String, String, Option<u32>)> {
    schema
        .iter()
        .map(|r| rule(r.name(), r.field(), r.threshold()))
        .collect()
}

pub fn rule(name: &str, field: &str, threshold: Option<u32>) -> (String, String, Option<u32>) {
    (name.to_string(), field.to_string(), threshold)
}
