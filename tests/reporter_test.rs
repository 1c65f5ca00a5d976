//! Integration tests for default reporter behavior.

use debrief::{ErrorRecord, Report, Reporter};
use serde_json::json;

#[test]
fn test_default_message_for_enum_mismatch() {
    let reporter = Reporter::new();
    let report = Report::single(
        ErrorRecord::new("ENUM_MISMATCH")
            .with_param("invalid_value")
            .with_path("#/elements")
            .with_description("The elements"),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Invalid property \"invalid_value\"' on property elements (The elements)."
    );
}

#[test]
fn test_default_message_for_any_other_code() {
    let reporter = Reporter::new();
    let report = Report::single(
        ErrorRecord::new("INVALID_FORMAT")
            .with_path("#/letterA")
            .with_description("The letter A")
            .with_message("Object didn't pass validation for format ^a$: b"),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Object didn't pass validation for format ^a$: b' on property letterA (The letter A)."
    );
}

#[test]
fn test_nested_object_path() {
    let reporter = Reporter::new();
    let report = Report::single(
        ErrorRecord::new("INVALID_FORMAT")
            .with_path("#/parent/child/letterA")
            .with_description("The letter A")
            .with_message("Object didn't pass validation for format ^a$: b"),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Object didn't pass validation for format ^a$: b' on property parent.child.letterA (The letter A)."
    );
}

#[test]
fn test_array_element_path() {
    let reporter = Reporter::new();
    let report = Report::single(
        ErrorRecord::new("INVALID_TYPE")
            .with_path("#/items/0")
            .with_description("The item")
            .with_message("Expected type number but found type string"),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Expected type number but found type string' on property items[0] (The item)."
    );
}

#[test]
fn test_missing_path_removes_optional_section() {
    let reporter = Reporter::new();
    let report = Report::single(
        ErrorRecord::new("INVALID_TYPE")
            .with_description("The item")
            .with_message("Expected type number but found type string"),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Expected type number but found type string'."
    );
}

#[test]
fn test_missing_description_removes_optional_section() {
    let reporter = Reporter::new();
    let report = Report::single(
        ErrorRecord::new("INVALID_TYPE")
            .with_path("#/items/0")
            .with_message("Expected type number but found type string"),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Expected type number but found type string' on property items[0]."
    );
}

#[test]
fn test_non_string_path_degrades_without_panicking() {
    let reporter = Reporter::new();
    let report = Report::single(
        ErrorRecord::new("INVALID_TYPE")
            .with_raw_path(json!([]))
            .with_message("Expected type number but found type string"),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Expected type number but found type string'."
    );
}

#[test]
fn test_object_dependency_key_template() {
    let reporter = Reporter::new();
    let report = Report::single(
        ErrorRecord::new("OBJECT_DEPENDENCY_KEY")
            .with_param("email")
            .with_param("verify_email"),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Property email is mandatory if property verify_email is included'."
    );
}

#[test]
fn test_multiple_errors_joined_with_also() {
    let reporter = Reporter::new();
    let report = Report::new(vec![
        ErrorRecord::new("INVALID_TYPE")
            .with_path("#/items/0")
            .with_description("The item")
            .with_message("Expected type number but found type string"),
        ErrorRecord::new("INVALID_FORMAT")
            .with_path("#/letterA")
            .with_description("The letter A")
            .with_message("Object didn't pass validation for format ^a$: b"),
    ]);

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Expected type number but found type string' on property items[0] (The item). (also) An error occurred 'Object didn't pass validation for format ^a$: b' on property letterA (The letter A)."
    );
}

#[test]
fn test_duplicate_renderings_are_suppressed() {
    let reporter = Reporter::new();
    let duplicate = ErrorRecord::new("INVALID_TYPE")
        .with_path("#/items/0")
        .with_message("Expected type number but found type string");
    let report = Report::new(vec![
        duplicate.clone(),
        ErrorRecord::new("INVALID_FORMAT")
            .with_path("#/letterA")
            .with_message("Object didn't pass validation for format ^a$: b"),
        duplicate,
    ]);

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Expected type number but found type string' on property items[0]. (also) An error occurred 'Object didn't pass validation for format ^a$: b' on property letterA."
    );
}

#[test]
fn test_inner_errors_render_recursively_and_deduplicate() {
    let reporter = Reporter::new().with_template(
        "ANY_OF_MISSING",
        "{context} 'None of the valid schemas were met'{^path} on property {path} ({description}){$path}.{^inner} Inner errors: [ {inner} ].{$inner}",
    );

    let nested = ErrorRecord::new("INVALID_TYPE")
        .with_params(vec![json!("string"), json!("boolean")])
        .with_message("Expected type string but found type boolean")
        .with_path("#/given_name")
        .with_description("The user's user given name(s)");

    let report = Report::single(
        ErrorRecord::new("ANY_OF_MISSING")
            .with_message("Data does not match any schemas from 'anyOf'")
            .with_path("#/")
            .with_inner(vec![nested.clone(), nested]),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'None of the valid schemas were met'. Inner errors: [ An error occurred 'Expected type string but found type boolean' on property given_name (The user's user given name(s)). ]."
    );
}

#[test]
fn test_record_without_inner_drops_inner_section() {
    let reporter = Reporter::new().with_template(
        "ANY_OF_MISSING",
        "{context} '{message}'.{^inner} Inner errors: [ {inner} ].{$inner}",
    );

    let report = Report::single(
        ErrorRecord::new("ANY_OF_MISSING").with_message("Data does not match any schemas"),
    );

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Data does not match any schemas'."
    );
}

#[test]
fn test_numeric_param_renders_as_text() {
    let reporter =
        Reporter::new().with_template("ARRAY_LENGTH_SHORT", "{context} 'Expected at least {params[0]} items'.");

    let report = Report::single(ErrorRecord::new("ARRAY_LENGTH_SHORT").with_param(3));

    assert_eq!(
        reporter.extract_message(&report),
        "An error occurred 'Expected at least 3 items'."
    );
}
