//! Combinator behavior through whole schemas.

use pretty_assertions::assert_eq;
use remold::prelude::*;
use serde_json::json;

#[test]
fn union_is_left_biased_on_overlapping_shapes() {
    // Both sides accept any object; the left one's reshaping wins.
    let left = Model::anonymous(definition! {
        "id" => field(optional(number())),
    });
    let right = Model::anonymous(definition! {
        "name" => field(optional(string())),
    });
    let either = union(left, right);

    let reshaped = either.check(&json!({"id": 1, "name": "x"})).unwrap();
    assert_eq!(reshaped, Some(json!({"id": 1})));
}

#[test]
fn union_reports_both_alternatives() {
    let schema = Model::anonymous(definition! {
        "id" => field(union(number(), string())),
    });
    let error = schema.apply(&json!({"id": true})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Expected an object with attribute 'id', that is a number; or a string.",
    );
}

#[test]
fn array_failure_names_the_first_bad_index_only() {
    let schema = Model::anonymous(definition! {
        "tags" => field(array_of(string())),
    });
    // Index 1 and 2 are both invalid; only index 1 is reported.
    let error = schema.apply(&json!({"tags": ["ok", 1, 2]})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Expected an object with attribute 'tags', that is an array with value at [1], \
         that is a string.",
    );
}

#[test]
fn empty_array_reshapes_to_empty_array() {
    let schema = Model::anonymous(definition! {
        "tags" => field(array_of(string())),
    });
    let reshaped = schema.apply(&json!({"tags": []})).unwrap();
    assert_eq!(Value::Object(reshaped), json!({"tags": []}));
}

#[test]
fn intersect_composes_two_reshaping_models() {
    let identity = Model::anonymous(definition! {
        "id" => named_field("user_id", number()),
    });
    let profile = Model::anonymous(definition! {
        "fullName" => snake_case_field(string()),
    });

    let schema = intersect(identity, profile);
    let reshaped = schema
        .check(&json!({"user_id": 9, "full_name": "Al"}))
        .unwrap();
    assert_eq!(reshaped, Some(json!({"id": 9, "fullName": "Al"})));
}

#[test]
fn enum_membership_is_checked_after_stringness() {
    let schema = Model::anonymous(definition! {
        "status" => field(enum_of(["open", "closed"])),
    });

    assert!(schema.apply(&json!({"status": "open"})).is_ok());

    let error = schema.apply(&json!({"status": "archived"})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Expected an object with attribute 'status', that is a value in the enum.",
    );

    let error = schema.apply(&json!({"status": 3})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Expected an object with attribute 'status', that is a string.",
    );
}

// ----------------------------------------------------------------------------
// Recursive schemas
// ----------------------------------------------------------------------------

fn category_schema() -> Model {
    Model::named("Category", definition! {
        "name" => field(string()),
        "children" => field(optional(array_of(lazy(category_schema)))),
    })
}

#[test]
fn self_referential_schema_validates_nested_levels() {
    let input = json!({
        "name": "root",
        "children": [
            {"name": "a"},
            {"name": "b", "children": [{"name": "b1"}]},
        ],
    });
    let reshaped = category_schema().apply(&input).unwrap();
    assert_eq!(Value::Object(reshaped), input);
}

#[test]
fn self_referential_schema_reports_deep_failures() {
    let input = json!({
        "name": "root",
        "children": [{"name": 1}],
    });
    let error = category_schema().apply(&input).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Category expected an object with attribute 'children', that is undefined or \
         an array with value at [0], that is Category, that is an object with \
         attribute 'name', that is a string.",
    );
}

fn person_schema() -> Model {
    Model::named("Person", definition! {
        "name" => field(string()),
        "employer" => field(optional(lazy(company_schema))),
    })
}

fn company_schema() -> Model {
    Model::named("Company", definition! {
        "title" => field(string()),
        "owner" => field(optional(lazy(person_schema))),
    })
}

#[test]
fn mutually_recursive_schemas_validate() {
    let input = json!({
        "name": "Al",
        "employer": {
            "title": "Remold Inc",
            "owner": {"name": "Sam"},
        },
    });
    let reshaped = person_schema().apply(&input).unwrap();
    assert_eq!(Value::Object(reshaped), input);
}
