//! Reshaping scenarios at the provider boundary.

use pretty_assertions::assert_eq;
use remold::prelude::*;
use serde_json::json;

fn user_schema() -> Model {
    Model::anonymous(definition! {
        "name" => field(string()),
        "age" => field(optional(number())),
    })
}

#[test]
fn optional_field_is_omitted_when_absent() {
    let reshaped = user_schema().apply(&json!({"name": "Al"})).unwrap();
    assert_eq!(Value::Object(reshaped), json!({"name": "Al"}));
}

#[test]
fn missing_required_field_reports_its_source_key() {
    let error = user_schema().apply(&json!({"age": 30})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Expected an object with attribute 'name', that is a string.",
    );
}

#[test]
fn snake_case_field_reads_the_derived_source_key() {
    let schema = Model::anonymous(definition! {
        "fullName" => snake_case_field(string()),
    });

    let reshaped = schema.apply(&json!({"full_name": "Al"})).unwrap();
    assert_eq!(Value::Object(reshaped), json!({"fullName": "Al"}));

    let error = schema.apply(&json!({"fullName": "Al"})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Expected an object with attribute 'full_name', that is a string.",
    );
}

#[test]
fn flattened_field_merges_source_keys_under_one_result_key() {
    let schema = Model::anonymous(definition! {
        "budget" => flattened_field(Model::anonymous(definition! {
            "min" => named_field("budget_min", number()),
            "max" => named_field("budget_max", number()),
        })),
    });

    let reshaped = schema
        .apply(&json!({"budget_min": 1, "budget_max": 5}))
        .unwrap();
    assert_eq!(
        Value::Object(reshaped),
        json!({"budget": {"min": 1, "max": 5}}),
    );
}

#[test]
fn named_model_scopes_the_failure_sentence() {
    let schema = Model::named("User", definition! {
        "age" => field(number()),
    });
    let error = schema.apply(&json!({"age": "x"})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "User expected an object with attribute 'age', that is a number.",
    );
}

#[test]
fn identity_schema_round_trips_exact_input() {
    let schema = Model::anonymous(definition! {
        "id" => field(number()),
        "label" => field(string()),
        "active" => field(boolean()),
    });
    let input = json!({"id": 7, "label": "a", "active": true});
    let reshaped = schema.apply(&input).unwrap();
    assert_eq!(Value::Object(reshaped), input);
}

#[test]
fn result_contains_no_extraneous_keys() {
    let reshaped = user_schema()
        .apply(&json!({"name": "Al", "age": 30, "admin": true, "note": null}))
        .unwrap();
    assert_eq!(Value::Object(reshaped), json!({"name": "Al", "age": 30}));
}

#[test]
fn nullable_null_survives_into_the_result() {
    let schema = Model::anonymous(definition! {
        "note" => field(nullable(string())),
    });
    let reshaped = schema.apply(&json!({"note": null})).unwrap();
    assert_eq!(Value::Object(reshaped), json!({"note": null}));
}

#[test]
fn blankable_null_is_omitted_from_the_result() {
    let schema = Model::anonymous(definition! {
        "note" => field(blankable(string())),
    });
    let reshaped = schema.apply(&json!({"note": null})).unwrap();
    assert_eq!(Value::Object(reshaped), json!({}));
}

#[test]
fn typed_decode_materializes_application_structs() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct User {
        name: String,
        age: Option<i64>,
    }

    let user: User = user_schema().decode(&json!({"name": "Al", "age": 30})).unwrap();
    assert_eq!(
        user,
        User {
            name: "Al".to_string(),
            age: Some(30),
        },
    );
}
