//! Schema extension: value semantics, collision precedence, model reuse.

use pretty_assertions::assert_eq;
use remold::prelude::*;
use serde_json::json;

fn base_schema() -> Model {
    Model::named("Job", definition! {
        "title" => field(string()),
        "budget" => field(optional(number())),
    })
}

#[test]
fn extension_adds_fields() {
    let schema = base_schema().extend("TimedJob", definition! {
        "deadline" => field(date()),
    });

    assert!(
        schema
            .apply(&json!({"title": "x", "deadline": "2024-06-01"}))
            .is_ok()
    );
    let error = schema.apply(&json!({"title": "x"})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "TimedJob expected an object with attribute 'deadline', that is a date \
         string in YYYY-MM-DD format.",
    );
}

#[test]
fn extension_wins_key_collisions() {
    let schema = base_schema().extend("StrictJob", definition! {
        "budget" => field(number()),
    });

    // The base's optional budget became required.
    assert!(schema.apply(&json!({"title": "x"})).is_err());
    assert!(schema.apply(&json!({"title": "x", "budget": 1})).is_ok());
}

#[test]
fn base_behavior_is_unchanged_after_extension() {
    let base = base_schema();
    let _extended = base.extend("StrictJob", definition! {
        "budget" => field(number()),
    });

    // Budget is still optional on the base, and the base keeps its name.
    assert!(base.apply(&json!({"title": "x"})).is_ok());
    let error = base.apply(&json!({})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Job expected an object with attribute 'title', that is a string.",
    );
}

#[test]
fn extending_with_a_model_extracts_its_definition() {
    let mixin = Model::named("Audit", definition! {
        "createdAt" => snake_case_field(datetime()),
    });
    let by_model = base_schema().extend("AuditedJob", mixin.clone());
    let by_definition = base_schema().extend("AuditedJob", definition! {
        "createdAt" => snake_case_field(datetime()),
    });

    let input = json!({"title": "x", "created_at": "2024-01-15T09:30:00Z"});
    assert_eq!(
        by_model.apply(&input).unwrap(),
        by_definition.apply(&input).unwrap(),
    );
}

#[test]
fn extension_keys_evaluate_after_base_keys() {
    let schema = base_schema().extend("TaggedJob", definition! {
        "tag" => field(string()),
    });

    // Both "title" and "tag" are missing; the base-declared field wins.
    let error = schema.apply(&json!({})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "TaggedJob expected an object with attribute 'title', that is a string.",
    );
}
