//! Error taxonomy end-to-end: shape failures compose, defects pass through.

use remold::prelude::*;
use serde_json::json;

fn broken_leaf() -> impl Validate {
    from_fn(|_| {
        Err(ValidationError::defect(anyhow::anyhow!(
            "leaf read past end of buffer"
        )))
    })
}

#[test]
fn failure_sentence_composes_through_the_whole_stack() {
    let schema = Model::named("Listing", definition! {
        "budget" => flattened_field(Model::anonymous(definition! {
            "min" => named_field("budget_min", number()),
            "max" => named_field("budget_max", number()),
        })),
    });

    let error = schema
        .apply(&json!({"budget_min": 1, "budget_max": "high"}))
        .unwrap_err();
    assert!(error.is_invalid());
    assert_eq!(
        error.to_string(),
        "Listing expected an object with attribute 'budget_max', that is a number.",
    );
}

#[test]
fn callers_can_distinguish_rejection_from_defect() {
    let schema = Model::named("User", definition! {
        "name" => field(string()),
    });

    let rejection = schema.apply(&json!({})).unwrap_err();
    assert!(rejection.is_invalid());
    assert!(rejection.assertion().is_some());

    let defect = Model::named("User", definition! {
        "name" => field(broken_leaf()),
    })
    .apply(&json!({"name": "Al"}))
    .unwrap_err();
    assert!(defect.is_defect());
    assert!(defect.assertion().is_none());
}

#[test]
fn defect_survives_every_wrapping_layer_untouched() {
    // Bury the defect under optional + array + field + named model; the
    // message must come out exactly as the leaf raised it.
    let schema = Model::named("Outer", definition! {
        "items" => field(optional(array_of(broken_leaf()))),
    });

    let error = schema.apply(&json!({"items": [1]})).unwrap_err();
    assert!(error.is_defect());
    assert_eq!(error.to_string(), "leaf read past end of buffer");
}

#[test]
fn union_does_not_swallow_defects_as_branch_failures() {
    let schema = Model::anonymous(definition! {
        "id" => field(union(broken_leaf(), number())),
    });

    // The right branch would accept, but the left defect must win.
    let error = schema.apply(&json!({"id": 1})).unwrap_err();
    assert!(error.is_defect());
}

#[test]
fn anonymous_nested_model_failure_reads_like_a_parent_failure() {
    let nested = Model::anonymous(definition! {
        "city" => field(string()),
    });
    let schema = Model::anonymous(definition! {
        "address" => field(nested),
    });

    let error = schema.apply(&json!({"address": {}})).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Expected an object with attribute 'address', that is an object with \
         attribute 'city', that is a string.",
    );
}
