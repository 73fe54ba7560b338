//! Reshaping a provider payload at an API boundary.
//!
//! Run with: `cargo run --example api_boundary`

use remold::prelude::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(rename = "fullName")]
    full_name: String,
    budget: Budget,
    status: String,
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Budget {
    min: i64,
    max: i64,
}

fn listing_schema() -> Model {
    Model::named("Listing", definition! {
        // provider sends snake_case, the application wants camelCase
        "fullName" => snake_case_field(string()),
        // two flat provider keys folded into one nested object
        "budget" => flattened_field(Model::anonymous(definition! {
            "min" => named_field("budget_min", number()),
            "max" => named_field("budget_max", number()),
        })),
        "status" => field(enum_of(["open", "closed"])),
        "tags" => field(array_of(string())),
        "note" => field(blankable(string())),
    })
}

fn main() {
    let payload = json!({
        "full_name": "Alice Cooper",
        "budget_min": 100,
        "budget_max": 500,
        "status": "open",
        "tags": ["rust", "parsing"],
        "note": null,
    });

    let listing: Listing = listing_schema()
        .decode(&payload)
        .expect("payload conforms to the schema");
    println!("accepted: {listing:?}");

    // A bad payload fails with the full path to the offending value.
    let bad = json!({
        "full_name": "Alice Cooper",
        "budget_min": 100,
        "budget_max": "half a million",
        "status": "open",
        "tags": [],
    });
    match listing_schema().apply(&bad) {
        Ok(_) => unreachable!("payload is invalid"),
        Err(error) if error.is_invalid() => println!("rejected: {error}"),
        Err(defect) => panic!("validator bug: {defect}"),
    }
}
