//! Tests for the verifier: expectation derivation, currency formatting,
//! counted collections and batch mismatch reporting.
mod common;
use common::*;
use formpilot::prelude::*;
use serde_json::json;
use tokio_test::block_on;

fn driver_for(record: &FormRecord) -> ScriptedDriver {
    let mut driver = ScriptedDriver::new();
    for expectation in Verifier::new(record).expectations() {
        driver = driver.with_rendered_text(expectation.element_id, expectation.expected);
    }
    driver
}

#[test]
fn currency_leaf_formats_amount_and_unit() {
    let expectations = Verifier::new(&vehicle_record()).expectations();
    let trade_value = expectations
        .iter()
        .find(|e| e.element_id == "vehicle.tradeValue")
        .expect("tradeValue expectation");
    assert_eq!(trade_value.expected, "5700 GBP");
}

#[test]
fn counted_collection_verifies_count_first_then_members_in_order() {
    let record = FormRecord::from_value(json!({
        "thirdParties": {
            "count": 2,
            "1": { "name": "Sam Smith" },
            "2": { "name": "Alex Ray" },
            "notes": "ignored bookkeeping key"
        }
    }));
    let ids: Vec<String> = Verifier::new(&record)
        .expectations()
        .into_iter()
        .map(|e| e.element_id)
        .collect();
    assert_eq!(
        ids,
        vec![
            "thirdParties.count".to_string(),
            "thirdParties.1.name".to_string(),
            "thirdParties.2.name".to_string(),
        ]
    );
}

#[test]
fn members_beyond_the_asserted_count_are_not_verified() {
    let record = FormRecord::from_value(json!({
        "thirdParties": {
            "count": 1,
            "1": { "name": "Sam Smith" },
            "2": { "name": "Alex Ray" }
        }
    }));
    let ids: Vec<String> = Verifier::new(&record)
        .expectations()
        .into_iter()
        .map(|e| e.element_id)
        .collect();
    assert_eq!(
        ids,
        vec![
            "thirdParties.count".to_string(),
            "thirdParties.1.name".to_string(),
        ]
    );
}

#[test]
fn matching_ui_produces_a_clean_report() {
    let record = vehicle_record();
    let mut driver = driver_for(&record);
    let report = block_on(Verifier::new(&record).verify(&mut driver)).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.checked, Verifier::new(&record).expectations().len());
}

#[test]
fn every_mismatch_is_reported_not_just_the_first() {
    let record = FormRecord::from_value(json!({
        "driver": {
            "a": 1, "b": 2, "c": 3, "d": 4, "e": 5,
            "f": 6, "g": 7, "h": 8, "i": 9, "j": 10
        }
    }));
    let mut driver = driver_for(&record)
        .with_rendered_text("driver.c", "wrong")
        .with_rendered_text("driver.h", "also wrong");
    let report = block_on(Verifier::new(&record).verify(&mut driver)).unwrap();
    assert_eq!(report.checked, 10);
    assert_eq!(report.mismatches.len(), 2);

    let bad: Vec<&str> = report
        .mismatches
        .iter()
        .map(|m| m.element_id.as_str())
        .collect();
    assert_eq!(bad, vec!["driver.c", "driver.h"]);
    assert_eq!(report.mismatches[0].expected, "3");
    assert_eq!(report.mismatches[0].actual, "wrong");
}

#[test]
fn report_display_names_each_divergent_element() {
    let record = FormRecord::from_value(json!({ "driver": { "age": 34 } }));
    let mut driver = ScriptedDriver::new().with_rendered_text("driver.age", "43");
    let report = block_on(Verifier::new(&record).verify(&mut driver)).unwrap();
    let rendered = report.to_string();
    assert!(rendered.contains("driver.age"));
    assert!(rendered.contains("expected '34'"));
    assert!(rendered.contains("found '43'"));
}

#[test]
fn driver_failure_aborts_verification() {
    let record = FormRecord::from_value(json!({ "driver": { "age": 34 } }));
    // Nothing stubbed: the scripted driver fails the read.
    let mut driver = ScriptedDriver::new();
    let result = block_on(Verifier::new(&record).verify(&mut driver));
    assert!(matches!(result, Err(VerifyError::Driver(_))));
}

#[test]
fn scalar_leaves_stringify_directly() {
    let record = FormRecord::from_value(json!({
        "driver": { "firstName": "Jane", "age": 34, "licensed": true }
    }));
    let expectations = Verifier::new(&record).expectations();
    let expected: Vec<(&str, &str)> = vec![
        ("driver.age", "34"),
        ("driver.firstName", "Jane"),
        ("driver.licensed", "true"),
    ];
    for (element_id, text) in expected {
        let found = expectations
            .iter()
            .find(|e| e.element_id == element_id)
            .unwrap_or_else(|| panic!("missing expectation for {}", element_id));
        assert_eq!(found.expected, text);
    }
}
