//! Common test utilities for building schemas, records and conditions.
use formpilot::prelude::*;
use serde_json::{Value, json};

/// A record mirroring the target form's fixture shape: driver and vehicle
/// attributes plus a counted collection of third-party records.
#[allow(dead_code)]
pub fn vehicle_record() -> FormRecord {
    FormRecord::from_value(json!({
        "driver": {
            "firstName": "Jane",
            "lastName": "Doe",
            "age": 34
        },
        "vehicle": {
            "make": "Volvo",
            "year": 2021,
            "tradeValue": { "value": 5700, "currency": "GBP" }
        },
        "thirdParties": {
            "count": 2,
            "1": { "name": "Sam Smith", "insurer": "Acme" },
            "2": { "name": "Alex Ray", "insurer": "Globex" }
        }
    }))
}

#[allow(dead_code)]
pub fn field(test_id: &str, kind: FieldKind, path: &str) -> FieldDescriptor {
    FieldDescriptor {
        test_id: test_id.to_string(),
        kind,
        path: path.to_string(),
        default_value: None,
        condition: None,
    }
}

#[allow(dead_code)]
pub fn field_with_default(
    test_id: &str,
    kind: FieldKind,
    path: &str,
    default: Value,
) -> FieldDescriptor {
    FieldDescriptor {
        default_value: Some(default),
        ..field(test_id, kind, path)
    }
}

#[allow(dead_code)]
pub fn condition(path: &str, operator: &str, value: Value) -> Condition {
    Condition {
        path: path.to_string(),
        operator: operator.to_string(),
        value,
    }
}

#[allow(dead_code)]
pub fn single_screen_schema(screen_id: &str, fields: Vec<FieldDescriptor>) -> Schema {
    Schema {
        screens: vec![Screen {
            id: screen_id.to_string(),
            fields,
        }],
    }
}
