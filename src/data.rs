//! The data record: the source-of-truth values a form is populated from
//! and verified against.

use crate::path;
use serde_json::{Value, json};
use std::fs;

/// An immutable data record, loaded once per run. The engine never mutates
/// it; all effects are externalized through the UI driver.
#[derive(Debug, Clone)]
pub struct FormRecord {
    root: Value,
}

impl FormRecord {
    /// Wraps an already-parsed JSON tree.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Loads a data record from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self {
            root: serde_json::from_str(&content)?,
        })
    }

    /// Creates a small default record when no fixture file is provided.
    /// Shape mirrors the target form: driver and vehicle attributes plus a
    /// counted collection of third-party records keyed 1..=count.
    pub fn sample() -> Self {
        Self {
            root: json!({
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
            }),
        }
    }

    /// The root of the record tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolves a dotted path against the record.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        path::resolve(&self.root, path)
    }
}
