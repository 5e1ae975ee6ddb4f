//! Serde-facing schema types matching the field-configuration JSON format.
//!
//! These structs mirror the wire shape (camelCase keys, stringly field types)
//! and are converted into the canonical typed model in
//! [`definition`](super::definition).

use serde::Deserialize;
use serde_json::Value;

/// One screen entry of the field-configuration file.
#[derive(Debug, Deserialize, Clone)]
pub struct UiScreen {
    #[serde(alias = "screenId")]
    pub screen_id: String,
    pub fields: Vec<UiField>,
}

/// One field entry as authored in the configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct UiField {
    #[serde(alias = "testId")]
    pub test_id: String,
    #[serde(alias = "type")]
    pub field_type: String,
    pub path: String,
    #[serde(default)]
    #[serde(alias = "defaultValue")]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub condition: Option<UiCondition>,
}

/// A condition gate as authored in the configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct UiCondition {
    pub path: String,
    pub operator: String,
    pub value: Value,
}
