//! The canonical, validated schema model driving the engine.

use crate::error::SchemaError;
use crate::schema::raw::{UiCondition, UiField, UiScreen};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of field kinds the dispatcher knows how to drive.
/// Adding a kind is a localized change: the enum variant plus one
/// exhaustiveness-checked dispatcher case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Enumerated,
    Integer,
    Currency,
}

impl FieldKind {
    /// Maps a wire-format type name to its kind. Returns `None` for names
    /// outside the closed set; conversion turns that into a hard
    /// [`SchemaError::UnsupportedFieldType`].
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "textInput" => Some(FieldKind::Text),
            "enumInput" => Some(FieldKind::Enumerated),
            "integerInput" => Some(FieldKind::Integer),
            "currencyInput" => Some(FieldKind::Currency),
            _ => None,
        }
    }
}

/// A single comparison gate controlling whether a field is acted upon.
///
/// The operator stays textual here and is mapped through the operator table
/// at evaluation time, so a mistyped name fails the run loudly instead of
/// silently disabling the condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub path: String,
    pub operator: String,
    pub value: Value,
}

impl From<UiCondition> for Condition {
    fn from(raw: UiCondition) -> Self {
        Self {
            path: raw.path,
            operator: raw.operator,
            value: raw.value,
        }
    }
}

/// Describes a single form control: identity, kind, data source, default
/// and optional condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Stable identifier of the target UI element, unique within a screen.
    pub test_id: String,
    pub kind: FieldKind,
    /// Dotted path into the data record; may resolve to nothing.
    pub path: String,
    /// Fallback used when `path` resolves to nothing. Fields without a
    /// default that also resolve to nothing fail with `MissingRequiredValue`.
    pub default_value: Option<Value>,
    pub condition: Option<Condition>,
}

/// An identifier plus an ordered sequence of fields. Ordering is significant:
/// later field actions may depend on UI state produced by earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub fields: Vec<FieldDescriptor>,
}

/// An ordered collection of screens, looked up by identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    pub screens: Vec<Screen>,
}

impl Schema {
    /// Parses and validates a field-configuration JSON document.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let raw: Vec<UiScreen> =
            serde_json::from_str(json).map_err(|e| SchemaError::JsonParseError(e.to_string()))?;
        Self::from_ui(raw)
    }

    /// Converts the wire-format screens into the canonical model, rejecting
    /// unknown field types.
    pub fn from_ui(raw: Vec<UiScreen>) -> Result<Self, SchemaError> {
        let mut screens = Vec::with_capacity(raw.len());
        for raw_screen in raw {
            let mut fields = Vec::with_capacity(raw_screen.fields.len());
            for raw_field in raw_screen.fields {
                fields.push(convert_field(&raw_screen.screen_id, raw_field)?);
            }
            screens.push(Screen {
                id: raw_screen.screen_id,
                fields,
            });
        }
        Ok(Self { screens })
    }

    /// Looks up a screen by identifier.
    pub fn screen(&self, screen_id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == screen_id)
    }
}

fn convert_field(screen_id: &str, raw: UiField) -> Result<FieldDescriptor, SchemaError> {
    let kind = FieldKind::from_type_name(&raw.field_type).ok_or_else(|| {
        SchemaError::UnsupportedFieldType {
            screen_id: screen_id.to_string(),
            test_id: raw.test_id.clone(),
            type_name: raw.field_type.clone(),
        }
    })?;
    Ok(FieldDescriptor {
        test_id: raw.test_id,
        kind,
        path: raw.path,
        default_value: raw.default_value,
        condition: raw.condition.map(Condition::from),
    })
}
