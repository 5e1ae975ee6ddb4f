use thiserror::Error;

/// Errors that can occur while loading and validating a schema.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Failed to parse schema JSON: {0}")]
    JsonParseError(String),

    #[error(
        "Field '{test_id}' on screen '{screen_id}' has an unsupported field type: '{type_name}'"
    )]
    UnsupportedFieldType {
        screen_id: String,
        test_id: String,
        type_name: String,
    },
}

/// Errors that can occur while evaluating a field condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Condition on path '{path}' uses an unsupported operator: '{operator}'")]
    UnsupportedOperator { path: String, operator: String },
}

/// A failure reported by a [`UiDriver`](crate::driver::UiDriver) implementation.
#[derive(Error, Debug, Clone)]
#[error("UI driver failure on element '{element_id}': {message}")]
pub struct DriverError {
    pub element_id: String,
    pub message: String,
}

impl DriverError {
    pub fn new(element_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur while applying schema fields to a screen.
#[derive(Error, Debug, Clone)]
pub enum ApplyError {
    #[error("Screen '{0}' not found in the schema")]
    UnknownScreen(String),

    #[error("Field '{test_id}' resolved to no value and declares no default")]
    MissingRequiredValue { test_id: String },

    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Errors that abort a verification pass. Value mismatches are not errors;
/// they are collected in the [`VerificationReport`](crate::verify::VerificationReport).
#[derive(Error, Debug, Clone)]
pub enum VerifyError {
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Errors that can occur when saving or loading a compiled schema artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact I/O failed: {0}")]
    Io(String),

    #[error("Artifact encoding failed: {0}")]
    Encode(String),

    #[error("Artifact decoding failed: {0}")]
    Decode(String),
}
