//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the formpilot
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use formpilot::prelude::*;
//!
//! # async fn run_example(driver: &mut dyn UiDriver) -> Result<()> {
//! let schema = Schema::from_json(&std::fs::read_to_string("path/to/fields.json")?)?;
//! let record = FormRecord::from_file("path/to/record.json")?;
//!
//! let runner = ScreenRunner::new(&schema, &record);
//! runner.run(driver, "vehicle-details").await?;
//!
//! let report = Verifier::new(&record).verify(driver).await?;
//! assert!(report.is_clean(), "{report}");
//! # Ok(())
//! # }
//! ```

// Core engine and verification
pub use crate::engine::ScreenRunner;
pub use crate::verify::{Expectation, VerificationMismatch, VerificationReport, Verifier};

// Schema and data model
pub use crate::data::FormRecord;
pub use crate::schema::{
    CompiledSchema, Condition, FieldDescriptor, FieldKind, Schema, Screen, UiCondition, UiField,
    UiScreen,
};

// Driver capability
pub use crate::driver::{DriverCall, ScriptedDriver, UiDriver};

// Condition evaluation
pub use crate::condition::Operator;

// Error types
pub use crate::error::{
    ApplyError, ArtifactError, ConditionError, DriverError, SchemaError, VerifyError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
