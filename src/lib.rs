//! # formpilot - Configuration-Driven Form Automation Engine
//!
//! **formpilot** interprets a declarative schema of screens and fields against
//! a data record and produces the exact sequence of UI actions needed to
//! populate a multi-screen form, then verifies the rendered output against the
//! record. The engine owns path-based value resolution, conditional-rule
//! evaluation and type-polymorphic action dispatch; the actual rendering
//! technology stays behind the [`UiDriver`](driver::UiDriver) capability trait.
//!
//! ## Core Workflow
//!
//! 1. **Load your configuration**: parse the field-configuration JSON into a
//!    validated [`Schema`](schema::Schema), and the data record into a
//!    [`FormRecord`](data::FormRecord).
//! 2. **Drive the form**: create a [`ScreenRunner`](engine::ScreenRunner) and
//!    run it per screen. Fields are applied in declared order; a field whose
//!    condition evaluates false is skipped without any driver call.
//! 3. **Verify**: after the form is submitted, a
//!    [`Verifier`](verify::Verifier) walks the record, reads every expected
//!    element back and reports all mismatches together.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formpilot::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let schema = Schema::from_json(
//!     r#"[{
//!         "screenId": "vehicle-details",
//!         "fields": [{
//!             "testId": "tradeValue",
//!             "type": "currencyInput",
//!             "path": "vehicle.tradeValue"
//!         }]
//!     }]"#,
//! )?;
//! let record = FormRecord::sample();
//!
//! // A scripted driver records calls instead of touching a real UI.
//! let mut driver = ScriptedDriver::new();
//!
//! tokio_test::block_on(async {
//!     let runner = ScreenRunner::new(&schema, &record);
//!     runner.run(&mut driver, "vehicle-details").await
//! })?;
//!
//! for call in driver.calls() {
//!     println!("{:?}", call);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The condition language is intentionally restricted to binary comparisons
//! through a closed operator table; no configuration-supplied text is ever
//! compiled or evaluated at runtime.

pub mod condition;
pub mod data;
pub mod driver;
pub mod engine;
pub mod error;
pub mod path;
pub mod prelude;
pub mod schema;
pub mod value;
pub mod verify;
