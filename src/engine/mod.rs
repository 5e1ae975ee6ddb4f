//! The screen runner: drives a schema's fields onto the UI, one screen at a
//! time.

use crate::condition;
use crate::data::FormRecord;
use crate::driver::UiDriver;
use crate::error::ApplyError;
use crate::schema::Schema;
use tracing::debug;

mod actions;

/// Applies schema-declared fields to the UI screen-by-screen.
///
/// A runner borrows the schema and record for the duration of a run and holds
/// no other state; all effects go through the driver passed to [`run`](Self::run).
pub struct ScreenRunner<'a> {
    schema: &'a Schema,
    record: &'a FormRecord,
}

impl<'a> ScreenRunner<'a> {
    pub fn new(schema: &'a Schema, record: &'a FormRecord) -> Self {
        Self { schema, record }
    }

    /// Populates one screen's fields in declared order.
    ///
    /// Fields whose condition evaluates false are skipped with zero driver
    /// calls. Driver operations are awaited strictly one at a time because
    /// later actions may depend on widget state left by earlier ones (an
    /// option can only be selected while its dropdown is open).
    pub async fn run(
        &self,
        driver: &mut dyn UiDriver,
        screen_id: &str,
    ) -> Result<(), ApplyError> {
        let screen = self
            .schema
            .screen(screen_id)
            .ok_or_else(|| ApplyError::UnknownScreen(screen_id.to_string()))?;

        debug!(screen_id, fields = screen.fields.len(), "filling screen");

        for field in &screen.fields {
            if let Some(cond) = &field.condition {
                if !condition::evaluate(cond, self.record.root())? {
                    debug!(test_id = %field.test_id, "condition false, skipping field");
                    continue;
                }
            }
            let resolved = self.record.resolve(&field.path);
            debug!(test_id = %field.test_id, resolved = resolved.is_some(), "applying field");
            actions::apply_field(driver, field, resolved).await?;
        }
        Ok(())
    }
}
