//! Type-polymorphic field action dispatch.

use crate::driver::UiDriver;
use crate::error::ApplyError;
use crate::schema::{FieldDescriptor, FieldKind};
use crate::value::text_form;
use serde_json::Value;

/// The currency-unit selector control associated with a currency field.
/// Addressed by convention as `<testId>.currency`.
pub(crate) fn currency_selector_id(test_id: &str) -> String {
    format!("{}.currency", test_id)
}

/// Issues the ordered driver calls that populate one field.
///
/// `resolved` is the value the field's path produced from the data record,
/// or `None` when the path resolved to nothing. Default fallback applies to
/// every kind except `Currency`, where a missing resolved value is an
/// input-contract violation rather than a recoverable default.
pub(crate) async fn apply_field(
    driver: &mut dyn UiDriver,
    field: &FieldDescriptor,
    resolved: Option<&Value>,
) -> Result<(), ApplyError> {
    match field.kind {
        FieldKind::Text | FieldKind::Integer => {
            let value = effective_value(field, resolved)?;
            driver.set_text(&field.test_id, &text_form(value)).await?;
        }
        FieldKind::Enumerated => {
            let value = effective_value(field, resolved)?;
            driver.click_element(&field.test_id).await?;
            driver.select_option(&text_form(value)).await?;
        }
        FieldKind::Currency => {
            let (amount, currency) = currency_parts(field, resolved)?;
            driver
                .click_element(&currency_selector_id(&field.test_id))
                .await?;
            driver.select_option(currency).await?;
            driver.set_text(&field.test_id, &text_form(amount)).await?;
        }
    }
    Ok(())
}

/// The resolved value if the path produced one, else the field's default.
fn effective_value<'a>(
    field: &'a FieldDescriptor,
    resolved: Option<&'a Value>,
) -> Result<&'a Value, ApplyError> {
    resolved
        .or(field.default_value.as_ref())
        .ok_or_else(|| ApplyError::MissingRequiredValue {
            test_id: field.test_id.clone(),
        })
}

/// Splits a resolved currency value into its amount and unit. The value must
/// be a `{value, currency}` object; partial absence never falls back to the
/// field default.
fn currency_parts<'a>(
    field: &FieldDescriptor,
    resolved: Option<&'a Value>,
) -> Result<(&'a Value, &'a str), ApplyError> {
    let missing = || ApplyError::MissingRequiredValue {
        test_id: field.test_id.clone(),
    };
    let pair = resolved.ok_or_else(missing)?;
    let amount = pair.get("value").ok_or_else(missing)?;
    let currency = pair
        .get("currency")
        .and_then(Value::as_str)
        .ok_or_else(missing)?;
    Ok((amount, currency))
}
