//! A recording driver for tests and dry-runs.

use crate::error::DriverError;
use ahash::AHashMap;
use async_trait::async_trait;

use super::UiDriver;

/// One observed driver operation, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    SetText { element_id: String, text: String },
    Click { element_id: String },
    SelectOption { value: String },
    ReadText { element_id: String },
}

/// A [`UiDriver`] that records every call and serves `read_text` from a
/// stub table. Useful for asserting the exact action sequence the engine
/// produces, and for dry-running a schema without a rendered UI.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    calls: Vec<DriverCall>,
    rendered: AHashMap<String, String>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stubs the rendered text returned by `read_text` for an element.
    pub fn with_rendered_text(
        mut self,
        element_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.rendered.insert(element_id.into(), text.into());
        self
    }

    /// The calls observed so far, in issue order.
    pub fn calls(&self) -> &[DriverCall] {
        &self.calls
    }
}

#[async_trait]
impl UiDriver for ScriptedDriver {
    async fn set_text(&mut self, element_id: &str, text: &str) -> Result<(), DriverError> {
        self.calls.push(DriverCall::SetText {
            element_id: element_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn click_element(&mut self, element_id: &str) -> Result<(), DriverError> {
        self.calls.push(DriverCall::Click {
            element_id: element_id.to_string(),
        });
        Ok(())
    }

    async fn select_option(&mut self, option_value: &str) -> Result<(), DriverError> {
        self.calls.push(DriverCall::SelectOption {
            value: option_value.to_string(),
        });
        Ok(())
    }

    async fn read_text(&mut self, element_id: &str) -> Result<String, DriverError> {
        self.calls.push(DriverCall::ReadText {
            element_id: element_id.to_string(),
        });
        self.rendered
            .get(element_id)
            .cloned()
            .ok_or_else(|| DriverError::new(element_id, "no rendered text scripted"))
    }
}
