//! The UI driver capability boundary.
//!
//! The engine addresses elements by a caller-supplied stable identifier
//! convention (e.g. a `data-testid` attribute) and is agnostic to the
//! concrete rendering technology. Every operation is potentially suspending:
//! an implementation may wait on rendering or network completion before
//! resolving, and the engine awaits each call before issuing the next.

use crate::error::DriverError;
use async_trait::async_trait;

mod scripted;

pub use scripted::{DriverCall, ScriptedDriver};

/// The minimum capability the engine needs from a UI driver.
#[async_trait]
pub trait UiDriver: Send {
    /// Replaces the content of the target element with `text`.
    async fn set_text(&mut self, element_id: &str, text: &str) -> Result<(), DriverError>;

    /// Clicks the target element, e.g. to open a selector or submit.
    async fn click_element(&mut self, element_id: &str) -> Result<(), DriverError>;

    /// Chooses the option of the currently open selector whose value
    /// attribute equals `option_value`.
    async fn select_option(&mut self, option_value: &str) -> Result<(), DriverError>;

    /// Reads the rendered text of the target element for verification.
    async fn read_text(&mut self, element_id: &str) -> Result<String, DriverError>;
}
