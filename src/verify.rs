//! Post-submission verification of rendered output against the data record.
//!
//! Verification is split in two passes: a pure walk of the record tree that
//! derives the ordered list of expected element texts, then an async pass
//! that reads each element back through the driver. Mismatches accumulate
//! into a [`VerificationReport`] rather than failing fast, so a single run
//! diagnoses every divergent field at once.

use crate::data::FormRecord;
use crate::driver::UiDriver;
use crate::error::VerifyError;
use crate::value::text_form;
use itertools::Itertools;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// One element the verifier expects to find, with the text it should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    /// Dotted path of the leaf, which is also the element identifier.
    pub element_id: String,
    pub expected: String,
}

/// A single divergence between the record and the rendered UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationMismatch {
    pub element_id: String,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for VerificationMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}': expected '{}', found '{}'",
            self.element_id, self.expected, self.actual
        )
    }
}

/// The outcome of a verification pass over the whole record.
#[derive(Debug, Default)]
pub struct VerificationReport {
    /// Number of leaf elements read back.
    pub checked: usize,
    pub mismatches: Vec<VerificationMismatch>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "{} elements verified, no mismatches", self.checked);
        }
        write!(
            f,
            "{} elements verified, {} mismatches:\n{}",
            self.checked,
            self.mismatches.len(),
            self.mismatches.iter().map(|m| format!("  {}", m)).join("\n")
        )
    }
}

/// Checks rendered output against the source record.
pub struct Verifier<'a> {
    record: &'a FormRecord,
}

impl<'a> Verifier<'a> {
    pub fn new(record: &'a FormRecord) -> Self {
        Self { record }
    }

    /// The ordered expectations the record implies, without touching the UI.
    pub fn expectations(&self) -> Vec<Expectation> {
        let mut out = Vec::new();
        collect(self.record.root(), "", &mut out);
        out
    }

    /// Reads every expected element back and collects mismatches.
    ///
    /// Only driver failures abort; differing text is recorded and the walk
    /// continues so the report covers the whole record.
    pub async fn verify(
        &self,
        driver: &mut dyn UiDriver,
    ) -> Result<VerificationReport, VerifyError> {
        let expectations = self.expectations();
        let mut report = VerificationReport::default();
        for expectation in expectations {
            let actual = driver.read_text(&expectation.element_id).await?;
            report.checked += 1;
            if actual != expectation.expected {
                report.mismatches.push(VerificationMismatch {
                    element_id: expectation.element_id,
                    expected: expectation.expected,
                    actual,
                });
            }
        }
        debug!(
            checked = report.checked,
            mismatches = report.mismatches.len(),
            "verification pass finished"
        );
        Ok(report)
    }
}

/// A `{value, currency}` pair renders as a single leaf, e.g. `"5700 GBP"`.
fn currency_text(value: &Value) -> Option<String> {
    let map = value.as_object()?;
    let amount = map.get("value")?;
    let currency = map.get("currency")?.as_str()?;
    Some(format!("{} {}", text_form(amount), currency))
}

/// A counted collection is an object with an integer `count` member and
/// members keyed `1..=count`. The count leaf verifies first, then each
/// member by index; keys outside the counted range are not walked.
fn counted_members(value: &Value) -> Option<u64> {
    value.as_object()?.get("count")?.as_u64()
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

fn collect(value: &Value, prefix: &str, out: &mut Vec<Expectation>) {
    if let Some(text) = currency_text(value) {
        out.push(Expectation {
            element_id: prefix.to_string(),
            expected: text,
        });
        return;
    }
    if let Some(count) = counted_members(value) {
        out.push(Expectation {
            element_id: join(prefix, "count"),
            expected: count.to_string(),
        });
        for index in 1..=count {
            let key = index.to_string();
            if let Some(member) = value.get(&key) {
                collect(member, &join(prefix, &key), out);
            }
        }
        return;
    }
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect(child, &join(prefix, key), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect(child, &join(prefix, &index.to_string()), out);
            }
        }
        leaf => out.push(Expectation {
            element_id: prefix.to_string(),
            expected: text_form(leaf),
        }),
    }
}
