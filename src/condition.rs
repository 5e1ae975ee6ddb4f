//! The operator table and condition evaluator.
//!
//! A condition is a single binary comparison gating whether a field is acted
//! upon. The operator set is closed: comparison always goes through the
//! [`Operator`] enum, never through runtime-compiled expressions, and an
//! unrecognized operator name is a loud [`ConditionError::UnsupportedOperator`]
//! rather than a comparator that silently always returns `false`.

use crate::error::ConditionError;
use crate::path;
use crate::schema::Condition;
use crate::value::{as_number, text_form};
use serde_json::Value;

/// The closed set of comparison operators recognized in schema conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Less,
    Greater,
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

impl Operator {
    /// Maps a textual operator name from the schema to its comparator.
    /// Returns `None` for names outside the recognized set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "less" => Some(Operator::Less),
            "greater" => Some(Operator::Greater),
            "equal" => Some(Operator::Equal),
            "lessOrEqual" => Some(Operator::LessOrEqual),
            "greaterOrEqual" => Some(Operator::GreaterOrEqual),
            _ => None,
        }
    }

    /// Applies the comparator to a resolved actual value and a literal operand.
    ///
    /// Coercion rules:
    /// - `Equal` compares numerically when both operands coerce to numbers
    ///   (JSON number, or string parsing as one), otherwise by canonical text
    ///   form.
    /// - Ordering operators require both operands to coerce to numbers and
    ///   are `false` otherwise.
    /// - A missing (`None`) actual value is `false` under every operator.
    pub fn compare(&self, actual: Option<&Value>, expected: &Value) -> bool {
        let Some(actual) = actual else {
            return false;
        };
        match self {
            Operator::Equal => match (as_number(actual), as_number(expected)) {
                (Some(a), Some(e)) => a == e,
                _ => text_form(actual) == text_form(expected),
            },
            Operator::Less => numeric(actual, expected, |a, e| a < e),
            Operator::Greater => numeric(actual, expected, |a, e| a > e),
            Operator::LessOrEqual => numeric(actual, expected, |a, e| a <= e),
            Operator::GreaterOrEqual => numeric(actual, expected, |a, e| a >= e),
        }
    }
}

fn numeric(actual: &Value, expected: &Value, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (as_number(actual), as_number(expected)) {
        (Some(a), Some(e)) => cmp(a, e),
        _ => false,
    }
}

/// Evaluates a condition against a data record.
///
/// The condition's path is resolved against the record root, independent of
/// the owning field's path; the literal operand is never path-resolved. A
/// missing resolved value yields a defined boolean per [`Operator::compare`],
/// never an error. Only an unrecognized operator name fails.
pub fn evaluate(condition: &Condition, record: &Value) -> Result<bool, ConditionError> {
    let operator = Operator::from_name(&condition.operator).ok_or_else(|| {
        ConditionError::UnsupportedOperator {
            path: condition.path.clone(),
            operator: condition.operator.clone(),
        }
    })?;
    let actual = path::resolve(record, &condition.path);
    Ok(operator.compare(actual, &condition.value))
}
