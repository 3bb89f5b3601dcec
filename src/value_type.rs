//! Value type validator
//!
//! Checks a candidate value's kind against an expected [`ValueKind`]. The
//! hint is either supplied at construction or resolved from the setting
//! descriptor during contextualization. Strict mode requires an exact kind
//! match; loose mode applies [`ValueKind::accepts`], which additionally
//! allows an integer where a float is expected.

use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::{Error, Result};
use crate::kind::ValueKind;
use crate::validator::Validator;

/// Checks candidate values against an expected value kind
///
/// # Example
///
/// ```
/// use setguard::{ValueKind, ValueTypeValidator, Validator};
/// use serde_json::json;
///
/// let strict = ValueTypeValidator::new(ValueKind::Float);
/// assert!(strict.evaluate(&json!(3.5)).is_ok());
/// assert!(strict.evaluate(&json!(3)).is_err()); // integer is not exactly float
///
/// let loose = ValueTypeValidator::loose(ValueKind::Float);
/// assert!(loose.evaluate(&json!(3)).is_ok()); // widening allowed
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValueTypeValidator {
    type_hint: Option<ValueKind>,
    strict: bool,
}

impl ValueTypeValidator {
    /// Create a strict validator with an explicit kind
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self {
            type_hint: Some(kind),
            strict: true,
        }
    }

    /// Create a loose validator with an explicit kind
    #[must_use]
    pub fn loose(kind: ValueKind) -> Self {
        Self {
            type_hint: Some(kind),
            strict: false,
        }
    }

    /// Create a strict validator whose kind is resolved from the setting
    /// descriptor at contextualization time
    #[must_use]
    pub fn inferred() -> Self {
        Self {
            type_hint: None,
            strict: true,
        }
    }

    /// Create a loose validator whose kind is resolved from the setting
    /// descriptor at contextualization time
    #[must_use]
    pub fn inferred_loose() -> Self {
        Self {
            type_hint: None,
            strict: false,
        }
    }

    /// The kind this validator currently checks against, if resolved
    #[must_use]
    pub fn type_hint(&self) -> Option<ValueKind> {
        self.type_hint
    }
}

impl Validator for ValueTypeValidator {
    fn set_context(&mut self, ctx: &ValidationContext<'_>) {
        if self.type_hint.is_none() {
            self.type_hint = ctx.setting.type_hint;
        }
    }

    fn evaluate(&self, value: &Value) -> Result<()> {
        let expected = self.type_hint.ok_or_else(|| {
            Error::MissingContext(
                "no type hint supplied and none declared on the setting".to_string(),
            )
        })?;

        let actual = ValueKind::of(value);
        let valid = if self.strict {
            actual == expected
        } else {
            expected.accepts(actual)
        };

        if !valid {
            return Err(Error::Validation(format!(
                "Expected value of type `{expected}`, got value of type `{actual}`"
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
