//! The validator contract
//!
//! Validation happens in two phases. At attachment time the framework calls
//! [`Validator::set_context`] with the setting's [`ValidationContext`]; on
//! every assignment attempt it calls [`Validator::evaluate`] with the
//! candidate value. Validators that need contextual data (the owning type,
//! the setting name, the declared value kind) capture it during the first
//! phase.

use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::Result;

/// Pluggable acceptance check attached to a setting
///
/// Both methods default to permissive no-ops, so implementors only override
/// what they need. A validator is constructed once, contextualized once per
/// attachment, and evaluated once per value-assignment attempt.
pub trait Validator {
    /// Receive contextual information about the setting this validator is
    /// attached to.
    ///
    /// Must be called before [`evaluate`](Validator::evaluate) for
    /// validators that depend on contextual data.
    fn set_context(&mut self, _ctx: &ValidationContext<'_>) {}

    /// Accept or reject a candidate value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) when the
    /// value is rejected, with a message explaining why.
    fn evaluate(&self, _value: &Value) -> Result<()> {
        Ok(())
    }
}

/// Owned validator as stored by [`ValidatorRegistry`](crate::ValidatorRegistry)
pub type BoxedValidator = Box<dyn Validator + Send + Sync>;
