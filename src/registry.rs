//! Validator registry
//!
//! The attachment surface a settings framework consumes. `attach` runs the
//! contextualization phase and stores the validator under the setting name;
//! `validate` runs every attached validator against a candidate value in
//! attachment order. Names with no attached validators pass.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::context::{SettingDescriptor, ValidationContext};
use crate::error::{Error, Result};
use crate::validator::BoxedValidator;

/// Holds the validators attached to each setting
///
/// # Example
///
/// ```
/// use setguard::{SettingDescriptor, ValidatorRegistry, ValueKind, ValueTypeValidator};
/// use serde_json::json;
///
/// struct AppSettings;
///
/// let registry = ValidatorRegistry::new();
/// let descriptor = SettingDescriptor::typed(ValueKind::String);
///
/// registry.attach::<AppSettings>(
///     "ui.theme",
///     &descriptor,
///     Box::new(ValueTypeValidator::inferred()),
/// )?;
///
/// assert!(registry.validate("ui.theme", &json!("dark")).is_ok());
/// assert!(registry.validate("ui.theme", &json!(42)).is_err());
/// # Ok::<(), setguard::Error>(())
/// ```
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: RwLock<HashMap<String, Vec<BoxedValidator>>>,
}

impl ValidatorRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a validator to a setting owned by the settings type `S`
    ///
    /// Runs the validator's contextualization phase with the descriptor and
    /// name before storing it. Validators attached to the same name run in
    /// attachment order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if the internal lock is poisoned.
    pub fn attach<S>(
        &self,
        name: &str,
        setting: &SettingDescriptor,
        mut validator: BoxedValidator,
    ) -> Result<()> {
        let ctx = ValidationContext::new::<S>(setting, name);
        validator.set_context(&ctx);

        let mut guard = self.validators.write().map_err(|_| Error::LockPoisoned)?;
        guard.entry(name.to_string()).or_default().push(validator);
        Ok(())
    }

    /// Attach a validator with an explicit owner name
    ///
    /// For dynamic frameworks without a typed settings struct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if the internal lock is poisoned.
    pub fn attach_with_owner(
        &self,
        owner: &str,
        name: &str,
        setting: &SettingDescriptor,
        mut validator: BoxedValidator,
    ) -> Result<()> {
        let ctx = ValidationContext::with_owner(owner, setting, name);
        validator.set_context(&ctx);

        let mut guard = self.validators.write().map_err(|_| Error::LockPoisoned)?;
        guard.entry(name.to_string()).or_default().push(validator);
        Ok(())
    }

    /// Run every validator attached to `name` against a candidate value
    ///
    /// The first rejection wins. Names with no attached validators pass.
    ///
    /// # Errors
    ///
    /// Returns the first validator error, or [`Error::LockPoisoned`] if the
    /// internal lock is poisoned.
    pub fn validate(&self, name: &str, value: &Value) -> Result<()> {
        let guard = self.validators.read().map_err(|_| Error::LockPoisoned)?;
        if let Some(validators) = guard.get(name) {
            for validator in validators {
                validator.evaluate(value)?;
            }
        }
        Ok(())
    }

    /// Remove all validators attached to a setting
    pub fn detach(&self, name: &str) -> Result<()> {
        let mut guard = self.validators.write().map_err(|_| Error::LockPoisoned)?;
        guard.remove(name);
        Ok(())
    }

    /// Remove every attached validator
    pub fn clear(&self) -> Result<()> {
        let mut guard = self.validators.write().map_err(|_| Error::LockPoisoned)?;
        guard.clear();
        Ok(())
    }

    /// Number of settings with at least one validator attached
    pub fn len(&self) -> usize {
        self.validators.read().map(|g| g.len()).unwrap_or(0)
    }

    /// Whether no validators are attached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Tests
// =============================================================================
