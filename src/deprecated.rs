//! Deprecation validator
//!
//! Attached to a setting that still works but is on its way out. Every
//! assignment emits a `log::warn!` record with a message rendered from the
//! template at contextualization time; setting `validate_as_error` turns the
//! notice into a hard rejection.

use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::{Error, Result};
use crate::validator::Validator;

/// Placeholder for the owning settings type in message templates
const OWNER_PLACEHOLDER: &str = "{owner}";
/// Placeholder for the setting name in message templates
const NAME_PLACEHOLDER: &str = "{name}";

/// Signals that a setting is deprecated
///
/// # Example
///
/// ```
/// use setguard::{DeprecatedValidator, SettingDescriptor, ValidationContext, Validator};
/// use serde_json::json;
///
/// struct AppSettings;
///
/// let descriptor = SettingDescriptor::untyped();
/// let ctx = ValidationContext::new::<AppSettings>(&descriptor, "legacy_port");
///
/// // Escalated: assignment fails instead of just warning
/// let mut validator = DeprecatedValidator::default().as_error();
/// validator.set_context(&ctx);
///
/// let err = validator.evaluate(&json!(8080)).unwrap_err();
/// assert!(err.to_string().contains("legacy_port"));
/// ```
#[derive(Debug, Clone)]
pub struct DeprecatedValidator {
    template: String,
    msg: Option<String>,
    validate_as_error: bool,
}

impl Default for DeprecatedValidator {
    fn default() -> Self {
        Self::new(
            "Setting `{name}` of `{owner}` is deprecated",
            false,
        )
    }
}

impl DeprecatedValidator {
    /// Create a validator with a custom message template
    ///
    /// The template may contain `{owner}` and `{name}` placeholders, which
    /// are rendered into the owning settings type and the setting name when
    /// context is supplied.
    #[must_use]
    pub fn new(template: impl Into<String>, validate_as_error: bool) -> Self {
        Self {
            template: template.into(),
            msg: None,
            validate_as_error,
        }
    }

    /// Escalate the deprecation notice to a validation error
    #[must_use]
    pub fn as_error(mut self) -> Self {
        self.validate_as_error = true;
        self
    }

    /// The deprecation message as it will be reported
    ///
    /// Falls back to the raw template when no context has been supplied yet.
    #[must_use]
    pub fn message(&self) -> &str {
        self.msg.as_deref().unwrap_or(&self.template)
    }
}

impl Validator for DeprecatedValidator {
    fn set_context(&mut self, ctx: &ValidationContext<'_>) {
        self.msg = Some(
            self.template
                .replace(OWNER_PLACEHOLDER, ctx.owner)
                .replace(NAME_PLACEHOLDER, ctx.name),
        );
    }

    fn evaluate(&self, _value: &Value) -> Result<()> {
        let msg = self.message();
        log::warn!("{msg}");

        if self.validate_as_error {
            return Err(Error::Validation(msg.to_string()));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SettingDescriptor;
    use serde_json::json;

    struct LegacySettings;

    fn contextualized(validate_as_error: bool) -> DeprecatedValidator {
        let descriptor = SettingDescriptor::untyped();
        let ctx = ValidationContext::new::<LegacySettings>(&descriptor, "old_key");

        let mut validator = DeprecatedValidator::new(
            "Setting `{name}` of `{owner}` is deprecated",
            validate_as_error,
        );
        validator.set_context(&ctx);
        validator
    }

    #[test]
    fn test_warning_only_accepts_value() {
        let validator = contextualized(false);
        assert!(validator.evaluate(&json!("anything")).is_ok());
    }

    #[test]
    fn test_escalated_rejects_with_rendered_message() {
        let validator = contextualized(true);

        let err = validator.evaluate(&json!("anything")).unwrap_err();
        assert!(err.is_validation());

        let msg = err.to_string();
        assert!(msg.contains("old_key"));
        assert!(msg.contains("LegacySettings"));
    }

    #[test]
    fn test_message_renders_placeholders() {
        let validator = contextualized(false);
        assert!(!validator.message().contains("{name}"));
        assert!(!validator.message().contains("{owner}"));
        assert!(validator.message().contains("old_key"));
    }

    #[test]
    fn test_uncontextualized_falls_back_to_template() {
        let validator = DeprecatedValidator::default();
        assert!(validator.message().contains("{name}"));
        // The notice is still reported, never lost
        assert!(validator.evaluate(&json!(1)).is_ok());
    }

    #[test]
    fn test_as_error_builder() {
        let validator = DeprecatedValidator::default().as_error();
        assert!(validator.evaluate(&json!(1)).is_err());
    }
}
