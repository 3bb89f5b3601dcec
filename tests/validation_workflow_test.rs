//! Validation Workflow Integration Tests
//!
//! Tests for the complete validator lifecycle including:
//! - Two-phase contextualize-then-evaluate protocol through the registry
//! - Strict vs loose type checking
//! - Deprecation notices (warning vs escalated error)
//! - Log records emitted for deprecated settings

use setguard::{
    DeprecatedValidator, Error, SettingDescriptor, ValidatorRegistry, ValueKind,
    ValueTypeValidator, Validator,
};
use serde_json::json;
use std::sync::{Mutex, OnceLock};

// =============================================================================
// Test Settings Owner
// =============================================================================

/// Stand-in for an application's settings struct; validators only ever use
/// its type name.
struct AppSettings;

fn schema() -> Vec<(&'static str, SettingDescriptor)> {
    vec![
        (
            "ui.theme",
            SettingDescriptor::typed(ValueKind::String).default_value(json!("dark")),
        ),
        (
            "ui.font_size",
            SettingDescriptor::typed(ValueKind::Float).default_value(json!(14.0)),
        ),
        (
            "network.port",
            SettingDescriptor::typed(ValueKind::Integer).default_value(json!(8080)),
        ),
        ("legacy.proxy", SettingDescriptor::untyped()),
    ]
}

fn registry_with_type_checks(strict: bool) -> ValidatorRegistry {
    let registry = ValidatorRegistry::new();
    for (name, descriptor) in schema() {
        let validator = if strict {
            ValueTypeValidator::inferred()
        } else {
            ValueTypeValidator::inferred_loose()
        };
        if descriptor.type_hint.is_some() {
            registry
                .attach::<AppSettings>(name, &descriptor, Box::new(validator))
                .unwrap();
        }
    }
    registry
}

// =============================================================================
// Type Checking Workflow
// =============================================================================

#[test]
fn test_strict_workflow_accepts_exact_kinds() {
    let registry = registry_with_type_checks(true);

    assert!(registry.validate("ui.theme", &json!("light")).is_ok());
    assert!(registry.validate("ui.font_size", &json!(16.5)).is_ok());
    assert!(registry.validate("network.port", &json!(9090)).is_ok());
}

#[test]
fn test_strict_workflow_rejects_integer_for_float() {
    let registry = registry_with_type_checks(true);

    let err = registry.validate("ui.font_size", &json!(16)).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("float"));
    assert!(err.to_string().contains("integer"));
}

#[test]
fn test_loose_workflow_accepts_integer_for_float() {
    let registry = registry_with_type_checks(false);

    assert!(registry.validate("ui.font_size", &json!(16)).is_ok());
}

#[test]
fn test_loose_workflow_still_rejects_wrong_kinds() {
    let registry = registry_with_type_checks(false);

    assert!(registry.validate("ui.theme", &json!(42)).is_err());
    assert!(registry.validate("network.port", &json!(80.5)).is_err());
}

#[test]
fn test_untyped_setting_without_validators_passes() {
    let registry = registry_with_type_checks(true);

    assert!(registry.validate("legacy.proxy", &json!("anything")).is_ok());
}

#[test]
fn test_repeatable_evaluation() {
    let registry = registry_with_type_checks(true);

    // Contextualized once, evaluated many times
    for port in [1, 80, 8080, 65535] {
        assert!(registry.validate("network.port", &json!(port)).is_ok());
    }
    for bad in [json!("80"), json!(80.5), json!(true)] {
        assert!(registry.validate("network.port", &bad).is_err());
    }
}

// =============================================================================
// Deprecation Workflow
// =============================================================================

#[test]
fn test_deprecated_setting_warns_but_saves() {
    let registry = ValidatorRegistry::new();
    let descriptor = SettingDescriptor::untyped();

    registry
        .attach::<AppSettings>("legacy.proxy", &descriptor, Box::new(DeprecatedValidator::default()))
        .unwrap();

    assert!(registry.validate("legacy.proxy", &json!("http://old")).is_ok());
}

#[test]
fn test_deprecated_setting_escalated_to_error() {
    let registry = ValidatorRegistry::new();
    let descriptor = SettingDescriptor::untyped();

    registry
        .attach::<AppSettings>(
            "legacy.proxy",
            &descriptor,
            Box::new(DeprecatedValidator::default().as_error()),
        )
        .unwrap();

    let err = registry.validate("legacy.proxy", &json!("http://old")).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("legacy.proxy"));
    assert!(err.to_string().contains("AppSettings"));
}

#[test]
fn test_custom_deprecation_template() {
    let descriptor = SettingDescriptor::untyped();
    let registry = ValidatorRegistry::new();

    registry
        .attach::<AppSettings>(
            "legacy.proxy",
            &descriptor,
            Box::new(DeprecatedValidator::new(
                "`{name}` is gone, use `network.proxy` instead",
                true,
            )),
        )
        .unwrap();

    let err = registry.validate("legacy.proxy", &json!(null)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`legacy.proxy` is gone, use `network.proxy` instead"
    );
}

// =============================================================================
// Warning Emission
// =============================================================================

/// Captures warn-level records so tests can assert that deprecation notices
/// are actually reported through the `log` facade.
struct CaptureLogger {
    records: Mutex<Vec<String>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if record.level() == log::Level::Warn {
            self.records
                .lock()
                .unwrap()
                .push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

fn capture_logger() -> &'static CaptureLogger {
    static LOGGER: OnceLock<&'static CaptureLogger> = OnceLock::new();
    LOGGER.get_or_init(|| {
        let logger = Box::leak(Box::new(CaptureLogger {
            records: Mutex::new(Vec::new()),
        }));
        log::set_logger(logger).unwrap();
        log::set_max_level(log::LevelFilter::Warn);
        logger
    })
}

#[test]
fn test_deprecation_notice_emitted_as_warning() {
    let logger = capture_logger();

    let descriptor = SettingDescriptor::untyped();
    let ctx = setguard::ValidationContext::new::<AppSettings>(&descriptor, "old.flag");

    let mut validator = DeprecatedValidator::default();
    validator.set_context(&ctx);
    validator.evaluate(&json!(true)).unwrap();

    let records = logger.records.lock().unwrap();
    assert!(
        records
            .iter()
            .any(|msg| msg.contains("old.flag") && msg.contains("deprecated")),
        "expected a warn record naming the setting, got: {records:?}"
    );
}

// =============================================================================
// Lifecycle Misuse
// =============================================================================

#[test]
fn test_inferred_validator_needs_context() {
    let validator = ValueTypeValidator::inferred();

    let err = validator.evaluate(&json!(1)).unwrap_err();
    assert!(matches!(err, Error::MissingContext(_)));
}
