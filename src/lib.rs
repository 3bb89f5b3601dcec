//! # setguard - Pluggable Settings Validators
//!
//! A small, framework-agnostic validation layer for settings/configuration
//! frameworks. The framework declares settings and stores values; setguard
//! decides whether a candidate value is acceptable.
//!
//! ## The two-phase protocol
//!
//! Every validator implements [`Validator`], which splits validation into
//! two phases:
//!
//! 1. **Contextualization** — [`Validator::set_context`] hands the validator
//!    the setting it is attached to: the owning settings type, the
//!    [`SettingDescriptor`], and the setting name. Called once per
//!    attachment.
//! 2. **Evaluation** — [`Validator::evaluate`] receives a candidate value
//!    and accepts or rejects it. Called once per assignment attempt,
//!    repeatable indefinitely.
//!
//! ## Quick Start
//!
//! ```rust
//! use setguard::{
//!     SettingDescriptor, ValidationContext, ValueKind, ValueTypeValidator, Validator,
//! };
//! use serde_json::json;
//!
//! struct AppSettings;
//!
//! let descriptor = SettingDescriptor::typed(ValueKind::Float).default_value(json!(14.0));
//! let ctx = ValidationContext::new::<AppSettings>(&descriptor, "font_size");
//!
//! // Hint is pulled from the descriptor during contextualization
//! let mut validator = ValueTypeValidator::inferred();
//! validator.set_context(&ctx);
//!
//! assert!(validator.evaluate(&json!(16.5)).is_ok());
//! assert!(validator.evaluate(&json!("sixteen")).is_err());
//! ```
//!
//! ## Deprecating settings
//!
//! [`DeprecatedValidator`] emits a `log::warn!` record every time the
//! setting is assigned, and can escalate the notice to a hard
//! [`Error::Validation`](crate::Error::Validation):
//!
//! ```rust
//! use setguard::{DeprecatedValidator, SettingDescriptor, ValidationContext, Validator};
//! use serde_json::json;
//!
//! struct AppSettings;
//!
//! let descriptor = SettingDescriptor::untyped();
//! let ctx = ValidationContext::new::<AppSettings>(&descriptor, "legacy_port");
//!
//! let mut deprecated = DeprecatedValidator::default();
//! deprecated.set_context(&ctx);
//!
//! // Warns via `log`, does not fail
//! assert!(deprecated.evaluate(&json!(8080)).is_ok());
//! ```
//!
//! ## Attaching validators to settings
//!
//! [`ValidatorRegistry`] is the surface a settings framework consumes: it
//! runs the contextualization phase at attachment time and the evaluation
//! phase on every candidate value.
//!
//! ```rust
//! use setguard::{
//!     SettingDescriptor, ValidatorRegistry, ValueKind, ValueTypeValidator,
//! };
//! use serde_json::json;
//!
//! struct AppSettings;
//!
//! let registry = ValidatorRegistry::new();
//! let port = SettingDescriptor::typed(ValueKind::Integer);
//! registry
//!     .attach::<AppSettings>("network.port", &port, Box::new(ValueTypeValidator::inferred()))
//!     .unwrap();
//!
//! assert!(registry.validate("network.port", &json!(8080)).is_ok());
//! assert!(registry.validate("network.port", &json!("8080")).is_err());
//! ```

mod context;
mod deprecated;
mod error;
mod kind;
mod registry;
mod validator;
mod value_type;

pub use context::{SettingDescriptor, ValidationContext};
pub use deprecated::DeprecatedValidator;
pub use error::{Error, Result};
pub use kind::ValueKind;
pub use registry::ValidatorRegistry;
pub use validator::{BoxedValidator, Validator};
pub use value_type::ValueTypeValidator;
