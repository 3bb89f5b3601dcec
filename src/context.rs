//! Setting descriptors and validation context
//!
//! The settings framework owns setting declaration and storage; validators
//! only ever see the slice of it captured here. A [`SettingDescriptor`] is
//! what the framework exposes about a single setting (its declared value
//! kind, default, and any custom metadata), and a [`ValidationContext`]
//! bundles the descriptor with the owning settings type and the setting
//! name for the contextualization phase.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::kind::ValueKind;

// =============================================================================
// Setting Descriptor
// =============================================================================

/// What a settings framework exposes about one declared setting
///
/// # Example
///
/// ```
/// use setguard::{SettingDescriptor, ValueKind};
/// use serde_json::json;
///
/// let port = SettingDescriptor::typed(ValueKind::Integer)
///     .default_value(json!(8080))
///     .meta_str("label", "Server Port");
///
/// assert_eq!(port.type_hint, Some(ValueKind::Integer));
/// assert_eq!(port.get_meta_str("label"), Some("Server Port"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDescriptor {
    /// Declared value kind, if the setting is typed
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<ValueKind>,

    /// Default value
    #[serde(default)]
    pub default: Value,

    /// Framework-defined custom metadata (fully dynamic)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, Value>,
}

impl Default for SettingDescriptor {
    fn default() -> Self {
        Self {
            type_hint: None,
            default: Value::Null,
            metadata: HashMap::new(),
        }
    }
}

impl SettingDescriptor {
    /// Create a descriptor with a declared value kind
    #[must_use]
    pub fn typed(kind: ValueKind) -> Self {
        Self {
            type_hint: Some(kind),
            ..Default::default()
        }
    }

    /// Create a descriptor with no declared kind
    #[must_use]
    pub fn untyped() -> Self {
        Self::default()
    }

    /// Set the default value
    #[must_use]
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = value;
        self
    }

    /// Add custom string metadata
    #[must_use]
    pub fn meta_str(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata
            .insert(key.to_string(), Value::String(value.into()));
        self
    }

    /// Add custom JSON metadata
    #[must_use]
    pub fn meta(mut self, key: &str, value: Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// Get metadata value by key
    pub fn get_meta(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Get metadata value as string
    pub fn get_meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|v| v.as_str())
    }
}

// =============================================================================
// Validation Context
// =============================================================================

/// Contextual information handed to a validator at attachment time
///
/// Carries the three things a validator may need before it can judge values:
/// the type name of the owning settings object, the descriptor of the
/// setting being validated, and the setting's name.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Type name of the owning settings object
    pub owner: &'a str,
    /// Descriptor of the setting this validator is attached to
    pub setting: &'a SettingDescriptor,
    /// Name of the setting (e.g. "network.port")
    pub name: &'a str,
}

impl<'a> ValidationContext<'a> {
    /// Build a context for a setting owned by the settings type `S`
    ///
    /// The owner is identified by its type name; validators only use it in
    /// human-readable messages.
    #[must_use]
    pub fn new<S>(setting: &'a SettingDescriptor, name: &'a str) -> Self {
        Self {
            owner: std::any::type_name::<S>(),
            setting,
            name,
        }
    }

    /// Build a context with an explicit owner name
    ///
    /// For frameworks whose settings objects are dynamic rather than typed
    /// structs.
    #[must_use]
    pub fn with_owner(owner: &'a str, setting: &'a SettingDescriptor, name: &'a str) -> Self {
        Self {
            owner,
            setting,
            name,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
