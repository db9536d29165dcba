// PageShell - core/model.rs
//
// Per-platform configuration records. Pure data definitions with no I/O.
// These types are the shared vocabulary between the navigation shell and
// the embedding application.

use crate::util::constants;
use serde::{Deserialize, Serialize};

// =============================================================================
// Platform
// =============================================================================

/// Platform targets recognised by the navigation shell.
///
/// The set is closed: every supported platform has an explicit record in
/// `PlatformConfigs`, and unknown platform names are a schema error, not
/// an extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Plain mobile browser shell (no native container).
    Mobile,
    /// iOS native container.
    Ios,
    /// Android native container.
    Android,
}

impl Platform {
    /// Returns all supported platforms in declaration order.
    pub fn all() -> &'static [Platform] {
        &[Platform::Mobile, Platform::Ios, Platform::Android]
    }

    /// Key used for this platform in the serialized `platforms` mapping.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Mobile => "mobile",
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Per-platform records
// =============================================================================

/// Settings applied when running in a plain mobile browser shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileConfig {
    /// Whether the scroll/navigation position of a page is recorded on
    /// leave and restored when the user navigates back to it.
    pub record_position: bool,
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            record_position: constants::DEFAULT_MOBILE_RECORD_POSITION,
        }
    }
}

/// Settings applied inside the iOS native container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IosConfig {
    /// Transition identifier for page changes. Interpreted by the
    /// rendering layer; this crate treats it as an opaque name.
    pub page_transition: String,
}

impl Default for IosConfig {
    fn default() -> Self {
        Self {
            page_transition: constants::DEFAULT_IOS_PAGE_TRANSITION.to_string(),
        }
    }
}

/// Settings applied inside the Android native container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AndroidConfig {
    /// Transition identifier for page changes. Interpreted by the
    /// rendering layer; this crate treats it as an opaque name.
    pub page_transition: String,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            page_transition: constants::DEFAULT_ANDROID_PAGE_TRANSITION.to_string(),
        }
    }
}

/// Per-platform overrides, keyed by platform.
///
/// Deliberately a struct with one field per platform rather than an open
/// map: the schema is fixed at build time, and a typo in a platform name
/// fails to deserialize instead of silently creating a dead entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformConfigs {
    /// Plain mobile browser shell settings.
    pub mobile: MobileConfig,
    /// iOS native container settings.
    pub ios: IosConfig,
    /// Android native container settings.
    pub android: AndroidConfig,
}

// =============================================================================
// Tests
// =============================================================================
