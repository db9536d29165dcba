// PageShell - core/config.rs
//
// The application-level configuration record and its shared read-only
// instance. Built once, read many times, never mutated; overrides
// produce a new value instead of touching an existing one.

use crate::core::model::{Platform, PlatformConfigs};
use crate::util::constants;
use crate::util::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// =============================================================================
// AppConfig
// =============================================================================

/// Application-level configuration consumed by the navigation shell.
///
/// All fields are plain data. Missing keys in a serialized document fall
/// back to the built-in defaults, so a partial document is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Per-platform behaviour and transition overrides.
    pub platforms: PlatformConfigs,

    /// Whether the loading indicator is added before the page transition
    /// starts, rather than once the target page reports busy.
    pub show_indicator_when_page_change: bool,

    /// Base domain for the application. Empty means unset; the embedding
    /// application is expected to supply one before use.
    pub domain: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            platforms: PlatformConfigs::default(),
            show_indicator_when_page_change:
                constants::DEFAULT_SHOW_INDICATOR_WHEN_PAGE_CHANGE,
            domain: constants::DEFAULT_DOMAIN.to_string(),
        }
    }
}

impl AppConfig {
    /// Transition identifier for page changes on `platform`.
    ///
    /// Returns `None` for platforms whose record carries no transition
    /// entry (the plain mobile shell uses the browser's own navigation).
    pub fn page_transition(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Mobile => None,
            Platform::Ios => Some(&self.platforms.ios.page_transition),
            Platform::Android => Some(&self.platforms.android.page_transition),
        }
    }

    /// Whether page position recording is enabled on `platform`.
    ///
    /// Only the plain mobile shell records positions; native containers
    /// keep their own navigation stacks.
    pub fn record_position(&self, platform: Platform) -> bool {
        match platform {
            Platform::Mobile => self.platforms.mobile.record_position,
            Platform::Ios | Platform::Android => false,
        }
    }

    /// Whether the embedding application has supplied a base domain.
    pub fn is_domain_set(&self) -> bool {
        !self.domain.is_empty()
    }

    /// The base domain, failing with [`ConfigError::DomainNotSet`] while
    /// it is still the empty default.
    pub fn require_domain(&self) -> Result<&str> {
        if self.is_domain_set() {
            Ok(&self.domain)
        } else {
            Err(ConfigError::DomainNotSet)
        }
    }

    /// Returns a copy of this configuration with the base domain set.
    ///
    /// An empty or all-whitespace domain is rejected — it would read back
    /// as unset.
    pub fn with_domain(mut self, domain: &str) -> Result<Self> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(ConfigError::EmptyDomain);
        }
        self.domain = domain.to_string();
        Ok(self)
    }
}

// =============================================================================
// Shared instance
// =============================================================================

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide shared configuration instance.
///
/// Initialised with the built-in defaults on first access and never
/// replaced afterwards; concurrent first reads race harmlessly into a
/// single initialisation. Callers needing a domain-bearing variant take
/// a clone through [`AppConfig::with_domain`].
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| {
        let config = AppConfig::default();
        tracing::debug!(
            app = constants::APP_NAME,
            version = constants::APP_VERSION,
            ios_transition = %config.platforms.ios.page_transition,
            android_transition = %config.platforms.android.page_transition,
            "Application configuration initialised"
        );
        config
    })
}

// =============================================================================
// Tests
// =============================================================================
