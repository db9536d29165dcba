// PageShell - util/constants.rs
//
// Single source of truth for all named defaults of the application-level
// configuration. The `Default` impls in core reference these constants;
// no default literal appears anywhere else.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PageShell";

/// Current crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Platform defaults
// =============================================================================

/// Whether the mobile browser shell records the scroll/navigation position
/// of a page so it can be restored when the user navigates back.
pub const DEFAULT_MOBILE_RECORD_POSITION: bool = true;

/// Transition identifier played on iOS page changes.
pub const DEFAULT_IOS_PAGE_TRANSITION: &str = "fade-right-transition";

/// Transition identifier played on Android page changes.
pub const DEFAULT_ANDROID_PAGE_TRANSITION: &str = "zoom-transition";

// =============================================================================
// Page-change behaviour
// =============================================================================

/// Whether the loading indicator is added before the transition starts
/// rather than once the target page reports busy.
pub const DEFAULT_SHOW_INDICATOR_WHEN_PAGE_CHANGE: bool = false;

// =============================================================================
// Domain
// =============================================================================

/// Default base domain. Empty means unset; the embedding application is
/// expected to supply one before issuing any request against it.
pub const DEFAULT_DOMAIN: &str = "";
