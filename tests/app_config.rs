// PageShell - tests/app_config.rs
//
// End-to-end tests for the configuration consumption contract.
//
// These exercise the crate exactly as an embedding application would:
// read the shared instance, look up per-platform settings, bind a base
// domain, and deserialize a configuration document — no mocks, no stubs.

use pageshell_config::core::config::{app_config, AppConfig};
use pageshell_config::core::model::Platform;
use pageshell_config::util::error::ConfigError;

// =============================================================================
// Built-in defaults
// =============================================================================

/// The built-in defaults carry the documented values, field for field.
#[test]
fn builtin_defaults_match_documented_values() {
    let config = AppConfig::default();

    assert!(config.platforms.mobile.record_position);
    assert_eq!(config.platforms.ios.page_transition, "fade-right-transition");
    assert_eq!(config.platforms.android.page_transition, "zoom-transition");
    assert!(!config.show_indicator_when_page_change);
    assert_eq!(config.domain, "");
}

/// Repeated reads are stable: the shared instance never changes identity,
/// and independently constructed defaults are structurally equal.
#[test]
fn repeated_reads_are_stable() {
    assert!(std::ptr::eq(app_config(), app_config()));
    assert_eq!(AppConfig::default(), AppConfig::default());
    assert_eq!(app_config(), &AppConfig::default());
}

// =============================================================================
// Platform lookups
// =============================================================================

/// Every platform resolves to its own record; platforms without a given
/// setting report its absence rather than a default-of-a-default.
#[test]
fn platform_lookups_cover_all_platforms() {
    let config = app_config();

    for platform in Platform::all() {
        match platform {
            Platform::Mobile => {
                assert_eq!(config.page_transition(*platform), None);
                assert!(config.record_position(*platform));
            }
            Platform::Ios => {
                assert_eq!(
                    config.page_transition(*platform),
                    Some("fade-right-transition")
                );
                assert!(!config.record_position(*platform));
            }
            Platform::Android => {
                assert_eq!(config.page_transition(*platform), Some("zoom-transition"));
                assert!(!config.record_position(*platform));
            }
        }
    }
}

// =============================================================================
// Domain binding
// =============================================================================

/// The default domain is unset and the fallible read says so.
#[test]
fn unset_domain_is_an_error_to_require() {
    let config = app_config();
    assert!(!config.is_domain_set());
    assert_eq!(config.require_domain(), Err(ConfigError::DomainNotSet));
}

/// Binding a domain yields a new value; the shared instance is untouched.
#[test]
fn binding_a_domain_leaves_the_shared_instance_untouched() {
    let bound = app_config().clone().with_domain("app.example.com").unwrap();

    assert_eq!(bound.require_domain(), Ok("app.example.com"));
    assert!(!app_config().is_domain_set());

    // Everything except the domain is carried over unchanged.
    assert_eq!(bound.platforms, app_config().platforms);
    assert_eq!(
        bound.show_indicator_when_page_change,
        app_config().show_indicator_when_page_change
    );
}

/// A blank domain cannot be bound.
#[test]
fn blank_domain_is_rejected() {
    assert_eq!(
        AppConfig::default().with_domain("   "),
        Err(ConfigError::EmptyDomain)
    );
}

// =============================================================================
// Document shape
// =============================================================================

/// The serialized document uses camelCase key names throughout.
#[test]
fn serialized_document_uses_camel_case_keys() {
    let json = serde_json::to_value(AppConfig::default()).unwrap();

    assert_eq!(json["platforms"]["mobile"]["recordPosition"], true);
    assert_eq!(
        json["platforms"]["ios"]["pageTransition"],
        "fade-right-transition"
    );
    assert_eq!(
        json["platforms"]["android"]["pageTransition"],
        "zoom-transition"
    );
    assert_eq!(json["showIndicatorWhenPageChange"], false);
    assert_eq!(json["domain"], "");
}

/// A partial document deserializes with the built-in defaults filling
/// every unspecified field.
#[test]
fn partial_document_falls_back_to_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
        domain = "app.example.com"

        [platforms.android]
        pageTransition = "slide-up-transition"
        "#,
    )
    .unwrap();

    assert_eq!(config.require_domain(), Ok("app.example.com"));
    assert_eq!(
        config.page_transition(Platform::Android),
        Some("slide-up-transition")
    );

    // Unspecified sections keep the built-in values.
    assert_eq!(
        config.page_transition(Platform::Ios),
        Some("fade-right-transition")
    );
    assert!(config.record_position(Platform::Mobile));
    assert!(!config.show_indicator_when_page_change);
}
