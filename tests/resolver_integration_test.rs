//! Integration tests for LocaleResolver
//!
//! These tests cover locale resolution order, language switching and the
//! route guard against in-memory storage and document collaborators.

use locale_router::models::{Locale, NavigationDecision, Route, RouteParam, PERSISTED_LOCALE_KEY};
use locale_router::services::{
    DocumentElement, FixedLanguageDetector, HtmlDocument, KeyValueStore, LocaleConfig,
    LocaleResolver, MemoryStore,
};
use locale_router::state::LocaleContext;
use std::sync::Arc;

struct Fixture {
    resolver: LocaleResolver,
    store: MemoryStore,
    document: HtmlDocument,
}

/// Helper to build a resolver over in-memory collaborators
fn create_fixture(default: &str, supported: &str, user_language: Option<&str>) -> Fixture {
    let store = MemoryStore::new();
    let document = HtmlDocument::new();
    let detector = user_language
        .map(FixedLanguageDetector::new)
        .unwrap_or_else(FixedLanguageDetector::none);

    let resolver = LocaleResolver::new(
        LocaleConfig::new(default, supported).expect("valid config"),
        Arc::new(store.clone()),
        Arc::new(detector),
        Arc::new(document.clone()),
    );

    Fixture {
        resolver,
        store,
        document,
    }
}

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).expect("valid tag")
}

// =============================================================================
// Supported Locale Tests
// =============================================================================

#[test]
fn test_every_supported_locale_is_supported() {
    let fx = create_fixture("en", "en,fr,de-AT", None);

    for l in fx.resolver.supported_locales() {
        assert!(fx.resolver.is_locale_supported(Some(l.as_str())));
    }
    assert!(!fx.resolver.is_locale_supported(Some("de")));
    assert!(!fx.resolver.is_locale_supported(Some("es")));
    assert!(!fx.resolver.is_locale_supported(None));
}

#[test]
fn test_default_locale() {
    let fx = create_fixture("fr", "en,fr", None);
    assert_eq!(fx.resolver.default_locale(), &locale("fr"));
    assert_eq!(fx.resolver.current_locale(), locale("fr"));
}

#[test]
fn test_user_locale_forms() {
    let fx = create_fixture("en", "en", Some("de-DE"));
    let user = fx.resolver.user_locale();
    assert_eq!(user.locale, "de-DE");
    assert_eq!(user.locale_no_region, "de");
}

// =============================================================================
// Resolution Order Tests
// =============================================================================

#[tokio::test]
async fn test_guess_falls_back_to_default() {
    let fx = create_fixture("en", "en,fr", Some("ja-JP"));
    assert_eq!(fx.resolver.guess_default_locale().await.unwrap(), locale("en"));
}

#[tokio::test]
async fn test_guess_prefers_persisted_locale() {
    let fx = create_fixture("en", "en,fr", Some("en-US"));
    fx.store.set(PERSISTED_LOCALE_KEY, "fr").await.unwrap();

    assert_eq!(fx.resolver.persisted_locale().await.unwrap(), Some(locale("fr")));
    assert_eq!(fx.resolver.guess_default_locale().await.unwrap(), locale("fr"));
}

#[tokio::test]
async fn test_guess_uses_region_stripped_preference() {
    let fx = create_fixture("en", "en,de", Some("de-DE"));
    assert_eq!(fx.resolver.guess_default_locale().await.unwrap(), locale("de"));
}

#[tokio::test]
async fn test_guess_skips_unsupported_persisted_locale() {
    let fx = create_fixture("en", "en,de", Some("de-CH"));
    fx.store.set(PERSISTED_LOCALE_KEY, "it").await.unwrap();

    assert_eq!(fx.resolver.guess_default_locale().await.unwrap(), locale("de"));
}

// =============================================================================
// Switching Tests
// =============================================================================

#[tokio::test]
async fn test_switch_language_updates_everything() {
    let fx = create_fixture("en", "en,fr", None);

    fx.resolver.switch_language(locale("fr")).await.unwrap();

    assert_eq!(fx.resolver.current_locale(), locale("fr"));
    assert_eq!(
        fx.store.get(PERSISTED_LOCALE_KEY).await.unwrap().as_deref(),
        Some("fr")
    );
    assert_eq!(fx.document.lang().await.unwrap().as_deref(), Some("fr"));
}

#[tokio::test]
async fn test_shared_context_sees_switch() {
    let context = LocaleContext::new(locale("en"));
    let resolver = LocaleResolver::with_context(
        LocaleConfig::new("en", "en,fr").unwrap(),
        context.clone(),
        Arc::new(MemoryStore::new()),
        Arc::new(FixedLanguageDetector::none()),
        Arc::new(HtmlDocument::new()),
    );
    let mut rx = context.subscribe();

    resolver.switch_language(locale("fr")).await.unwrap();

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), locale("fr"));
    assert_eq!(context.current(), locale("fr"));
}

// =============================================================================
// Route Tests
// =============================================================================

#[test]
fn test_i18n_route_injects_active_locale() {
    let fx = create_fixture("en", "en,fr", None);
    let target = Route::new().with_param("id", 7).unwrap();

    let route = fx.resolver.i18n_route(&target);

    let params = route.all_params();
    assert_eq!(params.len(), 2);
    assert_eq!(params.get("locale"), Some(&RouteParam::from("en")));
    assert_eq!(params.get("id"), Some(&RouteParam::from(7)));
}

#[tokio::test]
async fn test_middleware_redirects_unsupported_locale() {
    let fx = create_fixture("en", "en,fr", Some("fr-FR"));
    let to = Route::named("about").with_locale("xx");

    let decision = fx.resolver.route_middleware(&to, None).await.unwrap();
    let expected = fx.resolver.guess_default_locale().await.unwrap();

    match decision {
        NavigationDecision::Redirect(target) => {
            assert_eq!(target.locale(), Some(expected.as_str()));
            assert_eq!(target.name.as_deref(), Some("about"));
        }
        NavigationDecision::Proceed => panic!("expected a redirect"),
    }

    // No switch happened
    assert_eq!(fx.store.get(PERSISTED_LOCALE_KEY).await.unwrap(), None);
    assert_eq!(fx.document.lang().await.unwrap(), None);
    assert_eq!(fx.resolver.current_locale(), locale("en"));
}

#[tokio::test]
async fn test_middleware_switches_supported_locale() {
    let fx = create_fixture("fr", "en,fr", None);
    let from = Route::named("home").with_locale("fr");
    let to = Route::named("home").with_locale("en");

    let decision = fx.resolver.route_middleware(&to, Some(&from)).await.unwrap();

    assert_eq!(decision, NavigationDecision::Proceed);
    assert_eq!(fx.resolver.current_locale(), locale("en"));
    assert_eq!(
        fx.store.get(PERSISTED_LOCALE_KEY).await.unwrap().as_deref(),
        Some("en")
    );
    assert_eq!(fx.document.lang().await.unwrap().as_deref(), Some("en"));
}
