use crate::models::{NavigationDecision, Route};
use crate::services::resolver::LocaleResolver;
use crate::utils::error::{LocaleError, Result};
use tokio::sync::Mutex;

/// Redirects followed for a single navigation before giving up
pub const MAX_REDIRECTS: usize = 3;

/// Whether the guard moved a navigation to another locale
///
/// Only the locale is compared; path normalization alone is not a redirect.
pub fn was_redirected(requested: &Route, resolved: &Route) -> bool {
    requested.locale() != resolved.locale()
}

/// Minimal host router that runs the locale guard on every navigation
pub struct LocaleRouter {
    resolver: LocaleResolver,
    current: Mutex<Option<Route>>,
}

impl LocaleRouter {
    pub fn new(resolver: LocaleResolver) -> Self {
        Self {
            resolver,
            current: Mutex::new(None),
        }
    }

    pub fn resolver(&self) -> &LocaleResolver {
        &self.resolver
    }

    /// Route the last navigation resolved to
    pub async fn current_route(&self) -> Option<Route> {
        self.current.lock().await.clone()
    }

    /// Navigate to `to`, following guard redirects, and return the resolved route
    ///
    /// Navigations are serialized: a second call waits until the first resolves.
    pub async fn navigate(&self, to: Route) -> Result<Route> {
        let mut current = self.current.lock().await;
        let mut target = to;

        for attempt in 0..=MAX_REDIRECTS {
            match self.resolver.route_middleware(&target, current.as_ref()).await? {
                NavigationDecision::Proceed => {
                    tracing::info!("Navigated to {}", target);
                    *current = Some(target.clone());
                    return Ok(target);
                }
                NavigationDecision::Redirect(redirect) => {
                    tracing::debug!(
                        "Redirect {} of {}: {} -> {}",
                        attempt + 1,
                        MAX_REDIRECTS,
                        target,
                        redirect
                    );
                    target = redirect;
                }
            }
        }

        tracing::error!("Navigation to {} exceeded {} redirects", target, MAX_REDIRECTS);
        Err(LocaleError::RedirectLoop(MAX_REDIRECTS))
    }

    /// Navigate by path, e.g. `/fr/about`
    pub async fn navigate_path(&self, path: &str) -> Result<Route> {
        let route = Route::from_path(path)?;
        self.navigate(route).await
    }

    /// Switch language and move the current route to the new locale
    pub async fn change_locale(&self, tag: &str) -> Result<Route> {
        if !self.resolver.is_locale_supported(Some(tag)) {
            return Err(LocaleError::InvalidLocale(tag.to_string()));
        }

        let target = self
            .current_route()
            .await
            .unwrap_or_default()
            .with_locale(tag);
        self.navigate(target).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config_service::LocaleConfig;
    use crate::services::detector_service::FixedLanguageDetector;
    use crate::services::document_service::HtmlDocument;
    use crate::services::storage_service::MemoryStore;
    use std::sync::Arc;

    fn router(user: &str) -> LocaleRouter {
        let resolver = LocaleResolver::new(
            LocaleConfig::new("en", "en,fr,de").unwrap(),
            Arc::new(MemoryStore::new()),
            Arc::new(FixedLanguageDetector::new(user)),
            Arc::new(HtmlDocument::new()),
        );
        LocaleRouter::new(resolver)
    }

    #[tokio::test]
    async fn test_navigate_supported() {
        let router = router("en-US");
        let route = router.navigate_path("/de/about").await.unwrap();

        assert_eq!(route.to_path(), "/de/about");
        assert_eq!(router.resolver().current_locale(), "de");
        assert_eq!(router.current_route().await, Some(route));
    }

    #[tokio::test]
    async fn test_navigate_follows_redirect() {
        let router = router("fr-BE");
        let route = router.navigate_path("/xx/about").await.unwrap();

        assert_eq!(route.to_path(), "/fr/about");
        assert_eq!(router.resolver().current_locale(), "fr");
    }

    #[tokio::test]
    async fn test_trailing_slash_is_not_a_redirect() {
        let router = router("fr-FR");
        let requested = Route::from_path("/fr/about/").unwrap();
        let route = router.navigate(requested.clone()).await.unwrap();

        assert_eq!(route.to_path(), "/fr/about");
        assert!(!was_redirected(&requested, &route));
    }

    #[tokio::test]
    async fn test_unsupported_locale_is_a_redirect() {
        let router = router("de-AT");
        let requested = Route::from_path("/xx/about").unwrap();
        let route = router.navigate(requested.clone()).await.unwrap();

        assert!(was_redirected(&requested, &route));
        assert_eq!(route.locale(), Some("de"));
    }

    #[tokio::test]
    async fn test_change_locale_keeps_path() {
        let router = router("en");
        router.navigate_path("/en/products/7").await.unwrap();

        let route = router.change_locale("fr").await.unwrap();
        assert_eq!(route.to_path(), "/fr/products/7");
    }

    #[tokio::test]
    async fn test_change_locale_rejects_unsupported() {
        let router = router("en");
        assert!(matches!(
            router.change_locale("es").await,
            Err(LocaleError::InvalidLocale(_))
        ));
        assert!(router.current_route().await.is_none());
    }
}
