use crate::models::{
    Locale, Navigation, NavigationDecision, NavigationState, Route, UserLocale,
    PERSISTED_LOCALE_KEY,
};
use crate::services::config_service::LocaleConfig;
use crate::services::detector_service::LanguageDetector;
use crate::services::document_service::DocumentElement;
use crate::services::storage_service::KeyValueStore;
use crate::state::LocaleContext;
use crate::utils::error::Result;
use std::sync::Arc;

/// Decides which locale is active and keeps routes in line with it
#[derive(Clone)]
pub struct LocaleResolver {
    config: Arc<LocaleConfig>,
    context: LocaleContext,
    store: Arc<dyn KeyValueStore>,
    detector: Arc<dyn LanguageDetector>,
    document: Arc<dyn DocumentElement>,
}

impl LocaleResolver {
    /// Create a resolver whose active locale starts at the configured default
    ///
    /// Call [`LocaleResolver::initialize`] to apply the full resolution order.
    pub fn new(
        config: LocaleConfig,
        store: Arc<dyn KeyValueStore>,
        detector: Arc<dyn LanguageDetector>,
        document: Arc<dyn DocumentElement>,
    ) -> Self {
        let context = LocaleContext::new(config.default_locale().clone());
        Self::with_context(config, context, store, detector, document)
    }

    /// Create a resolver that shares an existing locale context
    pub fn with_context(
        config: LocaleConfig,
        context: LocaleContext,
        store: Arc<dyn KeyValueStore>,
        detector: Arc<dyn LanguageDetector>,
        document: Arc<dyn DocumentElement>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            context,
            store,
            detector,
            document,
        }
    }

    /// Set the active locale from the resolution order, without persisting it
    pub async fn initialize(&self) -> Result<Locale> {
        let locale = self.guess_default_locale().await?;
        self.set_current_locale(locale.clone());
        self.document.set_lang(locale.as_str()).await?;
        tracing::info!("Initial locale: {}", locale);
        Ok(locale)
    }

    pub fn context(&self) -> &LocaleContext {
        &self.context
    }

    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    pub fn current_locale(&self) -> Locale {
        self.context.current()
    }

    /// Set the active locale; the caller is responsible for supportedness
    pub fn set_current_locale(&self, locale: Locale) {
        self.context.set(locale);
    }

    pub fn default_locale(&self) -> &Locale {
        self.config.default_locale()
    }

    pub fn supported_locales(&self) -> &[Locale] {
        self.config.supported_locales()
    }

    pub fn is_locale_supported(&self, locale: Option<&str>) -> bool {
        locale.is_some_and(|tag| self.config.is_supported(tag))
    }

    /// Preferred language reported by the detector, or the default locale
    pub fn user_locale(&self) -> UserLocale {
        let tag = self
            .detector
            .preferred_language()
            .unwrap_or_else(|| self.default_locale().to_string());
        UserLocale::new(tag)
    }

    /// Stored locale, if there is one and it is still supported
    ///
    /// An unsupported entry is left in storage; the next switch overwrites it.
    pub async fn persisted_locale(&self) -> Result<Option<Locale>> {
        let stored = self.store.get(PERSISTED_LOCALE_KEY).await?;

        match stored.as_deref().and_then(|tag| self.config.find_supported(tag)) {
            Some(locale) => Ok(Some(locale.clone())),
            None => {
                if let Some(tag) = &stored {
                    tracing::warn!("Ignoring persisted locale {:?}: not supported", tag);
                }
                Ok(None)
            }
        }
    }

    /// Persisted locale, then the user's full tag, then its language, then the default
    pub async fn guess_default_locale(&self) -> Result<Locale> {
        if let Some(locale) = self.persisted_locale().await? {
            tracing::debug!("Guessed locale {} from storage", locale);
            return Ok(locale);
        }

        let user = self.user_locale();
        if let Some(locale) = self.config.find_supported(&user.locale) {
            tracing::debug!("Guessed locale {} from user preference", locale);
            return Ok(locale.clone());
        }
        if let Some(locale) = self.config.find_supported(&user.locale_no_region) {
            tracing::debug!("Guessed locale {} from user language {}", locale, user.locale);
            return Ok(locale.clone());
        }

        tracing::debug!("Falling back to default locale {}", self.default_locale());
        Ok(self.default_locale().clone())
    }

    /// Activate `locale`, mirror it on the document and persist it
    ///
    /// Does not check supportedness; see [`LocaleResolver::is_locale_supported`].
    pub async fn switch_language(&self, locale: Locale) -> Result<()> {
        self.set_current_locale(locale.clone());
        self.document.set_lang(locale.as_str()).await?;
        self.store.set(PERSISTED_LOCALE_KEY, locale.as_str()).await?;

        tracing::info!("Language switched to: {}", locale);
        Ok(())
    }

    /// Copy of `target` carrying the active locale
    pub fn i18n_route(&self, target: &Route) -> Route {
        let mut route = target.clone();
        route.set_locale(self.current_locale().as_str());
        route
    }

    /// Guard run before each navigation resolves
    ///
    /// An unsupported (or missing) destination locale redirects to the same
    /// destination with the guessed locale; otherwise the language is switched
    /// before the navigation may proceed.
    pub async fn route_middleware(
        &self,
        to: &Route,
        from: Option<&Route>,
    ) -> Result<NavigationDecision> {
        let mut navigation = Navigation::new(to.clone(), from.cloned());

        let requested = to.locale().and_then(|tag| self.config.find_supported(tag));
        let decision = match requested {
            None => {
                navigation.advance(NavigationState::Redirecting)?;
                let guessed = self.guess_default_locale().await?;
                tracing::info!(
                    "Locale {:?} is not supported, redirecting to {}",
                    to.locale(),
                    guessed
                );
                NavigationDecision::Redirect(to.clone().with_locale(guessed.as_str()))
            }
            Some(locale) => {
                navigation.advance(NavigationState::Switching)?;
                self.switch_language(locale.clone()).await?;
                NavigationDecision::Proceed
            }
        };

        navigation.advance(NavigationState::Resolved)?;
        Ok(decision)
    }
}
