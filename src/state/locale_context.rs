use crate::models::Locale;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared, observable active locale
///
/// Cloning yields a handle to the same locale. Writers never block readers;
/// last write wins.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    sender: Arc<watch::Sender<Locale>>,
}

impl LocaleContext {
    pub fn new(initial: Locale) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> Locale {
        self.sender.borrow().clone()
    }

    /// Replace the active locale and notify subscribers
    pub fn set(&self, locale: Locale) {
        tracing::debug!("Active locale {} -> {}", self.sender.borrow().as_str(), locale);
        self.sender.send_replace(locale);
    }

    /// Receiver that observes every subsequent change
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.sender.subscribe()
    }
}
