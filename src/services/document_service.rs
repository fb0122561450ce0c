use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The document's root element, as far as locale handling needs it
#[async_trait]
pub trait DocumentElement: Send + Sync {
    /// Write the root element's `lang` attribute
    async fn set_lang(&self, lang: &str) -> Result<()>;

    async fn lang(&self) -> Result<Option<String>>;
}

/// In-memory root element
#[derive(Debug, Default, Clone)]
pub struct HtmlDocument {
    lang: Arc<RwLock<Option<String>>>,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentElement for HtmlDocument {
    async fn set_lang(&self, lang: &str) -> Result<()> {
        *self.lang.write().await = Some(lang.to_string());
        tracing::trace!("<html lang=\"{}\">", lang);
        Ok(())
    }

    async fn lang(&self) -> Result<Option<String>> {
        Ok(self.lang.read().await.clone())
    }
}
