/// Source of the user's preferred language tag
pub trait LanguageDetector: Send + Sync {
    fn preferred_language(&self) -> Option<String>;
}

/// Operating-system language, via `sys-locale`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLanguageDetector;

impl LanguageDetector for SystemLanguageDetector {
    fn preferred_language(&self) -> Option<String> {
        let raw = sys_locale::get_locale()?;
        let normalized = normalize_system_tag(&raw);
        tracing::debug!("System locale {:?} normalized to {:?}", raw, normalized);
        normalized
    }
}

/// A language reported by the host, e.g. a browser's `navigator.language`
#[derive(Debug, Default, Clone)]
pub struct FixedLanguageDetector(Option<String>);

impl FixedLanguageDetector {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl LanguageDetector for FixedLanguageDetector {
    fn preferred_language(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Turn POSIX forms like `de_DE.UTF-8` or `sr_RS@latin` into `de-DE` / `sr-RS`
pub fn normalize_system_tag(raw: &str) -> Option<String> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() || stripped == "C" || stripped == "POSIX" {
        return None;
    }
    Some(stripped.replace('_', "-"))
}
