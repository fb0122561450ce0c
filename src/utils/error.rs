use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid navigation transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: crate::models::NavigationState,
        to: crate::models::NavigationState,
    },

    #[error("Navigation redirected more than {0} times")]
    RedirectLoop(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Settings serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Storage format error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LocaleError>;

impl LocaleError {
    /// Returns a translated, user-facing message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(reason) => rust_i18n::t!("error.config", reason = reason).to_string(),
            Self::InvalidLocale(tag) => rust_i18n::t!("error.invalid_locale", locale = tag).to_string(),
            Self::Storage(reason) => rust_i18n::t!("error.storage", reason = reason).to_string(),
            Self::RedirectLoop(limit) => {
                rust_i18n::t!("error.redirect_loop", limit = limit).to_string()
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LocaleError::InvalidLocale("en US".to_string());
        assert_eq!(err.to_string(), "Invalid locale: \"en US\"");

        let err = LocaleError::RedirectLoop(3);
        assert_eq!(err.to_string(), "Navigation redirected more than 3 times");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LocaleError = io.into();
        assert!(matches!(err, LocaleError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse = toml::from_str::<toml::Table>("key = [").unwrap_err();
        let err: LocaleError = parse.into();
        assert!(matches!(err, LocaleError::TomlDe(_)));
        assert!(err.to_string().starts_with("Settings parse error"));
    }
}
