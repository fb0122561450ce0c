use crate::models::Locale;
use crate::utils::error::{LocaleError, Result};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the fallback locale
pub const DEFAULT_LOCALE_ENV: &str = "DEFAULT_LOCALE";

/// Environment variable holding the comma-separated supported locales
pub const SUPPORTED_LOCALES_ENV: &str = "SUPPORTED_LOCALES";

/// Qualifier, organization and application name for the platform config directory
pub const PROJECT_DIRS_ID: (&str, &str, &str) = ("dev", "locale-router", "locale-router");

/// Read-only access to environment variables
pub trait EnvProvider {
    fn var(&self, key: &str) -> Option<String>;
}

/// Process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of variables, for embedding hosts and tests
#[derive(Debug, Default, Clone)]
pub struct StaticEnv(HashMap<String, String>);

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl EnvProvider for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// Locale configuration, parsed and validated once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    default_locale: Locale,
    supported_locales: Vec<Locale>,
}

impl LocaleConfig {
    /// Build from a default tag and a comma-separated list of supported tags
    pub fn new(default_locale: &str, supported_locales: &str) -> Result<Self> {
        let supported_locales = Self::parse_supported(supported_locales)?;

        let default_locale = Locale::parse(default_locale).map_err(|_| {
            LocaleError::Config(format!("default locale {:?} is not a valid tag", default_locale))
        })?;

        if !supported_locales.contains(&default_locale) {
            return Err(LocaleError::Config(format!(
                "default locale {} is not in the supported list",
                default_locale
            )));
        }

        Ok(Self {
            default_locale,
            supported_locales,
        })
    }

    /// Environment first, then the settings file
    ///
    /// Blank variables count as unset.
    pub fn from_sources(env: &impl EnvProvider, settings: &LocaleSettings) -> Result<Self> {
        let default_locale = env
            .var(DEFAULT_LOCALE_ENV)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| settings.default_locale.clone())
            .ok_or_else(|| {
                LocaleError::Config(format!("{} is not set", DEFAULT_LOCALE_ENV))
            })?;

        let supported_locales = env
            .var(SUPPORTED_LOCALES_ENV)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| settings.supported_locales.clone())
            .ok_or_else(|| {
                LocaleError::Config(format!("{} is not set", SUPPORTED_LOCALES_ENV))
            })?;

        let config = Self::new(&default_locale, &supported_locales)?;
        tracing::info!(
            "Locale config: default={}, supported=[{}]",
            config.default_locale,
            config.supported_locales.iter().map(Locale::as_str).collect::<Vec<_>>().join(", ")
        );
        Ok(config)
    }

    pub fn from_env(env: &impl EnvProvider) -> Result<Self> {
        Self::from_sources(env, &LocaleSettings::default())
    }

    /// Split a comma-separated list into locales
    ///
    /// Entries are trimmed; empty or malformed entries are an error and
    /// duplicates are dropped, keeping the first occurrence.
    pub fn parse_supported(raw: &str) -> Result<Vec<Locale>> {
        let mut locales: Vec<Locale> = Vec::new();

        for (index, entry) in raw.split(',').enumerate() {
            if entry.trim().is_empty() {
                return Err(LocaleError::Config(format!(
                    "supported locale #{} is empty in {:?}",
                    index + 1,
                    raw
                )));
            }

            let locale = Locale::parse(entry).map_err(|_| {
                LocaleError::Config(format!("supported locale {:?} is not a valid tag", entry))
            })?;

            if locales.contains(&locale) {
                tracing::warn!("Ignoring duplicate supported locale: {}", locale);
                continue;
            }
            locales.push(locale);
        }

        Ok(locales)
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn supported_locales(&self) -> &[Locale] {
        &self.supported_locales
    }

    /// Supported entry equal to `tag`, if any
    pub fn find_supported(&self, tag: &str) -> Option<&Locale> {
        self.supported_locales.iter().find(|l| l.as_str() == tag)
    }

    pub fn is_supported(&self, tag: &str) -> bool {
        self.find_supported(tag).is_some()
    }
}

/// Service for locating and persisting the settings file
pub struct ConfigService {
    config_dir: PathBuf,
}

impl ConfigService {
    /// Create a new config service with the platform config directory
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
            tracing::info!("Created config directory: {:?}", config_dir);
        }

        Ok(Self { config_dir })
    }

    /// Create a config service with custom directory
    pub fn with_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }
        Ok(Self { config_dir })
    }

    fn get_config_dir() -> Result<PathBuf> {
        let (qualifier, organization, application) = PROJECT_DIRS_ID;
        ProjectDirs::from(qualifier, organization, application)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| LocaleError::Config("Failed to get config directory".to_string()))
    }

    fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    /// Path of the key-value storage file
    pub fn storage_file(&self) -> PathBuf {
        self.config_dir.join("storage.json")
    }

    /// Load settings, or defaults when no file exists
    pub fn load_settings(&self) -> Result<LocaleSettings> {
        let path = self.settings_file();

        if !path.exists() {
            tracing::info!("No settings file found, using defaults");
            return Ok(LocaleSettings::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: LocaleSettings = toml::from_str(&content)?;

        tracing::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &LocaleSettings) -> Result<()> {
        let content = toml::to_string_pretty(settings)?;

        let path = self.settings_file();
        fs::write(&path, content)?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Resolve the locale configuration from the environment and the settings file
    pub fn locale_config(&self, env: &impl EnvProvider) -> Result<LocaleConfig> {
        let settings = self.load_settings()?;
        LocaleConfig::from_sources(env, &settings)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

/// Contents of `settings.toml`
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocaleSettings {
    /// Fallback locale, e.g. "en"
    #[serde(default)]
    pub default_locale: Option<String>,

    /// Comma-separated supported locales, e.g. "en,fr,de"
    #[serde(default)]
    pub supported_locales: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            default_locale: None,
            supported_locales: None,
            log_level: default_log_level(),
        }
    }
}
