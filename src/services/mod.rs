// Services module
pub mod config_service;
pub mod detector_service;
pub mod document_service;
pub mod resolver;
pub mod router_service;
pub mod storage_service;

pub use config_service::{ConfigService, EnvProvider, LocaleConfig, LocaleSettings, StaticEnv, SystemEnv};
pub use detector_service::{FixedLanguageDetector, LanguageDetector, SystemLanguageDetector};
pub use document_service::{DocumentElement, HtmlDocument};
pub use resolver::LocaleResolver;
pub use router_service::{LocaleRouter, MAX_REDIRECTS, was_redirected};
pub use storage_service::{FileStore, KeyValueStore, MemoryStore};
