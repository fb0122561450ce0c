// Load i18n translations
rust_i18n::i18n!("locales", fallback = "en");

mod cli;

use clap::Parser;
use cli::{Cli, Commands, run_interactive};
use locale_router::models::Route;
use locale_router::services::{
    ConfigService, DocumentElement, FileStore, FixedLanguageDetector, HtmlDocument,
    KeyValueStore, LanguageDetector, LocaleResolver, LocaleRouter, MemoryStore,
    SystemEnv, SystemLanguageDetector, was_redirected,
};
use locale_router::utils::{i18n, logger};
use rust_i18n::t;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_service = ConfigService::new()?;
    let settings = config_service.load_settings()?;
    logger::init(&settings.log_level);

    let config = match config_service.locale_config(&SystemEnv) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(2);
        }
    };

    let store: Arc<dyn KeyValueStore> = if cli.memory {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::new(config_service.storage_file()))
    };
    let detector: Arc<dyn LanguageDetector> = match &cli.lang {
        Some(tag) => Arc::new(FixedLanguageDetector::new(tag.clone())),
        None => Arc::new(SystemLanguageDetector),
    };
    let document = HtmlDocument::new();

    let resolver = LocaleResolver::new(config, store, detector, Arc::new(document.clone()));
    resolver.initialize().await?;
    let _translations = i18n::bind_translations(resolver.context());

    tracing::info!("Current language: {}", resolver.current_locale());

    let router = LocaleRouter::new(resolver);
    let resolver = router.resolver();

    if cli.interactive {
        return run_interactive(&router).await;
    }

    match cli.command.unwrap_or(Commands::Current) {
        Commands::Current => {
            println!("{}", t!("current.locale", locale = resolver.current_locale().as_str()));
        }
        Commands::Supported => {
            let current = resolver.current_locale();
            for locale in resolver.supported_locales() {
                let marker = if *locale == current { "*" } else { " " };
                let name = i18n::display_name(locale);
                println!("{} {:<8} {}", marker, locale, name);
            }
        }
        Commands::Guess => {
            let user = resolver.user_locale();
            let persisted = resolver.persisted_locale().await?;
            println!("{}", t!("guess.user", locale = user.locale.as_str(), language = user.locale_no_region.as_str()));
            match persisted {
                Some(locale) => println!("{}", t!("guess.persisted", locale = locale.as_str())),
                None => println!("{}", t!("guess.no_persisted")),
            }
            println!("{}", t!("guess.result", locale = resolver.guess_default_locale().await?.as_str()));
        }
        Commands::Switch { locale } => match router.change_locale(&locale).await {
            Ok(_) => println!("{}", t!("switch.done", locale = locale.as_str())),
            Err(e) => {
                eprintln!("{}", e.user_message());
                std::process::exit(1);
            }
        },
        Commands::Navigate { path } => {
            let requested = Route::from_path(&path)?;
            let route = router.navigate(requested.clone()).await?;
            if was_redirected(&requested, &route) {
                println!("{}", t!("navigate.redirected", from = path.as_str(), to = route.to_path().as_str()));
            } else {
                println!("{}", t!("navigate.done", to = route.to_path().as_str()));
            }
            if let Some(lang) = document.lang().await? {
                tracing::debug!("Document language: {}", lang);
            }
        }
        Commands::Link { path } => {
            let route = resolver.i18n_route(&Route::new().with_path(path));
            println!("{}", route.to_path());
        }
    }

    Ok(())
}
