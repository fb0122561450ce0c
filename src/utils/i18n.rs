use crate::models::Locale;
use crate::state::LocaleContext;
use tokio::task::JoinHandle;

/// Keep the translation backend on the context's active locale
///
/// Applies the current locale immediately, then follows every change until
/// the context is dropped.
pub fn bind_translations(context: &LocaleContext) -> JoinHandle<()> {
    let mut rx = context.subscribe();
    apply_locale(&rx.borrow_and_update());

    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let locale = rx.borrow_and_update().clone();
            apply_locale(&locale);
        }
        tracing::debug!("Locale context closed, translation binding stopped");
    })
}

fn apply_locale(locale: &Locale) {
    rust_i18n::set_locale(locale.as_str());
    tracing::debug!("Translations set to: {}", locale);
}

/// Human-readable name for a locale, in that locale's own language when known
pub fn display_name(locale: &Locale) -> &'static str {
    match locale.as_str() {
        "en" | "en-US" | "en-GB" => "English",
        "fr" | "fr-FR" | "fr-CA" => "Français",
        "de" | "de-DE" => "Deutsch",
        "es" | "es-ES" => "Español",
        "it" => "Italiano",
        "ja" => "日本語",
        "zh-CN" => "简体中文",
        _ => match locale.without_region() {
            "en" => "English",
            "fr" => "Français",
            "de" => "Deutsch",
            "es" => "Español",
            "zh" => "中文",
            _ => "",
        },
    }
}
