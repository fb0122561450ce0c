use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use locale_router::services::LocaleRouter;
use locale_router::utils::i18n::display_name;
use rust_i18n::t;

/// Let the user pick one of the supported locales
pub async fn run_interactive(router: &LocaleRouter) -> anyhow::Result<()> {
    let resolver = router.resolver();
    let current = resolver.current_locale();

    let items: Vec<String> = resolver
        .supported_locales()
        .iter()
        .map(|locale| match display_name(locale) {
            "" => locale.to_string(),
            name => format!("{} ({})", name, locale),
        })
        .collect();

    let default_index = resolver
        .supported_locales()
        .iter()
        .position(|l| *l == current)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("interactive.prompt").to_string())
        .items(&items)
        .default(default_index)
        .interact()?;

    let chosen = resolver.supported_locales()[selection].clone();
    let route = router.change_locale(chosen.as_str()).await?;

    println!(
        "{} {}",
        style("✓").green().bold(),
        t!("switch.done", locale = chosen.as_str())
    );
    println!("{}", style(route.to_path()).dim());
    Ok(())
}
