use clap::{Parser, Subcommand};

/// Locale Router - locale negotiation and route-locale synchronization
#[derive(Parser, Debug)]
#[command(name = "locale-router")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pick the language interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Preferred language to report instead of the system locale
    #[arg(short, long, value_name = "TAG")]
    pub lang: Option<String>,

    /// Keep the persisted locale in memory instead of the storage file
    #[arg(long)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the active locale
    Current,

    /// List supported locales
    Supported,

    /// Show how the locale would be guessed
    Guess,

    /// Switch to a supported locale and persist the choice
    Switch {
        /// Locale tag, e.g. "fr" or "en-US"
        locale: String,
    },

    /// Navigate to a path such as /fr/about through the locale guard
    Navigate {
        /// Path starting with '/'
        path: String,
    },

    /// Print a link to a path carrying the active locale
    Link {
        /// Path below the locale segment, e.g. "products/7"
        path: String,
    },
}
