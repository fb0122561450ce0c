pub mod locale;
pub mod navigation;
pub mod route;

// Re-export main types
pub use locale::{Locale, UserLocale, PERSISTED_LOCALE_KEY};
pub use navigation::{Navigation, NavigationDecision, NavigationState};
pub use route::{Route, RouteParam, LOCALE_PARAM};
