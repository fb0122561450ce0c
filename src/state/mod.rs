// State management module
pub mod locale_context;

pub use locale_context::LocaleContext;
