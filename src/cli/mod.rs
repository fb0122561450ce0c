pub mod commands;
pub mod interactive;

pub use commands::{Cli, Commands};
pub use interactive::run_interactive;
