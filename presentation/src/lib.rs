//! Presentation layer for prompt-compass
//!
//! This crate contains the CLI definition, console output formatters, and
//! the interactive prompt-collection REPL.

pub mod cli;
pub mod output;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::{ConsoleFormatter, set_color_enabled};
pub use repl::PromptRepl;
