//! Interactive mode (Read-Eval-Print Loop)
//!
//! Mirrors the one-shot flow as a session: the user maintains a list of
//! existing prompts and a suggestion limit, then enters a domain to get
//! recommendations. Free-text input is the domain; everything else is a
//! slash command.

use crate::ConsoleFormatter;
use compass_application::{
    CatalogSource, LIMIT_RANGE, RecommendPromptsInput, RecommendPromptsUseCase,
};
use compass_domain::util::truncate_ellipsis;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Interactive recommendation REPL
pub struct PromptRepl {
    use_case: RecommendPromptsUseCase,
    catalog: Arc<dyn CatalogSource>,
    prompts: Vec<String>,
    limit: Option<usize>,
    show_banner: bool,
    history_file: Option<PathBuf>,
}

impl PromptRepl {
    /// Create a new REPL. The prompt list starts prefilled with the
    /// catalog's sample prompts, matching the one-shot default experience.
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        let prompts = catalog.sample_prompts();
        Self {
            use_case: RecommendPromptsUseCase::new(catalog.clone()),
            catalog,
            prompts,
            limit: None,
            show_banner: true,
            history_file: None,
        }
    }

    /// Set whether to show the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Set the initial suggestion limit
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("prompt-compass").join("history.txt"))
        });

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.show_banner {
            self.print_welcome();
        }

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Free text is the domain to recommend for
                    self.process_domain(line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Prompt Compass - Interactive Mode     │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Catalog: {}", self.catalog.describe());
        println!("Existing prompts: {}", self.prompts.len());
        println!();
        println!("Enter a domain (e.g. itstelepathic.com) to get suggestions.");
        println!();
        println!("Commands:");
        println!("  /add <prompt>  - Add an existing prompt");
        println!("  /prompts       - List existing prompts");
        println!("  /limit <n>     - Set suggestion limit");
        println!("  /domains       - List catalog domains");
        println!("  /help          - Show all commands");
        println!("  /quit          - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        let (name, rest) = match cmd.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (cmd, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /add <prompt>    - Add an existing prompt");
                println!("  /prompts         - List existing prompts");
                println!("  /clear           - Remove all existing prompts");
                println!("  /reset           - Restore the sample prompts and default limit");
                println!("  /limit <n>       - Set suggestion limit (1-10)");
                println!("  /domains         - List catalog domains");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit");
                println!();
            }
            "/add" => {
                if rest.is_empty() {
                    println!("Usage: /add <prompt>");
                } else {
                    self.prompts.push(rest.to_string());
                    println!("Added. {} existing prompts.", self.prompts.len());
                }
            }
            "/prompts" => {
                println!();
                if self.prompts.is_empty() {
                    println!("No existing prompts.");
                } else {
                    println!("Existing prompts:");
                    for prompt in &self.prompts {
                        println!("  - {}", truncate_ellipsis(prompt, 72));
                    }
                }
                println!();
            }
            "/clear" => {
                self.prompts.clear();
                println!("Cleared existing prompts.");
            }
            "/reset" => {
                self.prompts = self.catalog.sample_prompts();
                self.limit = None;
                println!(
                    "Restored {} sample prompts and the default limit.",
                    self.prompts.len()
                );
            }
            "/limit" => match rest.parse::<usize>() {
                Ok(limit) if LIMIT_RANGE.contains(&limit) => {
                    self.limit = Some(limit);
                    println!("Limit set to {}.", limit);
                }
                _ => {
                    println!(
                        "Limit must be a number between {} and {}.",
                        LIMIT_RANGE.start(),
                        LIMIT_RANGE.end()
                    );
                }
            },
            "/domains" => match self.catalog.load() {
                Ok(catalog) => {
                    let mut domains: Vec<&str> = catalog.topics.domains().collect();
                    domains.sort_unstable();
                    println!();
                    println!("Catalog domains:");
                    for domain in domains {
                        println!("  - {}", domain);
                    }
                    println!();
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                }
            },
            _ => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }

        false
    }

    fn process_domain(&self, domain: &str) {
        println!();

        let mut input = RecommendPromptsInput::new(domain, self.prompts.clone());
        if let Some(limit) = self.limit {
            input = input.with_limit(limit);
        }

        match self.use_case.execute(input) {
            Ok(output) => {
                println!("{}", ConsoleFormatter::format(&output));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
