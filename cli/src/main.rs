//! CLI entrypoint for Prompt Compass
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use compass_application::{
    CatalogSource, LIMIT_RANGE, RecommendPromptsInput, RecommendPromptsUseCase,
};
use compass_infrastructure::{BuiltinCatalog, ConfigLoader, FileCatalog, FileConfig};
use compass_presentation::{Cli, ConsoleFormatter, OutputFormat, PromptRepl, set_color_enabled};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Prompt Compass");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    if !config.output.color {
        set_color_enabled(false);
    }

    // === Dependency Injection ===
    // Create the catalog adapter (file-backed if configured, built-in otherwise)
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let catalog: Arc<dyn CatalogSource> = match catalog_path {
        Some(path) => Arc::new(FileCatalog::new(path)),
        None => Arc::new(BuiltinCatalog::new()),
    };
    info!("Using {}", catalog.describe());

    if cli.list_domains {
        let loaded = catalog.load()?;
        let mut domains: Vec<String> = loaded.topics.domains().map(str::to_string).collect();
        domains.sort_unstable();
        for domain in domains {
            println!("{}", domain);
        }
        return Ok(());
    }

    let limit = resolve_limit(&cli, &config)?;

    // Interactive mode
    if cli.interactive {
        let mut repl = PromptRepl::new(catalog)
            .with_banner(!cli.quiet && config.repl.show_banner)
            .with_limit(limit)
            .with_history_file(config.repl.history_file.clone());

        repl.run()?;
        return Ok(());
    }

    // One-shot mode - domain is required
    let domain = match cli.domain.clone().or_else(|| config.recommend.domain.clone()) {
        Some(d) => d,
        None => bail!("Domain is required. Use --interactive for interactive mode."),
    };

    let existing_prompts = collect_existing_prompts(&cli)?;

    // Build input
    let mut input = RecommendPromptsInput::new(domain, existing_prompts);
    if let Some(limit) = limit {
        input = input.with_limit(limit);
    }

    // Create use case with the injected catalog
    let use_case = RecommendPromptsUseCase::new(catalog);
    let output = use_case.execute(input)?;

    // Output results
    let format = cli
        .output
        .or_else(|| {
            config
                .output
                .format
                .as_deref()
                .and_then(OutputFormat::from_config)
        })
        .unwrap_or(if cli.quiet {
            OutputFormat::Compact
        } else {
            OutputFormat::Full
        });

    let rendered = match format {
        OutputFormat::Full => ConsoleFormatter::format(&output),
        OutputFormat::Compact => ConsoleFormatter::format_compact(&output),
        OutputFormat::Json => ConsoleFormatter::format_json(&output),
    };

    println!("{}", rendered);

    Ok(())
}

/// Resolve the suggestion limit from CLI and config, enforcing the
/// input-boundary range. `None` lets the use case apply its default.
fn resolve_limit(cli: &Cli, config: &FileConfig) -> Result<Option<usize>> {
    let limit = cli.limit.or(config.recommend.limit);
    if let Some(limit) = limit {
        if !LIMIT_RANGE.contains(&limit) {
            bail!(
                "Limit must be between {} and {}, got {}",
                LIMIT_RANGE.start(),
                LIMIT_RANGE.end(),
                limit
            );
        }
    }
    Ok(limit)
}

/// Collect existing prompts from the `--prompts` file (or stdin) and the
/// repeatable `--existing` flags. One prompt per line, blanks dropped.
fn collect_existing_prompts(cli: &Cli) -> Result<Vec<String>> {
    let mut prompts = Vec::new();

    if let Some(path) = &cli.prompts {
        let text = if path == &PathBuf::from("-") {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read prompts from stdin")?;
            buffer
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read prompts file {}", path.display()))?
        };
        prompts.extend(split_prompt_lines(&text));
    }

    prompts.extend(
        cli.existing
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string),
    );

    Ok(prompts)
}

fn split_prompt_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
