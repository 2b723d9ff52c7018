//! CLI entrypoint for stencil
//!
//! Loads configuration, builds the root logger and emits one record.

use anyhow::{Result, bail};
use clap::Parser;
use stencil::{ConfigLoader, ErrorValue, FieldKind, FieldPolicy, Metadata};
use stencil_presentation::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with records on stdout
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config_sources {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()?
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    if cli.json {
        config.json = true;
    }
    if cli.no_color {
        config.color = false;
    }
    info!(level = %config.level, json = config.json, "configuration loaded");

    let (Some(level), Some(template)) = (cli.level, cli.template) else {
        bail!("LEVEL and TEMPLATE are required. Use --help for usage.");
    };

    let mut metadata: Metadata = cli.meta.into_iter().collect();
    let mut policy = FieldPolicy::empty();
    for (key, message) in cli.errors {
        metadata.insert(key.clone(), ErrorValue::from_parts(message.clone(), message));
        policy = policy.with(key, FieldKind::Error);
    }

    let mut logger = stencil::from_config(&config)?;
    if let Some(module) = &cli.module {
        logger = logger.module(module);
    }
    if !policy.is_empty() {
        logger = logger.with_formatting(&policy);
    }

    logger.log(level, &template, metadata)?;
    Ok(())
}
