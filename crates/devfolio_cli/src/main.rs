//! devfolio CLI
//!
//! Inspect the portfolio site's locales and dictionaries:
//! - `locale`: resolve language preferences to a supported locale
//! - `t`: look up and format one translation key
//! - `check`: cross-locale completeness of the dictionaries
//! - `meta` / `projects`: localized page metadata and project cards as JSON

mod commands;
mod config;
mod messages;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use devfolio_i18n::Translator;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::DevfolioConfig;

/// Locale and translation tooling for the devfolio site
#[derive(Parser, Debug)]
#[command(name = "devfolio")]
#[command(about = "Locale and translation tooling for the devfolio site")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./devfolio.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Load <code>.json / <code>.yaml dictionaries from this directory
    #[arg(long, global = true)]
    messages: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve language tags and/or an Accept-Language header
    Locale {
        /// Accept-Language header value, tried after TAGS
        #[arg(long)]
        accept_language: Option<String>,

        /// Preferred language tags, most preferred first
        tags: Vec<String>,
    },

    /// Translate a dotted key
    T {
        key: String,

        #[arg(short, long)]
        locale: Option<String>,

        /// Interpolation argument (repeatable)
        #[arg(short, long = "arg", value_name = "NAME=VALUE")]
        args: Vec<String>,
    },

    /// Check every locale carries the same keys
    Check,

    /// Print page metadata as JSON
    Meta {
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Print localized project cards as JSON
    Projects {
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Print the effective configuration
    Config,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_translator(cli: &Cli, config: &DevfolioConfig) -> Result<Translator> {
    let default_locale = &config.i18n.default_locale;
    match cli.messages.as_deref().or(config.i18n.messages_dir.as_deref()) {
        Some(dir) => messages::load_dir(dir, default_locale),
        None => devfolio_content::bundled_translator_with_default(default_locale)
            .context("Failed to load bundled dictionaries"),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = DevfolioConfig::load(cli.config.as_deref(), &cwd)?;
    debug!(?config, "configuration loaded");

    let translator = load_translator(&cli, &config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Locale {
            accept_language,
            tags,
        } => commands::locale(
            translator.registry(),
            tags,
            accept_language.as_deref(),
            &mut out,
        )?,
        Commands::T { key, locale, args } => {
            commands::translate(&translator, key, locale.as_deref(), args, &mut out)?
        }
        Commands::Check => {
            if !commands::check(&translator, &mut out)? {
                out.flush()?;
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Meta { locale } => {
            commands::meta(&translator, &config, locale.as_deref(), &mut out)?
        }
        Commands::Projects { locale } => {
            commands::projects(&translator, locale.as_deref(), &mut out)?
        }
        Commands::Config => commands::show_config(&config, &mut out)?,
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_translate_arguments() {
        let cli = Cli::try_parse_from([
            "devfolio",
            "t",
            "interpolation.greeting",
            "--locale",
            "en",
            "--arg",
            "name=Ana",
            "-a",
            "count=2",
        ])
        .unwrap();
        match cli.command {
            Commands::T { key, locale, args } => {
                assert_eq!(key, "interpolation.greeting");
                assert_eq!(locale.as_deref(), Some("en"));
                assert_eq!(args, vec!["name=Ana", "count=2"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["devfolio", "check", "-v", "--messages", "msgs"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.messages, Some(PathBuf::from("msgs")));
    }
}
