//! `sortspec`: parse sort strings and sort JSON records from the shell.

use std::{io::Read, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sortspec_cli::{
    ConfigLoader, Overrides, SortConfig, SortContext,
    cli::{parse_kind_assignment, render_parse, sort_json},
};
use sortspec_core::{Flavor, QuoteStyle, ValueKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "sortspec",
    about = "Parse sort strings and sort JSON records"
)]
struct Cli {
    /// TOML file with sort profiles
    #[arg(long, global = true, env = "SORTSPEC_CONFIG")]
    config: Option<PathBuf>,
    /// Profile to take the allow-list, defaults and kinds from
    #[arg(long, global = true)]
    profile: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the parsed sort spec as JSON or as an ORDER BY body
    Parse {
        /// Sort string such as `-created_at,name`
        #[arg(allow_hyphen_values = true)]
        sort: String,
        #[arg(long, value_enum)]
        flavor: Option<FlavorArg>,
        /// Comma separated allow-list, replaces the profile's
        #[arg(long, value_delimiter = ',')]
        allow: Option<Vec<String>>,
        /// Print an ORDER BY body with this identifier quoting
        #[arg(long, value_enum)]
        order_by: Option<QuoteArg>,
    },
    /// Sort a JSON array read from a file or stdin
    Sort {
        /// Sort string such as `-age,name`
        #[arg(long, allow_hyphen_values = true)]
        by: String,
        /// Value kind for a field, as FIELD=KIND
        #[arg(long = "kind", value_parser = parse_kind_assignment)]
        kinds: Vec<(String, ValueKind)>,
        #[arg(long, value_delimiter = ',')]
        allow: Option<Vec<String>>,
        /// Read records from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FlavorArg {
    Mongo,
    Sql,
}

impl From<FlavorArg> for Flavor {
    fn from(value: FlavorArg) -> Self {
        match value {
            FlavorArg::Mongo => Flavor::Mongo,
            FlavorArg::Sql => Flavor::Sql,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum QuoteArg {
    Ansi,
    Backtick,
}

impl From<QuoteArg> for QuoteStyle {
    fn from(value: QuoteArg) -> Self {
        match value {
            QuoteArg::Ansi => QuoteStyle::Ansi,
            QuoteArg::Backtick => QuoteStyle::Backtick,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = cli
        .config
        .as_ref()
        .map(|path| ConfigLoader::new(path).load())
        .transpose()?;

    match cli.command {
        Command::Parse {
            sort,
            flavor,
            allow,
            order_by,
        } => {
            let ctx = resolve(
                config.as_ref(),
                cli.profile.as_deref(),
                Overrides {
                    flavor: flavor.map(Flavor::from),
                    allow,
                    kinds: Vec::new(),
                },
            )?;
            let output =
                render_parse(&sort, &ctx, order_by.map(QuoteStyle::from))?;
            println!("{output}");
        }
        Command::Sort {
            by,
            kinds,
            allow,
            input,
        } => {
            let ctx = resolve(
                config.as_ref(),
                cli.profile.as_deref(),
                Overrides {
                    flavor: None,
                    allow,
                    kinds,
                },
            )?;
            let raw = match input {
                Some(path) => std::fs::read_to_string(&path).with_context(|| {
                    format!("failed to read input {}", path.display())
                })?,
                None => {
                    let mut raw = String::new();
                    std::io::stdin()
                        .read_to_string(&mut raw)
                        .context("failed to read stdin")?;
                    raw
                }
            };
            println!("{}", sort_json(&raw, &by, &ctx)?);
        }
    }

    Ok(())
}

fn resolve(
    config: Option<&SortConfig>,
    profile: Option<&str>,
    overrides: Overrides,
) -> Result<SortContext> {
    SortContext::resolve(config, profile, overrides)
        .context("failed to resolve sort profile")
}
