//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use nestly::UploadKind;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nestly")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Normalize rental marketplace values for display")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Configuration file (defaults to an optional `nestly.toml` in the working directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Settings file holding the language preference (overrides `i18n.settings_path`)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Log level written to stderr (overrides `logging.level`)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a byte count (`1536` -> `1.5 KB`)
    Size {
        bytes: u64,
    },
    /// Check a file against an upload policy
    Validate {
        /// File size in bytes
        #[arg(long)]
        size: u64,
        /// MIME type reported for the file
        #[arg(long)]
        mime: String,
        /// Image width in pixels
        #[arg(long, requires = "height")]
        width: Option<u32>,
        /// Image height in pixels
        #[arg(long, requires = "width")]
        height: Option<u32>,
        /// Policy to apply
        #[arg(long, default_value_t = UploadKind::Image)]
        policy: UploadKind,
    },
    /// Format an amount given in minor units (cents)
    #[command(allow_negative_numbers = true)]
    Amount {
        minor: i64,
        /// ISO 4217 code; the configured default currency when omitted
        code: Option<String>,
        /// Display locale (overrides `currency.locale`)
        #[arg(long)]
        locale: Option<String>,
    },
    /// Print the display symbol of a currency
    Symbol {
        code: String,
        /// Display locale (overrides `currency.locale`)
        #[arg(long)]
        locale: Option<String>,
    },
    /// Classify a backend status and resolve its label
    Status {
        raw: String,
        /// Explicit label, shown verbatim
        #[arg(long)]
        label: Option<String>,
    },
    /// Translate a key
    T {
        key: String,
        /// Language for this lookup only
        #[arg(long)]
        lang: Option<String>,
        /// Placeholder values as `name=value`
        #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },
    /// Show the preferred language, or change and persist it
    Lang {
        code: Option<String>,
    },
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_owned(), value.to_owned()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))
}
