//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Running without a subcommand opens the interactive menu

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{ListField, SortOrder};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Roster - product catalog queries and a musician registry
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'roster' without arguments for the interactive menu.")]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./roster.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Product catalog file (overrides config)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog_file: Option<PathBuf>,

    /// Musician registry file (overrides config)
    #[arg(long, global = true, value_name = "FILE")]
    pub registry_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query the product catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),

    /// Manage the musician registry and assemble bands
    #[command(subcommand)]
    Musicians(MusiciansCommand),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List distinct categories
    Categories,

    /// List products of a category
    List {
        #[arg(short, long)]
        category: String,
    },

    /// Cheapest product of a category
    Cheapest {
        #[arg(short, long)]
        category: String,
    },

    /// Most expensive product of a category
    Priciest {
        #[arg(short, long)]
        category: String,
    },

    /// Products ranked by price
    Top {
        /// Ranking direction
        #[arg(long, value_enum, default_value_t = SortOrder::Descending)]
        order: SortOrder,

        /// Number of products (defaults to catalog.top_n)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Interactive catalog menu
    Menu,
}

#[derive(Subcommand, Debug)]
pub enum MusiciansCommand {
    /// Register a new musician
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Comma-separated genres
        #[arg(long)]
        genres: String,

        /// Comma-separated instruments
        #[arg(long)]
        instruments: String,
    },

    /// Search musicians (all filters must match unless --any)
    Search {
        /// Match any filter instead of all of them
        #[arg(long)]
        any: bool,

        #[command(flatten)]
        filters: SearchArgs,
    },

    /// Add or remove a genre or instrument
    Modify {
        #[arg(long)]
        email: String,

        /// Append the value
        #[arg(long, conflicts_with = "remove", required_unless_present = "remove")]
        add: bool,

        /// Remove the first occurrence of the value
        #[arg(long)]
        remove: bool,

        /// Field to change
        #[arg(long, value_enum)]
        field: ListField,

        /// Value to add or remove
        #[arg(long)]
        value: String,
    },

    /// Assemble every valid band for a genre
    Bands {
        #[arg(long)]
        genre: String,

        /// One slot per occurrence, in band order (repeat for several members)
        #[arg(short, long = "instrument", required = true)]
        instruments: Vec<String>,
    },

    /// Interactive registry menu
    Menu,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub genre: Option<String>,

    #[arg(long)]
    pub instrument: Option<String>,

    /// Raw filter on a registry key (nome, email, generos_musicais, instrumentos)
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub raw: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
