//! Command-line parsing for the WordPress content client.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the client/model code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::client::Resource;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "press", version, about = "WordPress REST API content client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a collection and print one summary line per item.
    List(ListArgs),
    /// Fetch a single resource by id and print its details.
    Get(GetArgs),
    /// Classify records from a local JSON file (no network).
    ///
    /// Useful for inspecting exported payloads and for trying classification
    /// overrides before wiring them into code.
    Classify(ClassifyArgs),
}

/// Options for fetching a collection.
#[derive(Debug, Parser, Clone)]
pub struct ListArgs {
    /// Resource collection to fetch.
    #[arg(value_enum)]
    pub resource: Resource,

    /// Items per request page (the API caps this at 100).
    #[arg(long, default_value_t = 20)]
    pub per_page: usize,

    /// Stop after this many items in total.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Full-text search term passed to the API.
    #[arg(long)]
    pub search: Option<String>,

    /// Print populated models as JSON instead of a summary table.
    #[arg(long)]
    pub json: bool,
}

/// Options for fetching a single resource.
#[derive(Debug, Parser, Clone)]
pub struct GetArgs {
    /// Resource collection the id belongs to.
    #[arg(value_enum)]
    pub resource: Resource,

    /// Resource id.
    pub id: u64,

    /// Print the populated model as JSON instead of a detail view.
    #[arg(long)]
    pub json: bool,
}

/// Options for offline classification.
#[derive(Debug, Parser, Clone)]
pub struct ClassifyArgs {
    /// JSON file holding one record or an array of records.
    pub file: PathBuf,

    /// Force every record to this variant (a registry name, e.g.
    /// "attachment"). Wins over --map.
    #[arg(long = "as", value_name = "VARIANT")]
    pub force_variant: Option<String>,

    /// Map a detected type to a variant, e.g. --map book=page. Repeatable.
    #[arg(long = "map", value_name = "TYPE=VARIANT")]
    pub type_map: Vec<String>,

    /// Print the populated models as JSON instead of a summary table.
    #[arg(long)]
    pub json: bool,
}
