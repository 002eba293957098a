//! # Facetlink CLI Module
//!
//! This module implements the CLI interface for Facetlink.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `selected` - Check whether a facet option is selected
//! - `resolve` - Resolve a facet link into target filter parameters
//! - `options` - Shape a facet's option buckets from a JSON file
//! - `config` - Show the effective facet configuration

mod commands;

use clap::{Parser, Subcommand};
use facetlink_core::FacetError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Facetlink - Faceted Search Filter-State Server
///
/// A pure, deterministic engine for faceted-search filter links.
/// Every result is a function of the filter parameters you pass in.
#[derive(Parser, Debug)]
#[command(name = "facetlink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the facet configuration file (TOML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Check whether a facet option is selected
    Selected {
        /// Encoded filter parameter (repeatable)
        #[arg(short, long)]
        filter: Vec<String>,

        /// Facet name
        #[arg(long)]
        facet: String,

        /// Facet option value
        #[arg(long)]
        value: String,
    },

    /// Resolve a facet link into target filter parameters
    Resolve {
        /// Encoded filter parameter (repeatable)
        #[arg(short, long)]
        filter: Vec<String>,

        /// Facet name
        #[arg(long)]
        facet: String,

        /// Facet option value
        #[arg(long)]
        value: String,

        /// Force single-option mode (replace instead of add)
        #[arg(long)]
        single_option: bool,

        /// Force toggle mode (selecting a selected option removes it)
        #[arg(long)]
        remove_selected: bool,

        /// Force single-facet mode (discard other filters before adding)
        #[arg(long)]
        single_facet: bool,
    },

    /// Shape a facet's option buckets from a JSON file
    Options {
        /// Encoded filter parameter (repeatable)
        #[arg(short, long)]
        filter: Vec<String>,

        /// Facet name
        #[arg(long)]
        facet: String,

        /// Path to a JSON file with option buckets ([{"value":..,"count":..}])
        #[arg(short = 'F', long)]
        file: PathBuf,

        /// Display limit before options are flagged hidden
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the effective facet configuration
    Config,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), FacetError> {
    let config_path = cli.config.as_deref();
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(config_path, &host, port).await,
        Some(Commands::Selected {
            filter,
            facet,
            value,
        }) => cmd_selected(json_mode, &filter, &facet, &value),
        Some(Commands::Resolve {
            filter,
            facet,
            value,
            single_option,
            remove_selected,
            single_facet,
        }) => cmd_resolve(
            config_path,
            json_mode,
            &filter,
            &facet,
            &value,
            single_option,
            remove_selected,
            single_facet,
        ),
        Some(Commands::Options {
            filter,
            facet,
            file,
            limit,
        }) => cmd_options(config_path, json_mode, &filter, &facet, &file, limit),
        Some(Commands::Config) => cmd_config(config_path, json_mode),
        None => {
            // No subcommand - show configuration by default
            cmd_config(config_path, json_mode)
        }
    }
}
