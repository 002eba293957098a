//! # Facetlink - Faceted Search Filter-State Server
//!
//! The main binary for the Facetlink filter-state engine.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for filter-state operations
//! - TOML facet configuration loading
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    apps/facetlink (THE BINARY)                  │
//! │                                                                 │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────────┐   │
//! │  │   CLI       │    │   HTTP API  │    │  Facet Config    │   │
//! │  │  (clap)     │    │   (axum)    │    │  (toml registry) │   │
//! │  └──────┬──────┘    └──────┬──────┘    └────────┬─────────┘   │
//! │         │                  │                    │              │
//! │         └──────────────────┼────────────────────┘              │
//! │                            ▼                                   │
//! │                   ┌─────────────────┐                          │
//! │                   │ facetlink-core  │                          │
//! │                   │  (THE LOGIC)    │                          │
//! │                   └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! facetlink server --host 0.0.0.0 --port 8080 -C facets.toml
//!
//! # CLI operations
//! facetlink selected -f color%3Ared --facet color --value red
//! facetlink resolve -f color%3Ared --facet size --value M
//! facetlink options --facet color -F buckets.json
//! ```

use clap::Parser;
use facetlink::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — FACETLINK_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("FACETLINK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "facetlink=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Facetlink startup banner.
fn print_banner() {
    println!(
        r#"
  ███████╗ █████╗  ██████╗███████╗████████╗██╗     ██╗███╗   ██╗██╗  ██╗
  ██╔════╝██╔══██╗██╔════╝██╔════╝╚══██╔══╝██║     ██║████╗  ██║██║ ██╔╝
  █████╗  ███████║██║     █████╗     ██║   ██║     ██║██╔██╗ ██║█████╔╝
  ██╔══╝  ██╔══██║██║     ██╔══╝     ██║   ██║     ██║██║╚██╗██║██╔═██╗
  ██║     ██║  ██║╚██████╗███████╗   ██║   ███████╗██║██║ ╚████║██║  ██╗
  ╚═╝     ╚═╝  ╚═╝ ╚═════╝╚══════╝   ╚═╝   ╚══════╝╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝

  Faceted Search Filter-State Server v{}

  Pure • Deterministic • Stateless
"#,
        env!("CARGO_PKG_VERSION")
    );
}
