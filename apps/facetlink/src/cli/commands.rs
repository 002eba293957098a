//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::config::FacetRegistry;
use facetlink_core::{
    FacetConfig, FacetError, FacetName, FacetOption, FacetValue, LinkKind, LinkResolver,
    primitives::MAX_FACET_OPTIONS, shape_options,
};
use std::path::Path;

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum file size for option bucket files (10 MB).
///
/// This prevents memory exhaustion from malicious or accidental large files.
const MAX_OPTIONS_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), FacetError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| FacetError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(FacetError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Load the registry from the given path, or defaults without one.
fn load_registry(config_path: Option<&Path>) -> Result<FacetRegistry, FacetError> {
    FacetRegistry::load_or_default(config_path)
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    config_path: Option<&Path>,
    host: &str,
    port: u16,
) -> Result<(), FacetError> {
    let registry = load_registry(config_path)?;

    println!("Facetlink Filter-State Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:   {}", host);
    println!("  Port:   {}", port);
    match config_path {
        Some(path) => println!("  Config: {:?}", path),
        None => println!("  Config: (defaults)"),
    }
    println!();
    println!("Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  GET  /config   - Effective facet configuration");
    println!("  POST /selected - Check whether a facet option is selected");
    println!("  POST /resolve  - Resolve a facet link");
    println!("  POST /options  - Shape a facet's option buckets");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, registry).await
}

// =============================================================================
// SELECTED COMMAND
// =============================================================================

/// Check whether a facet option is selected in the given filters.
pub fn cmd_selected(
    json_mode: bool,
    filters: &[String],
    facet: &str,
    value: &str,
) -> Result<(), FacetError> {
    let facet = FacetName::new(facet);
    let value = FacetValue::new(value);
    let selected = LinkResolver::is_selected(filters, &facet, &value);

    if json_mode {
        let output = serde_json::json!({
            "facet": facet.as_str(),
            "value": value.as_str(),
            "selected": selected,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!(
        "{}:{} is {}",
        facet.as_str(),
        value.as_str(),
        if selected { "selected" } else { "not selected" }
    );

    Ok(())
}

// =============================================================================
// RESOLVE COMMAND
// =============================================================================

/// Resolve a facet link into its target filter parameters.
///
/// Any mode flag set on the command line overrides the configured facet
/// entry wholesale; with no flags the registry decides.
pub fn cmd_resolve(
    config_path: Option<&Path>,
    json_mode: bool,
    filters: &[String],
    facet: &str,
    value: &str,
    single_option: bool,
    remove_selected: bool,
    single_facet: bool,
) -> Result<(), FacetError> {
    let config = if single_option || remove_selected || single_facet {
        FacetConfig {
            single_option_mode: single_option,
            selecting_selected_option_removes_filter: remove_selected,
            single_facet_mode: single_facet,
        }
    } else {
        load_registry(config_path)?.config_for(facet)
    };

    let facet = FacetName::new(facet);
    let value = FacetValue::new(value);
    let link = LinkResolver::resolve(filters, &facet, &value, &config);

    if json_mode {
        let output = serde_json::json!({
            "kind": link.kind,
            "filters": link.params,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    let verb = match link.kind {
        LinkKind::Add => "adds",
        LinkKind::Remove => "removes",
        LinkKind::Replace => "replaces",
    };
    println!("Link {} {}:{}", verb, facet.as_str(), value.as_str());
    for param in &link.params {
        println!("  filter[]={}", param);
    }

    Ok(())
}

// =============================================================================
// OPTIONS COMMAND
// =============================================================================

/// Shape a facet's option buckets read from a JSON file.
pub fn cmd_options(
    config_path: Option<&Path>,
    json_mode: bool,
    filters: &[String],
    facet: &str,
    file: &Path,
    limit: Option<usize>,
) -> Result<(), FacetError> {
    validate_file_size(file, MAX_OPTIONS_FILE_SIZE)?;

    let content = std::fs::read_to_string(file)
        .map_err(|e| FacetError::IoError(format!("Cannot read '{}': {}", file.display(), e)))?;
    let buckets: Vec<FacetOption> = serde_json::from_str(&content)
        .map_err(|e| FacetError::SerializationError(format!("Invalid option buckets: {}", e)))?;

    if buckets.len() > MAX_FACET_OPTIONS {
        return Err(FacetError::InvalidRequest(format!(
            "Option count {} exceeds maximum {}",
            buckets.len(),
            MAX_FACET_OPTIONS
        )));
    }

    let registry = load_registry(config_path)?;
    let config = registry.config_for(facet);
    let limit = limit.unwrap_or_else(|| registry.options_limit_for(facet));

    let facet = FacetName::new(facet);
    let states = shape_options(&facet, &buckets, filters, &config, limit);

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&states).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Facet '{}' ({} options)", facet.as_str(), states.len());
    for state in &states {
        let mut markers = String::new();
        if state.selected {
            markers.push_str(" [selected]");
        }
        if state.hidden {
            markers.push_str(" [hidden]");
        }
        println!(
            "  {} ({}){} -> {}",
            state.value.as_str(),
            state.count,
            markers,
            state.params.join("&")
        );
    }

    Ok(())
}

// =============================================================================
// CONFIG COMMAND
// =============================================================================

/// Show the effective facet configuration.
pub fn cmd_config(config_path: Option<&Path>, json_mode: bool) -> Result<(), FacetError> {
    let registry = load_registry(config_path)?;
    let snapshot = api::ConfigResponse::from_registry(&registry);

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Facetlink Configuration");
    println!("=======================");
    match config_path {
        Some(path) => println!("Source: {:?}", path),
        None => println!("Source: (defaults)"),
    }
    println!();
    print_entry("default", &snapshot.default);
    for (name, entry) in &snapshot.facets {
        print_entry(name, entry);
    }

    Ok(())
}

fn print_entry(name: &str, entry: &api::FacetConfigEntry) {
    println!("[{}]", name);
    println!("  single_option_mode:                       {}", entry.config.single_option_mode);
    println!(
        "  selecting_selected_option_removes_filter: {}",
        entry.config.selecting_selected_option_removes_filter
    );
    println!("  single_facet_mode:                        {}", entry.config.single_facet_mode);
    println!("  options_limit:                            {}", entry.options_limit);
}
