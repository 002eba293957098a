//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use std::collections::BTreeMap;

use facetlink_core::primitives::{
    MAX_FACET_NAME_LENGTH, MAX_FACET_OPTIONS, MAX_FACET_VALUE_LENGTH, MAX_FILTER_PARAMETERS,
};
use facetlink_core::{
    FacetConfig, FacetError, FacetName, FacetOption, FacetValue, LinkKind, OptionState,
    ResolvedLink,
};
use serde::{Deserialize, Serialize};

use crate::config::FacetRegistry;

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// CONFIG RESPONSE
// =============================================================================

/// Effective configuration of one facet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetConfigEntry {
    #[serde(flatten)]
    pub config: FacetConfig,
    pub options_limit: usize,
}

/// Effective configuration response: defaults plus explicit entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub default: FacetConfigEntry,
    pub facets: BTreeMap<String, FacetConfigEntry>,
}

impl ConfigResponse {
    /// Snapshot the registry's effective configuration.
    #[must_use]
    pub fn from_registry(registry: &FacetRegistry) -> Self {
        let facets = registry
            .facet_names()
            .into_iter()
            .map(|name| {
                (
                    name.to_string(),
                    FacetConfigEntry {
                        config: registry.config_for(name),
                        options_limit: registry.options_limit_for(name),
                    },
                )
            })
            .collect();

        Self {
            // The empty name hits no explicit entry, yielding defaults
            default: FacetConfigEntry {
                config: registry.config_for(""),
                options_limit: registry.options_limit_for(""),
            },
            facets,
        }
    }
}

// =============================================================================
// BOUNDARY VALIDATION
// =============================================================================

/// Validate the shared request core and convert to engine types.
///
/// This enforces the boundary limits before data reaches the engine:
/// - `facet` is non-empty and within `MAX_FACET_NAME_LENGTH`
/// - `value` is within `MAX_FACET_VALUE_LENGTH`
/// - `filters` carries at most `MAX_FILTER_PARAMETERS` entries
///
/// This prevents DoS via oversized payloads; the engine itself never
/// rejects anything.
fn validate_target(
    filters: &[String],
    facet: &str,
    value: &str,
) -> Result<(FacetName, FacetValue), FacetError> {
    if filters.len() > MAX_FILTER_PARAMETERS {
        return Err(FacetError::InvalidRequest(format!(
            "Filter count {} exceeds maximum {}",
            filters.len(),
            MAX_FILTER_PARAMETERS
        )));
    }
    if facet.is_empty() {
        return Err(FacetError::InvalidRequest(
            "Facet name must not be empty".to_string(),
        ));
    }
    if facet.len() > MAX_FACET_NAME_LENGTH {
        return Err(FacetError::InvalidRequest(format!(
            "Facet name length {} exceeds maximum {} bytes",
            facet.len(),
            MAX_FACET_NAME_LENGTH
        )));
    }
    if value.len() > MAX_FACET_VALUE_LENGTH {
        return Err(FacetError::InvalidRequest(format!(
            "Facet value length {} exceeds maximum {} bytes",
            value.len(),
            MAX_FACET_VALUE_LENGTH
        )));
    }

    Ok((FacetName::new(facet), FacetValue::new(value)))
}

// =============================================================================
// SELECTED REQUEST/RESPONSE
// =============================================================================

/// Selection check request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedRequest {
    #[serde(default)]
    pub filters: Vec<String>,
    pub facet: String,
    pub value: String,
}

impl SelectedRequest {
    /// Validate and convert to engine types.
    pub fn to_target(&self) -> Result<(FacetName, FacetValue), FacetError> {
        validate_target(&self.filters, &self.facet, &self.value)
    }
}

/// Selection check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedResponse {
    pub success: bool,
    pub selected: bool,
    pub error: Option<String>,
}

impl SelectedResponse {
    pub fn success(selected: bool) -> Self {
        Self {
            success: true,
            selected,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            selected: false,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// RESOLVE REQUEST/RESPONSE
// =============================================================================

/// Link resolution request.
///
/// An omitted `config` falls back to the facet's configured entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub filters: Vec<String>,
    pub facet: String,
    pub value: String,
    #[serde(default)]
    pub config: Option<FacetConfig>,
}

impl ResolveRequest {
    /// Validate and convert to engine types.
    pub fn to_target(&self) -> Result<(FacetName, FacetValue), FacetError> {
        validate_target(&self.filters, &self.facet, &self.value)
    }
}

/// Link resolution response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub success: bool,
    pub kind: Option<LinkKind>,
    pub filters: Vec<String>,
    pub error: Option<String>,
}

impl ResolveResponse {
    pub fn success(link: ResolvedLink) -> Self {
        Self {
            success: true,
            kind: Some(link.kind),
            filters: link.params,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            kind: None,
            filters: vec![],
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// OPTIONS REQUEST/RESPONSE
// =============================================================================

/// Option shaping request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsRequest {
    #[serde(default)]
    pub filters: Vec<String>,
    pub facet: String,
    /// Raw option buckets as reported by the search backend.
    pub options: Vec<FacetOption>,
    #[serde(default)]
    pub config: Option<FacetConfig>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl OptionsRequest {
    /// Validate and convert to engine types.
    ///
    /// Beyond the shared checks this bounds the option bucket count
    /// (`MAX_FACET_OPTIONS`).
    pub fn to_target(&self) -> Result<FacetName, FacetError> {
        if self.options.len() > MAX_FACET_OPTIONS {
            return Err(FacetError::InvalidRequest(format!(
                "Option count {} exceeds maximum {}",
                self.options.len(),
                MAX_FACET_OPTIONS
            )));
        }
        let (facet, _) = validate_target(&self.filters, &self.facet, "")?;
        Ok(facet)
    }
}

/// Option shaping response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub success: bool,
    pub options: Vec<OptionState>,
    pub error: Option<String>,
}

impl OptionsResponse {
    pub fn success(options: Vec<OptionState>) -> Self {
        Self {
            success: true,
            options,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            options: vec![],
            error: Some(msg.into()),
        }
    }
}
