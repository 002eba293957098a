//! # Facet Configuration
//!
//! TOML-backed per-facet configuration for the Facetlink application.
//!
//! The engine itself takes a `FacetConfig` per call; this module is the
//! external configuration store that supplies one when the caller does
//! not. Layout:
//!
//! ```toml
//! [default]
//! selecting_selected_option_removes_filter = true
//!
//! [facets.color]
//! single_option_mode = true
//! options_limit = 25
//! ```
//!
//! Field resolution: facet entry, then `[default]` section, then the
//! engine defaults (all flags off).

use std::collections::BTreeMap;
use std::path::Path;

use facetlink_core::primitives::DEFAULT_OPTIONS_LIMIT;
use facetlink_core::{FacetConfig, FacetError};
use serde::{Deserialize, Serialize};

// =============================================================================
// FILE LAYOUT
// =============================================================================

/// One facet's settings as written in the configuration file.
///
/// Every field is optional; unset fields fall through to the default
/// section and finally to the engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacetSettings {
    /// Only one value allowed per facet; selecting replaces.
    pub single_option_mode: Option<bool>,
    /// Selecting an already-selected option removes its filter.
    pub selecting_selected_option_removes_filter: Option<bool>,
    /// Discard the entire filter set before adding.
    pub single_facet_mode: Option<bool>,
    /// Number of options shown before the rest are flagged hidden.
    pub options_limit: Option<usize>,
}

/// On-disk configuration file layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    default: FacetSettings,
    facets: BTreeMap<String, FacetSettings>,
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Loaded facet configuration, resolved per facet on demand.
#[derive(Debug, Clone, Default)]
pub struct FacetRegistry {
    default: FacetSettings,
    facets: BTreeMap<String, FacetSettings>,
}

impl FacetRegistry {
    /// Parse a registry from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, FacetError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| FacetError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            default: file.default,
            facets: file.facets,
        })
    }

    /// Load a registry from a TOML file.
    pub fn load(path: &Path) -> Result<Self, FacetError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FacetError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load a registry, falling back to all-defaults without a path.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, FacetError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the effective engine configuration for a facet.
    #[must_use]
    pub fn config_for(&self, facet: &str) -> FacetConfig {
        let entry = self.facets.get(facet);

        FacetConfig {
            single_option_mode: self
                .resolve_flag(entry, |s| s.single_option_mode),
            selecting_selected_option_removes_filter: self
                .resolve_flag(entry, |s| s.selecting_selected_option_removes_filter),
            single_facet_mode: self
                .resolve_flag(entry, |s| s.single_facet_mode),
        }
    }

    /// Resolve the effective display limit for a facet.
    #[must_use]
    pub fn options_limit_for(&self, facet: &str) -> usize {
        self.facets
            .get(facet)
            .and_then(|s| s.options_limit)
            .or(self.default.options_limit)
            .unwrap_or(DEFAULT_OPTIONS_LIMIT)
    }

    /// Names of facets carrying explicit entries.
    #[must_use]
    pub fn facet_names(&self) -> Vec<&str> {
        self.facets.keys().map(String::as_str).collect()
    }

    fn resolve_flag(
        &self,
        entry: Option<&FacetSettings>,
        field: impl Fn(&FacetSettings) -> Option<bool>,
    ) -> bool {
        entry
            .and_then(&field)
            .or_else(|| field(&self.default))
            .unwrap_or(false)
    }
}

// =============================================================================
// TESTS
// =============================================================================
