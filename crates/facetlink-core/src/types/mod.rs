//! # Core Type Definitions
//!
//! This module contains all core types for the Facetlink filter-state engine:
//! - Filter term components (`FacetName`, `FacetValue`, `FilterTerm`)
//! - Per-facet behavior flags (`FacetConfig`)
//! - Error types (`FacetError`)
//!
//! ## Totality Guarantees
//!
//! Filter-state transitions never fail. `FacetError` exists for the
//! application boundary (configuration, I/O, request validation) only;
//! nothing in this crate's state transitions returns it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::primitives::TERM_SEPARATOR;

// =============================================================================
// FILTER TERM COMPONENTS
// =============================================================================

/// Name of a facet, the discrete dimension a result set is filtered on
/// (e.g. "color"). Opaque to the engine and assumed separator-free.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacetName(pub String);

impl FacetName {
    /// Create a new facet name from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the facet name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One selectable option value of a facet (e.g. "red").
/// Opaque to the engine; MAY itself contain the term separator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacetValue(pub String);

impl FacetValue {
    /// Create a new facet value from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the facet value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// FILTER TERM
// =============================================================================

/// One selected `(facet, value)` pair.
///
/// Serialized as `facet:value` and percent-encoded for URL transport.
/// Because facet values may contain the separator, parsing splits on the
/// FIRST separator only; everything after it belongs to the value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FilterTerm {
    /// The facet this term filters on.
    pub facet: FacetName,
    /// The selected option value.
    pub value: FacetValue,
}

impl FilterTerm {
    /// Create a new filter term.
    #[must_use]
    pub fn new(facet: FacetName, value: FacetValue) -> Self {
        Self { facet, value }
    }

    /// Build a term from plain string parts.
    #[must_use]
    pub fn from_parts(facet: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(FacetName::new(facet), FacetValue::new(value))
    }

    /// Parse a decoded `facet:value` string.
    ///
    /// Splits on the first separator only. Entries without a separator
    /// yield `None` and are treated as absent rather than invalid.
    #[must_use]
    pub fn parse(decoded: &str) -> Option<Self> {
        let (facet, value) = decoded.split_once(TERM_SEPARATOR)?;
        Some(Self::from_parts(facet, value))
    }

    /// Serialize to the plain (not yet percent-encoded) `facet:value` form.
    ///
    /// This form is the identity key for set semantics: two terms are
    /// duplicates iff their serialized forms are byte-identical.
    #[must_use]
    pub fn serialized(&self) -> String {
        format!("{}{}{}", self.facet.0, TERM_SEPARATOR, self.value.0)
    }

    /// Check whether this term matches the given pair exactly.
    #[must_use]
    pub fn matches(&self, facet: &FacetName, value: &FacetValue) -> bool {
        self.facet == *facet && self.value == *value
    }
}

// =============================================================================
// FACET CONFIGURATION
// =============================================================================

/// Per-facet behavior flags controlling how a facet link resolves.
///
/// All flags default to `false`, which yields plain additive filtering:
/// clicking an option adds its term, terms accumulate across facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetConfig {
    /// Only one value allowed per facet; selecting replaces instead of adds.
    pub single_option_mode: bool,
    /// Selecting an already-selected option removes its filter.
    pub selecting_selected_option_removes_filter: bool,
    /// The entire filter set is discarded before adding; one facet
    /// active globally.
    pub single_facet_mode: bool,
}

impl FacetConfig {
    /// Create a configuration with all flags off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            single_option_mode: false,
            selecting_selected_option_removes_filter: false,
            single_facet_mode: false,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur at the Facetlink application boundary.
///
/// - Filter-state transitions are total and never return these
/// - Use `Result<T, FacetError>` for configuration loading and I/O
/// - The engine should never panic; all errors must be recoverable
#[derive(Debug, Error)]
pub enum FacetError {
    /// The facet configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A request failed boundary validation before reaching the engine.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
