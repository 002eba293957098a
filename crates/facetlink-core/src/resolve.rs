//! # Link Resolution
//!
//! Consolidates the filter-state transitions behind facet links.
//!
//! Every operation takes the request's current percent-encoded filter
//! parameters and returns the parameter list the link should carry.
//! All operations are:
//! - Pure: no state outside the arguments is read or mutated
//! - Total: malformed entries are skipped, never an error
//! - Idempotent: identical inputs produce identical outputs

use serde::{Deserialize, Serialize};

use crate::state::FilterSet;
use crate::types::{FacetConfig, FacetName, FacetValue, FilterTerm};

// =============================================================================
// RESOLVED LINK
// =============================================================================

/// Which state transition a resolved link performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// The link adds the term to the filter set.
    Add,
    /// The link removes the term from the filter set.
    Remove,
    /// The link replaces the facet's current term.
    Replace,
}

/// The outcome of resolving a facet link: the transition kind and the
/// parameter list the link should carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    /// The transition the link performs.
    pub kind: LinkKind,
    /// Percent-encoded filter parameters for the link target.
    pub params: Vec<String>,
}

// =============================================================================
// LINK RESOLVER
// =============================================================================

/// The LinkResolver consolidates all filter-state transitions.
///
/// External link builders hand it the request's filter parameters and
/// serialize the returned list into a URL; the resolver itself builds
/// no URLs and renders nothing.
pub struct LinkResolver;

impl LinkResolver {
    /// Check whether the given facet option is currently selected.
    ///
    /// True iff any decoded entry matches `(facet, value)` exactly.
    /// Malformed entries are skipped; this never fails.
    #[must_use]
    pub fn is_selected(params: &[String], facet: &FacetName, value: &FacetValue) -> bool {
        FilterSet::from_params(params).contains(facet, value)
    }

    /// Compute the parameter list that adds `(facet, value)`.
    ///
    /// With `single_facet_mode` the existing filters are discarded first,
    /// so the result always carries exactly one term. Otherwise the term
    /// is appended; set semantics guarantee no duplicate.
    #[must_use]
    pub fn add(
        params: &[String],
        facet: &FacetName,
        value: &FacetValue,
        single_facet_mode: bool,
    ) -> Vec<String> {
        let mut set = if single_facet_mode {
            FilterSet::new()
        } else {
            FilterSet::from_params(params)
        };
        set.insert(FilterTerm::new(facet.clone(), value.clone()));
        set.to_params()
    }

    /// Compute the parameter list that removes `(facet, value)`.
    ///
    /// An absent term leaves the set unchanged; this never fails.
    #[must_use]
    pub fn remove(params: &[String], facet: &FacetName, value: &FacetValue) -> Vec<String> {
        let mut set = FilterSet::from_params(params);
        set.remove(facet, value);
        set.to_params()
    }

    /// Compute the parameter list that replaces the facet's current term.
    ///
    /// The facet's first entry is overwritten in its slot; no entry for
    /// the facet means the term is appended. At most one entry per facet
    /// name survives.
    #[must_use]
    pub fn replace(params: &[String], facet: &FacetName, value: &FacetValue) -> Vec<String> {
        let mut set = FilterSet::from_params(params);
        set.replace(FilterTerm::new(facet.clone(), value.clone()));
        set.to_params()
    }

    /// Resolve a facet link per configuration.
    ///
    /// 1. `single_option_mode` replaces the facet's current term.
    /// 2. A selected option removes its term when
    ///    `selecting_selected_option_removes_filter` is set.
    /// 3. Everything else adds, honoring `single_facet_mode`.
    #[must_use]
    pub fn resolve(
        params: &[String],
        facet: &FacetName,
        value: &FacetValue,
        config: &FacetConfig,
    ) -> ResolvedLink {
        if config.single_option_mode {
            return ResolvedLink {
                kind: LinkKind::Replace,
                params: Self::replace(params, facet, value),
            };
        }

        if config.selecting_selected_option_removes_filter
            && Self::is_selected(params, facet, value)
        {
            return ResolvedLink {
                kind: LinkKind::Remove,
                params: Self::remove(params, facet, value),
            };
        }

        ResolvedLink {
            kind: LinkKind::Add,
            params: Self::add(params, facet, value, config.single_facet_mode),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
