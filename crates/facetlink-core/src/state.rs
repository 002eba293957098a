//! # Filter Set
//!
//! The ordered, duplicate-free set of active filter terms.
//!
//! A `FilterSet` is reconstructed fresh from the incoming request's
//! parameter list on every operation; it is never persisted and never
//! shared. Set semantics are keyed by the serialized `facet:value` form,
//! order-preserving on first occurrence.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::types::{FacetName, FacetValue, FilterTerm};

/// Ordered sequence of filter terms with set semantics.
///
/// Invariant: no two contained terms share a serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSet {
    terms: Vec<FilterTerm>,
}

impl FilterSet {
    /// Create a new empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the set from a percent-encoded parameter list.
    ///
    /// Malformed entries are skipped; duplicates keep their first
    /// occurrence. Empty input yields an empty set, not an error.
    #[must_use]
    pub fn from_params(params: &[String]) -> Self {
        let mut set = Self::new();
        for term in codec::decode_filters(params) {
            set.insert(term);
        }
        set
    }

    /// Insert a term, keeping set semantics.
    ///
    /// Returns `false` if an identical term was already present; the set
    /// is unchanged in that case.
    pub fn insert(&mut self, term: FilterTerm) -> bool {
        if self.terms.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Drop the first term matching `(facet, value)` exactly.
    ///
    /// Returns `false` if no such term exists; absence is not an error.
    pub fn remove(&mut self, facet: &FacetName, value: &FacetValue) -> bool {
        match self.terms.iter().position(|t| t.matches(facet, value)) {
            Some(index) => {
                self.terms.remove(index);
                true
            }
            None => false,
        }
    }

    /// Overwrite the facet's current term with `term`, in place.
    ///
    /// The first entry whose facet name matches is replaced in its slot;
    /// any later entries for the same facet are dropped so that at most
    /// one entry per facet name survives. No entry for the facet means
    /// the term is appended.
    pub fn replace(&mut self, term: FilterTerm) {
        match self.terms.iter().position(|t| t.facet == term.facet) {
            Some(index) => {
                let facet = term.facet.clone();
                self.terms[index] = term;
                // Later duplicates of this facet would break the
                // one-entry-per-facet invariant
                let mut seen = false;
                self.terms.retain(|t| {
                    if t.facet != facet {
                        return true;
                    }
                    if seen {
                        return false;
                    }
                    seen = true;
                    true
                });
            }
            None => self.terms.push(term),
        }
    }

    /// Check whether the exact `(facet, value)` pair is present.
    #[must_use]
    pub fn contains(&self, facet: &FacetName, value: &FacetValue) -> bool {
        self.terms.iter().any(|t| t.matches(facet, value))
    }

    /// Borrow the contained terms in order.
    #[must_use]
    pub fn terms(&self) -> &[FilterTerm] {
        &self.terms
    }

    /// Number of contained terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the set contains no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Serialize back into a percent-encoded parameter list.
    #[must_use]
    pub fn to_params(&self) -> Vec<String> {
        codec::encode_filters(&self.terms)
    }
}

// =============================================================================
// TESTS
// =============================================================================
