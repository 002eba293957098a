//! # Facet Option Shaping
//!
//! Turns a facet's raw option buckets (value plus result count) into the
//! view model a link builder or UI consumes: per option the target filter
//! parameters, the transition kind, a selected flag, and a hidden flag
//! once the display limit is exceeded.
//!
//! Shaping is pure. Rendering the shaped options into HTML or URLs is an
//! external collaborator's job.

use serde::{Deserialize, Serialize};

use crate::primitives::MISSING_OPTION_KEY;
use crate::resolve::{LinkKind, LinkResolver};
use crate::types::{FacetConfig, FacetName, FacetValue};

/// One raw option bucket as reported by the search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    /// The option's value.
    pub value: FacetValue,
    /// Number of results carrying this value.
    pub count: u64,
}

impl FacetOption {
    /// Create a new option bucket.
    #[must_use]
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: FacetValue::new(value),
            count,
        }
    }
}

/// The shaped state of one facet option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionState {
    /// The option's value.
    pub value: FacetValue,
    /// Number of results carrying this value.
    pub count: u64,
    /// Whether the option is part of the current filter set.
    pub selected: bool,
    /// Whether the option falls past the display limit.
    pub hidden: bool,
    /// The transition selecting this option performs.
    pub kind: LinkKind,
    /// Percent-encoded filter parameters for the option's link target.
    pub params: Vec<String>,
}

/// Shape a facet's option buckets against the current filter parameters.
///
/// The `_empty_` missing-value bucket is skipped. Options past `limit`
/// are flagged hidden, never dropped; the caller decides how to fold
/// them away.
#[must_use]
pub fn shape_options(
    facet: &FacetName,
    options: &[FacetOption],
    params: &[String],
    config: &FacetConfig,
    limit: usize,
) -> Vec<OptionState> {
    let mut states = Vec::with_capacity(options.len());
    let mut visible = 0usize;

    for option in options {
        if option.value.as_str() == MISSING_OPTION_KEY {
            // TODO handle missing-value filtering once a backend exposes
            // a queryable missing-bucket term
            continue;
        }

        visible += 1;
        let link = LinkResolver::resolve(params, facet, &option.value, config);

        states.push(OptionState {
            value: option.value.clone(),
            count: option.count,
            selected: LinkResolver::is_selected(params, facet, &option.value),
            hidden: visible > limit,
            kind: link.kind,
            params: link.params,
        });
    }

    states
}

// =============================================================================
// TESTS
// =============================================================================
