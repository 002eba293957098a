//! # facetlink-core
//!
//! The deterministic filter-state engine for Facetlink - THE LOGIC.
//!
//! This crate computes the URL filter-parameter transitions behind
//! faceted-search links: adding, removing, replacing, and toggling
//! `facet:value` terms in a request's filter parameter list, plus
//! shaping a facet's option buckets into link-ready view state.
//!
//! ## Architectural Constraints
//!
//! The engine:
//! - Is pure: every operation is a function of its arguments only
//! - Is stateless: the filter set is rebuilt from the request each call
//! - Is total: malformed entries are skipped, never an error
//! - Builds no URLs and renders nothing; link builders are external
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod codec;
pub mod options;
pub mod primitives;
pub mod resolve;
pub mod state;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{FacetConfig, FacetError, FacetName, FacetValue, FilterTerm};

// =============================================================================
// RE-EXPORTS: Filter State Engine
// =============================================================================

pub use options::{FacetOption, OptionState, shape_options};
pub use resolve::{LinkKind, LinkResolver, ResolvedLink};
pub use state::FilterSet;
