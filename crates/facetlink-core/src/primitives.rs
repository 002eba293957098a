//! # Engine Primitives
//!
//! Hardcoded runtime constants for the Facetlink engine.
//!
//! Facetlink carries no persistent state but fixed rules.
//! These primitives are compiled into the binary and are immutable at runtime.

/// Separator between facet name and facet value in a serialized term.
///
/// - Terms travel as `facet:value`, percent-encoded.
/// - Parsing splits on the FIRST separator only; facet names are assumed
///   separator-free while facet values may contain it.
pub const TERM_SEPARATOR: char = ':';

/// Option bucket key emitted by search backends for documents that are
/// missing the facet field entirely.
///
/// Option shaping skips this bucket; missing-value filtering is not
/// part of the engine.
pub const MISSING_OPTION_KEY: &str = "_empty_";

/// Default number of facet options shown before the rest are flagged hidden.
///
/// Callers may override this per facet; shaping only flags, it never drops.
pub const DEFAULT_OPTIONS_LIMIT: usize = 10;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length for facet name strings.
///
/// Names longer than this are rejected at the application boundary.
/// This prevents memory exhaustion from malicious or malformed input.
pub const MAX_FACET_NAME_LENGTH: usize = 256;

/// Maximum length for facet value strings.
///
/// Values longer than this (64KB) are rejected at the application boundary.
/// This prevents memory exhaustion from malicious or malformed input.
pub const MAX_FACET_VALUE_LENGTH: usize = 65536;

/// Maximum number of filter parameters accepted in a single request.
///
/// Longer parameter lists are rejected to prevent DoS; real requests
/// carry a handful of filters.
pub const MAX_FILTER_PARAMETERS: usize = 1000;

/// Maximum number of option buckets accepted in a single shaping request.
///
/// Limits the computational cost of option-state shaping.
pub const MAX_FACET_OPTIONS: usize = 10000;
