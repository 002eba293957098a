//! # Transport Codec
//!
//! Percent-encoding of filter terms for URL transport.
//!
//! Each term travels as one encoded string (e.g. `color%3Ared`), typically
//! inside a query-string array parameter (`?filter[]=color%3Ared`).
//! Decoding is total: malformed entries are skipped, invalid UTF-8 is
//! replaced, and a legacy `+` is accepted as a space.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::types::FilterTerm;

/// Characters escaped on output: everything outside RFC 3986 unreserved.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// =============================================================================
// COMPONENT CODEC
// =============================================================================

/// Percent-encode a single URL component.
#[must_use]
pub fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, ENCODE_SET).to_string()
}

/// Percent-decode a single URL component.
///
/// `+` decodes to a space first so that form-encoded legacy URLs keep
/// working; a literal plus therefore arrives as `%2B`. Invalid UTF-8
/// sequences are replaced rather than rejected.
#[must_use]
pub fn decode_component(raw: &str) -> String {
    let unplussed = raw.replace('+', " ");
    percent_decode_str(&unplussed).decode_utf8_lossy().into_owned()
}

// =============================================================================
// TERM CODEC
// =============================================================================

/// Encode one term into its transport form.
#[must_use]
pub fn encode_term(term: &FilterTerm) -> String {
    encode_component(&term.serialized())
}

/// Decode one transport entry into a term.
///
/// Returns `None` for entries without a separator; callers treat those
/// as absent rather than invalid, tolerating hand-edited URLs.
#[must_use]
pub fn decode_term(raw: &str) -> Option<FilterTerm> {
    FilterTerm::parse(&decode_component(raw))
}

/// Decode a full parameter list, skipping malformed entries.
#[must_use]
pub fn decode_filters(params: &[String]) -> Vec<FilterTerm> {
    params.iter().filter_map(|raw| decode_term(raw)).collect()
}

/// Encode a term sequence back into its transport form.
#[must_use]
pub fn encode_filters(terms: &[FilterTerm]) -> Vec<String> {
    terms.iter().map(encode_term).collect()
}

// =============================================================================
// TESTS
// =============================================================================
