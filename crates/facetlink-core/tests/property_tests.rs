//! # Property-Based Tests
//!
//! Verification tests using proptest for the filter-state engine.
//!
//! These tests ensure the dedupe invariant, idempotence, and codec
//! round-trip correctness over arbitrary inputs.

use facetlink_core::codec::{decode_filters, decode_term, encode_term};
use facetlink_core::{FacetName, FacetValue, FilterTerm, LinkResolver};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Strategy for facet names: separator-free, as the data model assumes.
fn facet_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.~+%-]{1,12}"
}

/// Strategy for facet values: arbitrary printable text, separator included.
fn facet_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :_.~+%&=-]{0,16}"
}

/// Strategy for an encoded filter parameter list, including the
/// occasional malformed (separator-free) entry.
fn param_list() -> impl Strategy<Value = Vec<String>> {
    vec(
        prop_oneof![
            4 => (facet_name(), facet_value())
                .prop_map(|(f, v)| encode_term(&FilterTerm::from_parts(f, v))),
            1 => "[a-zA-Z0-9]{0,8}",
        ],
        0..8,
    )
}

/// Serialized forms of the decoded parameter list, for set comparisons.
fn serialized_terms(params: &[String]) -> Vec<String> {
    decode_filters(params).iter().map(|t| t.serialized()).collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Encoding then decoding a term is the identity.
    #[test]
    fn codec_round_trip(facet in facet_name(), value in facet_value()) {
        let term = FilterTerm::from_parts(facet, value);
        prop_assert_eq!(decode_term(&encode_term(&term)), Some(term));
    }

    /// Adding the same term twice equals adding it once.
    #[test]
    fn add_is_idempotent(params in param_list(), facet in facet_name(), value in facet_value()) {
        let facet = FacetName::new(facet);
        let value = FacetValue::new(value);

        let once = LinkResolver::add(&params, &facet, &value, false);
        let twice = LinkResolver::add(&once, &facet, &value, false);

        prop_assert_eq!(once, twice);
    }

    /// An added-then-removed term leaves no trace.
    #[test]
    fn remove_after_add_equals_plain_remove(
        params in param_list(),
        facet in facet_name(),
        value in facet_value()
    ) {
        let facet = FacetName::new(facet);
        let value = FacetValue::new(value);

        let added = LinkResolver::add(&params, &facet, &value, false);
        let removed_after_add = LinkResolver::remove(&added, &facet, &value);
        let removed_plain = LinkResolver::remove(&params, &facet, &value);

        // Compare as term sets: untouched-entry order is unaffected by
        // where the removed term sat
        let left: BTreeSet<String> = serialized_terms(&removed_after_add).into_iter().collect();
        let right: BTreeSet<String> = serialized_terms(&removed_plain).into_iter().collect();
        prop_assert_eq!(left, right);
    }

    /// No operation ever produces two entries with identical serialized form.
    #[test]
    fn operations_preserve_dedupe_invariant(
        params in param_list(),
        facet in facet_name(),
        value in facet_value()
    ) {
        let facet = FacetName::new(facet);
        let value = FacetValue::new(value);

        for result in [
            LinkResolver::add(&params, &facet, &value, false),
            LinkResolver::remove(&params, &facet, &value),
            LinkResolver::replace(&params, &facet, &value),
        ] {
            let terms = serialized_terms(&result);
            let unique: BTreeSet<&String> = terms.iter().collect();
            prop_assert_eq!(unique.len(), terms.len());
        }
    }

    /// Replace never leaves two entries for one facet name.
    #[test]
    fn replace_keeps_one_entry_per_facet(
        params in param_list(),
        facet in facet_name(),
        value in facet_value()
    ) {
        let facet = FacetName::new(facet);
        let value = FacetValue::new(value);

        let result = LinkResolver::replace(&params, &facet, &value);
        let matching = decode_filters(&result)
            .iter()
            .filter(|t| t.facet == facet)
            .count();

        prop_assert_eq!(matching, 1);
    }

    /// An option is selected immediately after its add.
    #[test]
    fn is_selected_after_add(params in param_list(), facet in facet_name(), value in facet_value()) {
        let facet = FacetName::new(facet);
        let value = FacetValue::new(value);

        let added = LinkResolver::add(&params, &facet, &value, false);
        prop_assert!(LinkResolver::is_selected(&added, &facet, &value));
    }

    /// Single-facet mode always yields exactly one term.
    #[test]
    fn single_facet_mode_yields_one_term(
        params in param_list(),
        facet in facet_name(),
        value in facet_value()
    ) {
        let facet = FacetName::new(facet);
        let value = FacetValue::new(value);

        let result = LinkResolver::add(&params, &facet, &value, true);
        prop_assert_eq!(result.len(), 1);
        prop_assert!(LinkResolver::is_selected(&result, &facet, &value));
    }

    /// Operations ignore malformed entries without failing.
    #[test]
    fn malformed_entries_never_surface(raw in vec("[a-zA-Z0-9]{0,8}", 0..6)) {
        // None of these carry a separator, so the decoded set is empty
        prop_assert!(decode_filters(&raw).is_empty());

        let facet = FacetName::new("color");
        let value = FacetValue::new("red");
        let result = LinkResolver::add(&raw, &facet, &value, false);
        prop_assert_eq!(result.len(), 1);
    }
}
