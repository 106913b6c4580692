// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

#[parameterized(
    lf = { "true\n", "true" },
    crlf = { "true\r\n", "true" },
    bare = { "true", "true" },
    only_one = { "true\n\n", "true\n" },
    lone_cr_kept = { "true\r", "true\r" },
    empty = { "", "" }
)]
fn test_single_policy_trims_one_terminator(input: &str, expected: &str) {
    assert_eq!(TerminatorPolicy::Single.apply(input), expected);
}

#[test]
fn test_exact_policy_keeps_terminator() {
    assert_eq!(TerminatorPolicy::Exact.apply("true\n"), "true\n");
}

#[test]
fn test_default_config() {
    let config = CaptureConfig::default();
    assert_eq!(config.diagnostic_limit, DEFAULT_DIAGNOSTIC_LIMIT);
    assert_eq!(config.terminator, TerminatorPolicy::Single);
}

#[test]
fn test_builder_overrides() {
    let config = CaptureConfig::new()
        .with_diagnostic_limit(8)
        .with_terminator(TerminatorPolicy::Exact);
    assert_eq!(config.diagnostic_limit, 8);
    assert_eq!(config.terminator, TerminatorPolicy::Exact);
}

#[test]
fn test_deserialize_partial_config() {
    let config: CaptureConfig = serde_json::from_str(r#"{"terminator": "exact"}"#).unwrap();
    assert_eq!(config.diagnostic_limit, DEFAULT_DIAGNOSTIC_LIMIT);
    assert_eq!(config.terminator, TerminatorPolicy::Exact);
}
