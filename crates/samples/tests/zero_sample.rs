// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Each instance sample must print its published literal.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use sample_capture::{assert_prints, assert_prints_true, CaptureLog};
use std::io::Write;
use zero_samples::{Fixture, ZeroSample};

#[test]
fn equals_should_pass() {
    let sample = ZeroSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.equality(out));
}

#[test]
fn hash_code_should_pass() {
    let sample = ZeroSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.hashing(out));
}

#[test]
fn to_byte_should_pass() {
    let sample = ZeroSample::new();
    assert_prints("0", |out: &mut dyn Write| sample.to_byte(out));
}

#[test]
fn to_short_should_pass() {
    let sample = ZeroSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.to_short(out));
}

#[test]
fn to_int_should_pass() {
    let sample = ZeroSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.to_int(out));
}

#[test]
fn to_long_should_pass() {
    let sample = ZeroSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.to_long(out));
}

#[test]
fn to_float_should_pass() {
    let sample = ZeroSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.to_float(out));
}

#[test]
fn to_string_should_pass() {
    let sample = ZeroSample::new();
    assert_prints("0", |out: &mut dyn Write| sample.display(out));
}

#[test]
fn whole_instance_fixture_passes() {
    let log = CaptureLog::new();
    let fixture = Fixture::instance();

    assert_eq!(fixture.run_all(&log), fixture.entries().len());
    assert!(log.find_failures().is_empty());
}
