// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Each constructor sample must print `true`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use sample_capture::{assert_prints_true, prints_true, CaptureLog};
use std::io::Write;
use zero_samples::{Fixture, ZeroCompanionSample};

#[test]
fn from_byte_should_pass() {
    let sample = ZeroCompanionSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.from_byte(out));
}

#[test]
fn from_byte_or_null_should_pass() {
    let sample = ZeroCompanionSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.from_byte_or_none(out));
}

#[test]
fn from_short_should_pass() {
    let sample = ZeroCompanionSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.from_short(out));
}

#[test]
fn from_short_or_null_should_pass() {
    let sample = ZeroCompanionSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.from_short_or_none(out));
}

#[test]
fn from_int_or_null_should_pass() {
    let sample = ZeroCompanionSample::new();
    assert_prints_true(|out: &mut dyn Write| sample.from_int_or_none(out));
}

#[test]
fn samples_can_run_against_stdout() {
    let sample = ZeroCompanionSample::new();
    let mut stdout = std::io::stdout().lock();
    sample.from_byte(&mut stdout).unwrap();
}

#[test]
fn whole_fixture_passes_and_is_logged() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let log = CaptureLog::new();
    let fixture = Fixture::companion();

    assert_eq!(fixture.run_all(&log), fixture.entries().len());
    assert_eq!(log.count(|r| r.outcome.is_passed()), 5);
}

#[test]
fn fixture_entries_pass_one_by_one() {
    for entry in Fixture::companion().entries() {
        let sample = ZeroCompanionSample::new();
        prints_true(|out: &mut dyn Write| (entry.demonstration)(&sample, out))
            .unwrap_or_else(|failure| panic!("{} failed: {}", entry.name, failure));
    }
}
