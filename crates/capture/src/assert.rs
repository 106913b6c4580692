// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertions over what a demonstration prints.
//!
//! A demonstration is any `FnOnce(&mut dyn Write) -> Result<(), E>`. It is
//! handed a fresh in-memory sink to use as its standard output, run once,
//! and its output compared against a literal. Demonstrations that fail are
//! reported with their own error, never re-wrapped into a mismatch.

use crate::config::CaptureConfig;
use crate::error::{CaptureFailure, OutputMismatch};
use crate::output::{capture, CapturedOutput};
use std::fmt::Display;
use std::io::Write;
use tracing::warn;

/// Literal printed by a successful sample.
pub const TRUE: &str = "true";

/// Runs demonstrations and checks their output under a [`CaptureConfig`].
#[derive(Clone, Debug, Default)]
pub struct Asserter {
    config: CaptureConfig,
}

impl Asserter {
    pub fn new(config: CaptureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Check already-captured output against `expected`.
    pub fn check(&self, expected: &str, output: &CapturedOutput) -> Result<(), OutputMismatch> {
        let text = output.text();
        let actual = self.config.terminator.apply(&text);
        if actual == expected {
            return Ok(());
        }
        let mismatch = OutputMismatch::new(expected, actual, self.config.diagnostic_limit)
            .with_nothing_printed(output.is_empty());
        warn!(expected, actual = %mismatch.actual, "demonstration printed unexpected output");
        Err(mismatch)
    }

    /// Run `action` and require it to print exactly `expected`.
    pub fn prints<F, E>(&self, expected: &str, action: F) -> Result<(), CaptureFailure<E>>
    where
        F: FnOnce(&mut dyn Write) -> Result<(), E>,
    {
        self.run(expected, action).map(|_| ())
    }

    /// Run `action` and require it to print exactly `true`.
    pub fn prints_true<F, E>(&self, action: F) -> Result<(), CaptureFailure<E>>
    where
        F: FnOnce(&mut dyn Write) -> Result<(), E>,
    {
        self.prints(TRUE, action)
    }

    /// Like [`Asserter::prints`], but hands back the captured output on
    /// success so callers can record it.
    pub fn run<F, E>(
        &self,
        expected: &str,
        action: F,
    ) -> Result<CapturedOutput, CaptureFailure<E>>
    where
        F: FnOnce(&mut dyn Write) -> Result<(), E>,
    {
        let (output, result) = capture(action);
        if let Err(error) = result {
            warn!(bytes = output.as_bytes().len(), "demonstration failed");
            return Err(CaptureFailure::Fault(error));
        }
        self.check(expected, &output)?;
        Ok(output)
    }
}

/// Run `action` with the default config and require it to print `expected`.
pub fn prints<F, E>(expected: &str, action: F) -> Result<(), CaptureFailure<E>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), E>,
{
    Asserter::default().prints(expected, action)
}

/// Run `action` with the default config and require it to print `true`.
pub fn prints_true<F, E>(action: F) -> Result<(), CaptureFailure<E>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), E>,
{
    Asserter::default().prints_true(action)
}

/// Test-side form of [`prints`]: panics with the diagnostic on failure.
#[allow(clippy::panic)]
#[track_caller]
pub fn assert_prints<F, E>(expected: &str, action: F)
where
    F: FnOnce(&mut dyn Write) -> Result<(), E>,
    E: Display,
{
    if let Err(failure) = prints(expected, action) {
        panic!("{failure}");
    }
}

/// Test-side form of [`prints_true`]: panics with the diagnostic on failure.
#[track_caller]
pub fn assert_prints_true<F, E>(action: F)
where
    F: FnOnce(&mut dyn Write) -> Result<(), E>,
    E: Display,
{
    assert_prints(TRUE, action)
}

#[cfg(test)]
#[path = "assert_tests.rs"]
mod tests;
