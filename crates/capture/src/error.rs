// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion failures.

use thiserror::Error;

/// Captured text did not match the expected literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", self.describe())]
pub struct OutputMismatch {
    /// Literal the demonstration was expected to print
    pub expected: String,

    /// Captured text after terminator handling, possibly truncated
    pub actual: String,

    /// Characters dropped from `actual` to respect the diagnostic limit
    pub truncated: usize,

    /// No bytes at all reached the sink, before any terminator handling
    pub nothing_printed: bool,
}

impl OutputMismatch {
    /// Build a mismatch, quoting at most `limit` characters of `actual`.
    pub fn new(expected: impl Into<String>, actual: &str, limit: usize) -> Self {
        let total = actual.chars().count();
        let kept: String = actual.chars().take(limit).collect();
        Self {
            expected: expected.into(),
            actual: kept,
            truncated: total.saturating_sub(limit),
            nothing_printed: actual.is_empty(),
        }
    }

    /// Override emptiness with what the raw capture showed, since a lone
    /// terminator trims down to an empty `actual`.
    pub fn with_nothing_printed(mut self, nothing_printed: bool) -> Self {
        self.nothing_printed = nothing_printed;
        self
    }

    /// Whether nothing at all was printed.
    pub fn is_empty_output(&self) -> bool {
        self.nothing_printed
    }

    fn describe(&self) -> String {
        if self.is_empty_output() {
            return format!("expected `{}` but the output was empty", self.expected);
        }
        let mut message = format!(
            "expected `{}` but the output was `{}`",
            self.expected, self.actual
        );
        if self.truncated > 0 {
            message.push_str(&format!(" ({} more characters)", self.truncated));
        }
        message
    }
}

/// Why a demonstration did not pass.
#[derive(Debug, Error)]
pub enum CaptureFailure<E> {
    /// The demonstration ran but printed the wrong thing
    #[error(transparent)]
    Mismatch(#[from] OutputMismatch),

    /// The demonstration itself failed; its error is kept as-is
    #[error("demonstration failed: {0}")]
    Fault(E),
}

impl<E> CaptureFailure<E> {
    pub fn mismatch(&self) -> Option<&OutputMismatch> {
        match self {
            Self::Mismatch(mismatch) => Some(mismatch),
            Self::Fault(_) => None,
        }
    }

    pub fn fault(&self) -> Option<&E> {
        match self {
            Self::Fault(error) => Some(error),
            Self::Mismatch(_) => None,
        }
    }

    /// Recover the demonstration's own error, if that is what failed.
    pub fn into_fault(self) -> Result<E, OutputMismatch> {
        match self {
            Self::Fault(error) => Ok(error),
            Self::Mismatch(mismatch) => Err(mismatch),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
