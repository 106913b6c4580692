// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion settings.

use serde::Deserialize;

/// Default bound on the captured text echoed back in a mismatch diagnostic.
pub const DEFAULT_DIAGNOSTIC_LIMIT: usize = 256;

/// How trailing line terminators are treated before comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminatorPolicy {
    /// Drop one trailing `\n` or `\r\n`, if present.
    #[default]
    Single,
    /// Compare the captured text as-is.
    Exact,
}

impl TerminatorPolicy {
    /// Apply the policy to captured text.
    pub fn apply<'a>(&self, text: &'a str) -> &'a str {
        match self {
            Self::Single => text
                .strip_suffix("\r\n")
                .or_else(|| text.strip_suffix('\n'))
                .unwrap_or(text),
            Self::Exact => text,
        }
    }
}

/// Settings shared by every assertion made through an [`crate::Asserter`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Maximum number of characters of captured text quoted in a diagnostic
    pub diagnostic_limit: usize,

    /// Trailing terminator handling
    pub terminator: TerminatorPolicy,
}

impl CaptureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostic_limit(mut self, limit: usize) -> Self {
        self.diagnostic_limit = limit;
        self
    }

    pub fn with_terminator(mut self, terminator: TerminatorPolicy) -> Self {
        self.terminator = terminator;
        self
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            diagnostic_limit: DEFAULT_DIAGNOSTIC_LIMIT,
            terminator: TerminatorPolicy::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
