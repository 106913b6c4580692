// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded demonstration runs.

use crate::duration_serde;
use crate::error::CaptureFailure;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::{Duration, SystemTime};

/// One demonstration run as seen by the harness
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedRun {
    /// Sequence number within the log
    pub seq: u64,

    /// Demonstration name
    pub name: String,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Time spent inside the capture window
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// Captured text, if the demonstration got far enough to produce any
    pub output: Option<String>,

    pub outcome: RunOutcome,
}

/// How a run ended
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunOutcome {
    Passed,
    Mismatch { expected: String, actual: String },
    Fault { message: String },
}

impl RunOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn from_failure<E: Display>(failure: &CaptureFailure<E>) -> Self {
        match failure {
            CaptureFailure::Mismatch(mismatch) => Self::Mismatch {
                expected: mismatch.expected.clone(),
                actual: mismatch.actual.clone(),
            },
            CaptureFailure::Fault(error) => Self::Fault {
                message: error.to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
