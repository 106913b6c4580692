// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture log implementation.

use crate::assert::Asserter;
use crate::error::CaptureFailure;
use crate::output::capture;
use crate::run::{CapturedRun, RunOutcome};
use parking_lot::Mutex;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};
use tracing::{debug, warn};

/// Capture log for recording demonstration runs
pub struct CaptureLog {
    runs: Arc<Mutex<Vec<CapturedRun>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl CaptureLog {
    /// Create a new in-memory capture log
    pub fn new() -> Self {
        Self {
            runs: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a capture log that also appends to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            runs: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Run a named demonstration through `asserter` and record how it ended.
    ///
    /// The recorded output is the raw captured text on every path, including
    /// whatever a failing demonstration wrote before it failed. The failure,
    /// if any, is returned unchanged after being recorded.
    pub fn check<F, E>(
        &self,
        asserter: &Asserter,
        name: &str,
        expected: &str,
        action: F,
    ) -> Result<(), CaptureFailure<E>>
    where
        F: FnOnce(&mut dyn Write) -> Result<(), E>,
        E: Display,
    {
        let start = Instant::now();
        let (output, result) = capture(action);
        let elapsed = start.elapsed();

        let result = match result {
            Ok(()) => asserter
                .check(expected, &output)
                .map_err(CaptureFailure::Mismatch),
            Err(error) => Err(CaptureFailure::Fault(error)),
        };
        let outcome = match &result {
            Ok(()) => RunOutcome::Passed,
            Err(failure) => RunOutcome::from_failure(failure),
        };
        let text = (!output.is_empty()).then(|| output.text().into_owned());
        self.record(name, elapsed, text, outcome);
        result
    }

    /// Record a run
    pub fn record(
        &self,
        name: &str,
        elapsed: Duration,
        output: Option<String>,
        outcome: RunOutcome,
    ) {
        let mut runs = self.runs.lock();
        let run = CapturedRun {
            seq: runs.len() as u64,
            name: name.to_string(),
            timestamp: SystemTime::now(),
            elapsed,
            output,
            outcome,
        };
        debug!(seq = run.seq, name, passed = run.outcome.is_passed(), "recorded run");

        runs.push(run.clone());

        // Write to file if configured
        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            let written = serde_json::to_string(&run)
                .map_err(std::io::Error::from)
                .and_then(|json| {
                    writeln!(w, "{}", json)?;
                    w.flush()
                });
            if let Err(error) = written {
                warn!(seq = run.seq, %error, "failed to persist run");
            }
        }
    }

    /// Get all recorded runs
    pub fn runs(&self) -> Vec<CapturedRun> {
        self.runs.lock().clone()
    }

    /// Get the last N runs
    pub fn last(&self, n: usize) -> Vec<CapturedRun> {
        let all = self.runs.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count runs matching a predicate
    pub fn count<F: Fn(&CapturedRun) -> bool>(&self, pred: F) -> usize {
        self.runs.lock().iter().filter(|r| pred(r)).count()
    }

    /// Find runs by demonstration name
    pub fn find_by_name(&self, name: &str) -> Vec<CapturedRun> {
        self.runs
            .lock()
            .iter()
            .filter(|r| r.name == name)
            .cloned()
            .collect()
    }

    /// Find runs that did not pass
    pub fn find_failures(&self) -> Vec<CapturedRun> {
        self.runs
            .lock()
            .iter()
            .filter(|r| !r.outcome.is_passed())
            .cloned()
            .collect()
    }

    /// Get the total number of runs
    pub fn len(&self) -> usize {
        self.runs.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.runs.lock().is_empty()
    }

    /// Clear all recorded runs
    pub fn clear(&self) {
        self.runs.lock().clear();
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CaptureLog {
    fn clone(&self) -> Self {
        Self {
            runs: Arc::clone(&self.runs),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
