// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named sample tables.

use crate::companion::ZeroCompanionSample;
use crate::error::SampleError;
use crate::instance::ZeroSample;
use sample_capture::{Asserter, CaptureFailure, CaptureLog, TRUE};
use std::io::Write;
use tracing::{debug, warn};

/// A sample method, called on a fresh `S`.
pub type Demonstration<S> = fn(&S, &mut dyn Write) -> Result<(), SampleError>;

/// One named sample and the literal it must print.
#[derive(Clone, Copy, Debug)]
pub struct Entry<S> {
    pub name: &'static str,
    pub expected: &'static str,
    pub demonstration: Demonstration<S>,
}

impl<S> Entry<S> {
    /// A sample that must print `true`.
    pub const fn new(name: &'static str, demonstration: Demonstration<S>) -> Self {
        Self::printing(name, TRUE, demonstration)
    }

    pub const fn printing(
        name: &'static str,
        expected: &'static str,
        demonstration: Demonstration<S>,
    ) -> Self {
        Self {
            name,
            expected,
            demonstration,
        }
    }
}

impl<S: Default> Entry<S> {
    /// Run against a fresh sample and require it to print `expected`.
    pub fn check(&self, asserter: &Asserter) -> Result<(), CaptureFailure<SampleError>> {
        let sample = S::default();
        asserter.prints(self.expected, |out: &mut dyn Write| {
            (self.demonstration)(&sample, out)
        })
    }
}

/// Constructor samples, keyed by the names they are published under.
pub const COMPANION_SAMPLES: [Entry<ZeroCompanionSample>; 5] = [
    Entry::new("fromByte", ZeroCompanionSample::from_byte),
    Entry::new("fromByteOrNull", ZeroCompanionSample::from_byte_or_none),
    Entry::new("fromShort", ZeroCompanionSample::from_short),
    Entry::new("fromShortOrNull", ZeroCompanionSample::from_short_or_none),
    Entry::new("fromIntOrNull", ZeroCompanionSample::from_int_or_none),
];

/// Instance samples, keyed by the names they are published under.
pub const INSTANCE_SAMPLES: [Entry<ZeroSample>; 8] = [
    Entry::new("equals", ZeroSample::equality),
    Entry::new("hashCode", ZeroSample::hashing),
    Entry::printing("toByte", "0", ZeroSample::to_byte),
    Entry::new("toShort", ZeroSample::to_short),
    Entry::new("toInt", ZeroSample::to_int),
    Entry::new("toLong", ZeroSample::to_long),
    Entry::new("toFloat", ZeroSample::to_float),
    Entry::printing("toString", "0", ZeroSample::display),
];

/// A set of samples checked under one [`Asserter`].
#[derive(Clone, Debug)]
pub struct Fixture<S> {
    entries: Vec<Entry<S>>,
    asserter: Asserter,
}

impl Fixture<ZeroCompanionSample> {
    /// The constructor samples, in publication order.
    pub fn companion() -> Self {
        Self::new(COMPANION_SAMPLES)
    }
}

impl Fixture<ZeroSample> {
    /// The instance samples, in publication order.
    pub fn instance() -> Self {
        Self::new(INSTANCE_SAMPLES)
    }
}

impl<S: Default> Fixture<S> {
    pub fn new(entries: impl IntoIterator<Item = Entry<S>>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            asserter: Asserter::default(),
        }
    }

    pub fn with_asserter(mut self, asserter: Asserter) -> Self {
        self.asserter = asserter;
        self
    }

    pub fn entries(&self) -> &[Entry<S>] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn get(&self, name: &str) -> Option<&Entry<S>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Check a single sample by name; `None` if no such sample exists.
    pub fn check(&self, name: &str) -> Option<Result<(), CaptureFailure<SampleError>>> {
        self.get(name).map(|entry| entry.check(&self.asserter))
    }

    /// Check every sample, recording each run in `log`.
    ///
    /// Every entry runs even after a failure. Returns how many passed.
    pub fn run_all(&self, log: &CaptureLog) -> usize {
        let mut passed = 0;
        for entry in &self.entries {
            let sample = S::default();
            let result = log.check(
                &self.asserter,
                entry.name,
                entry.expected,
                |out: &mut dyn Write| (entry.demonstration)(&sample, out),
            );
            match result {
                Ok(()) => passed += 1,
                Err(failure) => warn!(name = entry.name, %failure, "sample failed"),
            }
        }
        debug!(passed, total = self.entries.len(), "fixture finished");
        passed
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
