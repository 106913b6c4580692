// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output capture and assertions for runnable code samples.
//!
//! A sample demonstrates some API and prints `true` when the demonstration
//! holds. This crate runs such samples against an in-memory output sink and
//! turns what they printed into a pass/fail result, optionally recording
//! each run in a [`CaptureLog`].

mod assert;
mod config;
mod duration_serde;
mod error;
mod log;
mod output;
mod run;

pub use assert::{assert_prints, assert_prints_true, prints, prints_true, Asserter, TRUE};
pub use config::{CaptureConfig, TerminatorPolicy, DEFAULT_DIAGNOSTIC_LIMIT};
pub use error::{CaptureFailure, OutputMismatch};
pub use log::CaptureLog;
pub use output::{capture, CapturedOutput};
pub use run::{CapturedRun, RunOutcome};
