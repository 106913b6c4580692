// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised by samples while they run.

use crate::zero::InvalidZero;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("failed to write sample output: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    InvalidZero(#[from] InvalidZero),
}
