// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Samples for the constructors of [`Zero`].
//!
//! Each sample writes `true` to `out` when the constructor behaves as
//! documented.

use crate::error::SampleError;
use crate::zero::Zero;
use std::io::Write;

/// Usage samples for the [`Zero`] constructors.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroCompanionSample;

impl ZeroCompanionSample {
    pub fn new() -> Self {
        Self
    }

    pub fn from_byte(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: i8 = 0;
        let zero = Zero::from_i8(number)?;
        writeln!(out, "{}", zero == Zero::new())?;
        Ok(())
    }

    pub fn from_byte_or_none(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: i8 = 0;
        let zero: Option<Zero> = Zero::from_i8_or_none(number);
        writeln!(out, "{}", zero.is_some())?;
        Ok(())
    }

    pub fn from_short(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: i16 = 0;
        let zero = Zero::from_i16(number)?;
        writeln!(out, "{}", zero == Zero::new())?;
        Ok(())
    }

    pub fn from_short_or_none(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: i16 = 0;
        let zero: Option<Zero> = Zero::from_i16_or_none(number);
        writeln!(out, "{}", zero.is_some())?;
        Ok(())
    }

    pub fn from_int_or_none(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: i32 = 0;
        let zero: Option<Zero> = Zero::from_i32_or_none(number);
        writeln!(out, "{}", zero.is_some())?;
        Ok(())
    }
}
