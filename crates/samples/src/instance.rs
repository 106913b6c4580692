// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Samples for the methods of a [`Zero`] value.

use crate::error::SampleError;
use crate::zero::Zero;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Write;

/// Usage samples for [`Zero`] instances.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroSample;

impl ZeroSample {
    pub fn new() -> Self {
        Self
    }

    pub fn equality(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let first = Zero::new();
        let second = Zero::new();
        writeln!(out, "{}", first == second)?;
        Ok(())
    }

    pub fn hashing(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let first = hash_of(&Zero::new());
        let second = hash_of(&Zero::new());
        writeln!(out, "{}", first == second)?;
        Ok(())
    }

    /// Prints `0`.
    pub fn to_byte(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: i8 = Zero::new().to_i8();
        writeln!(out, "{}", number)?;
        Ok(())
    }

    pub fn to_short(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: i16 = Zero::new().to_i16();
        writeln!(out, "{}", number == 0)?;
        Ok(())
    }

    pub fn to_int(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: i32 = Zero::new().to_i32();
        writeln!(out, "{}", number == 0)?;
        Ok(())
    }

    pub fn to_long(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: i64 = Zero::new().to_i64();
        writeln!(out, "{}", number == 0)?;
        Ok(())
    }

    pub fn to_float(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let number: f32 = Zero::new().to_f32();
        writeln!(out, "{}", number == 0.0)?;
        Ok(())
    }

    /// Prints `0`.
    pub fn display(&self, out: &mut dyn Write) -> Result<(), SampleError> {
        let text: String = Zero::new().to_string();
        writeln!(out, "{}", text)?;
        Ok(())
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
