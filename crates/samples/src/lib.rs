// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runnable usage samples for the [`Zero`] number type.
//!
//! Every sample prints a known literal, usually `true`, when the API it
//! shows off behaves as documented. [`Fixture`] lists them by name so they
//! can be checked with [`sample_capture`].

mod companion;
mod error;
mod fixture;
mod instance;
mod zero;

pub use companion::ZeroCompanionSample;
pub use error::SampleError;
pub use fixture::{Demonstration, Entry, Fixture, COMPANION_SAMPLES, INSTANCE_SAMPLES};
pub use instance::ZeroSample;
pub use zero::{InvalidZero, Zero};
