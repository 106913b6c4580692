// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The number zero as a type.

use std::fmt;
use thiserror::Error;

/// Represents the integer zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zero;

/// A number other than zero was given where zero was required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Number should be zero (tried with {value})")]
pub struct InvalidZero {
    pub value: i64,
}

macro_rules! from_width {
    ($checked:ident, $or_none:ident, $to:ident, $ty:ty) => {
        #[doc = concat!("Creates a [`Zero`] from an `", stringify!($ty), "`, or fails if it is not `0`.")]
        pub fn $checked(number: $ty) -> Result<Self, InvalidZero> {
            if number == 0 {
                Ok(Self)
            } else {
                Err(InvalidZero {
                    value: i64::from(number),
                })
            }
        }

        #[doc = concat!("Creates a [`Zero`] from an `", stringify!($ty), "`, or `None` if it is not `0`.")]
        pub fn $or_none(number: $ty) -> Option<Self> {
            Self::$checked(number).ok()
        }

        pub const fn $to(self) -> $ty {
            0
        }
    };
}

impl Zero {
    pub const fn new() -> Self {
        Self
    }

    from_width!(from_i8, from_i8_or_none, to_i8, i8);
    from_width!(from_i16, from_i16_or_none, to_i16, i16);
    from_width!(from_i32, from_i32_or_none, to_i32, i32);
    from_width!(from_i64, from_i64_or_none, to_i64, i64);

    pub const fn to_f32(self) -> f32 {
        0.0
    }
}

macro_rules! try_from_width {
    ($($ty:ty => $checked:ident),*) => {
        $(
            impl TryFrom<$ty> for Zero {
                type Error = InvalidZero;

                fn try_from(number: $ty) -> Result<Self, Self::Error> {
                    Self::$checked(number)
                }
            }
        )*
    };
}

try_from_width!(i8 => from_i8, i16 => from_i16, i32 => from_i32, i64 => from_i64);

impl fmt::Display for Zero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0")
    }
}

#[cfg(test)]
#[path = "zero_tests.rs"]
mod tests;
