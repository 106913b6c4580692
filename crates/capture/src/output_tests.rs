// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use std::panic::{self, AssertUnwindSafe};

#[test]
fn test_capture_collects_writes_in_order() {
    let (output, ()) = capture(|out| {
        write!(out, "tr").unwrap();
        writeln!(out, "ue").unwrap();
    });

    assert_eq!(output.as_bytes(), b"true\n");
    assert_eq!(output.text(), "true\n");
}

#[test]
fn test_capture_returns_action_result() {
    let (output, result) = capture(|out| -> std::io::Result<u32> {
        out.write_all(b"x")?;
        Ok(7)
    });

    assert_eq!(result.unwrap(), 7);
    assert_eq!(output.into_bytes(), b"x".to_vec());
}

#[test]
fn test_capture_with_no_writes_is_empty() {
    let (output, ()) = capture(|_| {});
    assert!(output.is_empty());
    assert_eq!(output, CapturedOutput::default());
}

#[test]
fn test_capture_lossy_decoding() {
    let (output, ()) = capture(|out| out.write_all(&[b't', 0xff, b'e']).unwrap());
    assert_eq!(output.text(), "t\u{fffd}e");
}

#[test]
fn test_panic_does_not_leak_into_next_window() {
    let unwound = panic::catch_unwind(AssertUnwindSafe(|| {
        capture(|out| {
            out.write_all(b"partial").unwrap();
            panic!("boom");
        })
    }));
    assert!(unwound.is_err());

    let (output, ()) = capture(|out| out.write_all(b"true").unwrap());
    assert_eq!(output.as_bytes(), b"true");
}

proptest! {
    #[test]
    fn test_capture_is_exact(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let (output, ()) = capture(|out| out.write_all(&bytes).unwrap());
        prop_assert_eq!(output.as_bytes(), bytes.as_slice());
    }
}
