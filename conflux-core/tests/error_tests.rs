// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use conflux_core::ConfluxError;

#[test]
fn test_worker_error_display() {
    let error = ConfluxError::worker("backend unreachable");
    assert_eq!(error.to_string(), "worker failed: backend unreachable");
}

#[test]
fn test_cancellation_errors_display() {
    assert_eq!(ConfluxError::Cancelled.to_string(), "scope cancelled");
    assert_eq!(ConfluxError::DeadlineElapsed.to_string(), "deadline elapsed");
}

#[test]
fn test_is_cancellation() {
    assert!(ConfluxError::Cancelled.is_cancellation());
    assert!(ConfluxError::DeadlineElapsed.is_cancellation());
    assert!(!ConfluxError::worker("boom").is_cancellation());
}

#[test]
fn test_errors_are_comparable() {
    assert_eq!(ConfluxError::worker("a"), ConfluxError::worker("a"));
    assert_ne!(ConfluxError::worker("a"), ConfluxError::worker("b"));
    assert_ne!(ConfluxError::Cancelled, ConfluxError::DeadlineElapsed);
}
