// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::time::Duration;

use conflux_core::{ConfluxError, Scope};
use conflux_test_utils::{work_err, work_ok};

#[tokio::test]
async fn test_work_ok_succeeds_after_delay() {
    // Arrange
    let worker = work_ok::<u32, u32>(5, Duration::from_millis(10));

    // Act
    let result = worker(Scope::new(), Arc::new(0)).await;

    // Assert
    assert_eq!(result, Ok(5));
}

#[tokio::test]
async fn test_work_err_fails_after_delay() {
    // Arrange
    let worker = work_err::<u32, u32>("backend down", Duration::from_millis(10));

    // Act
    let result = worker(Scope::new(), Arc::new(0)).await;

    // Assert
    assert_eq!(result, Err(ConfluxError::worker("backend down")));
}

#[tokio::test]
async fn test_workers_honor_explicit_cancellation() {
    // Arrange
    let worker = work_ok::<u32, u32>(5, Duration::from_secs(60));
    let scope = Scope::new();

    // Act
    scope.cancel();
    let result = worker(scope, Arc::new(0)).await;

    // Assert: prompt exit with the scope's error, not the success.
    assert_eq!(result, Err(ConfluxError::Cancelled));
}

#[tokio::test]
async fn test_workers_report_deadline_expiry() {
    // Arrange
    let worker = work_err::<u32, u32>("never seen", Duration::from_secs(60));
    let scope = Scope::with_timeout(Duration::from_millis(10));

    // Act
    let result = worker(scope.child(), Arc::new(0)).await;

    // Assert
    assert_eq!(result, Err(ConfluxError::DeadlineElapsed));
}
