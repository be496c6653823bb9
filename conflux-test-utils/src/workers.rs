// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Canned workers for race tests.
//!
//! Both builders honor cancellation: the delay timer races against the
//! worker's scope, and a cancelled scope wins with its own error.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use conflux_core::{ConfluxError, Scope};
use conflux_race::WorkFn;

/// A worker that succeeds with `response` after `delay`.
pub fn work_ok<Req, Resp>(response: Resp, delay: Duration) -> WorkFn<Req, Resp, ConfluxError>
where
    Req: Send + Sync + 'static,
    Resp: Clone + Send + Sync + 'static,
{
    Box::new(move |scope: Scope, _request: Arc<Req>| {
        let response = response.clone();
        Box::pin(async move {
            tokio::select! {
                () = scope.cancelled() => Err(scope.cancel_error()),
                () = sleep(delay) => Ok(response),
            }
        })
    })
}

/// A worker that fails with a [`ConfluxError::Worker`] after `delay`.
pub fn work_err<Req, Resp>(context: &str, delay: Duration) -> WorkFn<Req, Resp, ConfluxError>
where
    Req: Send + Sync + 'static,
    Resp: Send + 'static,
{
    let context = context.to_owned();
    Box::new(move |scope: Scope, _request: Arc<Req>| {
        let context = context.clone();
        Box::pin(async move {
            tokio::select! {
                () = scope.cancelled() => Err(scope.cancel_error()),
                () = sleep(delay) => Err(ConfluxError::worker(context)),
            }
        })
    })
}
