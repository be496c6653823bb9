// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fan-out race with cancellation.
//!
//! [`race`] dispatches one request to N workers concurrently, commits to
//! the first success, tells the rest to stand down, and still accounts
//! for every worker's completion before returning. If nobody succeeds,
//! the chronologically last failure is returned.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use tokio::sync::mpsc;

use conflux_core::Scope;

/// A worker entry for [`race`].
///
/// Receives the race's child [`Scope`] and a shared reference to the
/// request. A well-behaved worker watches the scope and returns promptly
/// with its cancellation error (see
/// [`Scope::cancel_error`](conflux_core::Scope::cancel_error)) once the
/// scope is cancelled, leaving no background activity behind.
pub type WorkFn<Req, Resp, E> =
    Box<dyn Fn(Scope, Arc<Req>) -> BoxFuture<'static, Result<Resp, E>> + Send + Sync>;

/// Runs all `workers` concurrently against `request` and returns the
/// first success, or the last failure once every worker has reported.
///
/// A child scope is derived from `scope` and handed to every worker; it
/// is cancelled as soon as a winner is recorded, or transitively when
/// the caller's scope is cancelled or its deadline elapses. Worker
/// errors pass through verbatim — they are never wrapped or aggregated,
/// and later failures overwrite earlier ones. A failure never displaces
/// a recorded winner.
///
/// The call does not return until all spawned worker tasks have been
/// joined, so no worker outlives the call. A success that arrives after
/// the caller's scope already expired is still honored if it is the
/// first outcome observed.
///
/// # Panics
///
/// Panics if `workers` is empty; supplying at least one worker is part
/// of the caller contract.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use conflux_core::{ConfluxError, Scope};
/// use conflux_race::{race, WorkFn};
///
/// # #[tokio::main]
/// # async fn main() {
/// let workers: Vec<WorkFn<u32, u32, ConfluxError>> = vec![Box::new(|_scope, req| {
///     Box::pin(async move { Ok(*req * 2) })
/// })];
///
/// let result = race(&Scope::new(), Arc::new(21), workers).await;
/// assert_eq!(result, Ok(42));
/// # }
/// ```
pub async fn race<Req, Resp, E>(
    scope: &Scope,
    request: Arc<Req>,
    workers: Vec<WorkFn<Req, Resp, E>>,
) -> Result<Resp, E>
where
    Req: Send + Sync + 'static,
    Resp: Send + 'static,
    E: Send + 'static,
{
    let child = scope.child();

    let worker_count = workers.len();
    let (outcome_tx, mut outcome_rx) = mpsc::channel(worker_count.max(1));

    let mut handles = Vec::with_capacity(worker_count);
    for worker in workers {
        let worker_scope = child.clone();
        let request = Arc::clone(&request);
        let outcome_tx = outcome_tx.clone();

        handles.push(tokio::spawn(async move {
            let outcome = worker(worker_scope, request).await;
            // The collector stays subscribed until all outcomes are in,
            // so this only fails if the collector itself went away.
            let _ = outcome_tx.send(outcome).await;
        }));
    }
    drop(outcome_tx);

    let mut winner: Option<Resp> = None;
    let mut last_error: Option<E> = None;

    // Collect outcomes serially, in arrival order. The loop runs to N
    // even after a winner is found: every worker is accounted for before
    // the race resolves.
    for _ in 0..worker_count {
        match outcome_rx.recv().await {
            Some(Ok(response)) => {
                if winner.is_none() {
                    crate::debug!("race: first success observed, abandoning remaining workers");
                    winner = Some(response);
                    child.cancel();
                } else {
                    crate::trace!("race: discarding success, winner already recorded");
                }
            }
            Some(Err(error)) => {
                crate::trace!("race: failure observed");
                last_error = Some(error);
            }
            // A worker panicked and never reported; nothing more will
            // arrive on the channel.
            None => break,
        }
    }

    // Each worker task ends right after reporting; join them all so no
    // task outlives the call.
    for handle in handles {
        let _ = handle.await;
    }

    match winner {
        Some(response) => Ok(response),
        None => Err(last_error.expect("race requires at least one worker")),
    }
}

/// Extension trait for racing a list of workers.
#[async_trait]
pub trait RaceExt<Req, Resp, E> {
    /// Races these workers against each other for `request`. See [`race`].
    async fn race(self, scope: &Scope, request: Arc<Req>) -> Result<Resp, E>;
}

#[async_trait]
impl<Req, Resp, E> RaceExt<Req, Resp, E> for Vec<WorkFn<Req, Resp, E>>
where
    Req: Send + Sync + 'static,
    Resp: Send + 'static,
    E: Send + 'static,
{
    async fn race(self, scope: &Scope, request: Arc<Req>) -> Result<Resp, E> {
        race(scope, request, self).await
    }
}
