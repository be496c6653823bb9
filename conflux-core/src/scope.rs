// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation scopes with deadline support.
//!
//! A [`Scope`] is a cloneable handle to a shared cancellation state,
//! built on [`tokio_util::sync::CancellationToken`]. On top of the raw
//! token it remembers *why* the scope was cancelled, so that a worker
//! observing cancellation can report a deadline expiry distinctly from
//! an explicit cancel.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::ConfluxError;

/// Why a scope was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelKind {
    /// [`Scope::cancel`] was called.
    Cancelled,
    /// The deadline passed to [`Scope::with_timeout`] elapsed.
    DeadlineElapsed,
}

/// A cancellation scope that can be handed to concurrently running tasks.
///
/// Scopes form a tree: [`Scope::child`] derives a scope that is cancelled
/// whenever its parent is, but can also be cancelled on its own without
/// affecting the parent. The cancellation reason is sticky — the first
/// cancellation observed along the chain decides what
/// [`Scope::cancel_error`] reports.
///
/// # Example
///
/// ```
/// use conflux_core::Scope;
///
/// # async fn example() {
/// let scope = Scope::new();
/// let worker_scope = scope.child();
///
/// tokio::spawn(async move {
///     worker_scope.cancelled().await;
///     // wind down
/// });
///
/// scope.cancel();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Scope {
    token: CancellationToken,
    state: Arc<ScopeState>,
}

#[derive(Debug)]
struct ScopeState {
    reason: OnceLock<CancelKind>,
    parent: Option<Arc<ScopeState>>,
}

impl Scope {
    /// Create a scope that never cancels on its own.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            state: Arc::new(ScopeState {
                reason: OnceLock::new(),
                parent: None,
            }),
        }
    }

    /// Create a scope that cancels itself once `timeout` has elapsed.
    ///
    /// Workers observing the cancellation will see
    /// [`CancelKind::DeadlineElapsed`], unless the scope was explicitly
    /// cancelled before the deadline fired.
    ///
    /// Must be called from within a tokio runtime, since the deadline is
    /// driven by a spawned timer task. The timer task ends as soon as
    /// the scope is cancelled, whichever side wins; a scope that is
    /// merely dropped keeps its timer sleeping until the full deadline
    /// elapses, so callers done with a long-deadline scope should
    /// [`cancel`](Self::cancel) it.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let scope = Self::new();

        let token = scope.token.clone();
        let state = Arc::clone(&scope.state);
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(timeout) => {
                    let _ = state.reason.set(CancelKind::DeadlineElapsed);
                    token.cancel();
                }
            }
        });

        scope
    }

    /// Derive a child scope.
    ///
    /// The child is cancelled whenever this scope is cancelled; cancelling
    /// the child leaves this scope untouched.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            state: Arc::new(ScopeState {
                reason: OnceLock::new(),
                parent: Some(Arc::clone(&self.state)),
            }),
        }
    }

    /// Cancel the scope, waking every task waiting on [`Scope::cancelled`].
    ///
    /// Idempotent; the reason recorded by the first cancellation sticks.
    pub fn cancel(&self) {
        // Record the reason before waking waiters so they never observe
        // a cancelled scope without one.
        let _ = self.state.reason.set(CancelKind::Cancelled);
        self.token.cancel();
    }

    /// Check whether the scope has been cancelled (non-blocking).
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes once the scope is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }

    /// The reason this scope was cancelled, or `None` while it is active.
    ///
    /// Resolution walks up the parent chain: a child cancelled by its
    /// parent's deadline reports [`CancelKind::DeadlineElapsed`].
    #[must_use]
    pub fn cancel_kind(&self) -> Option<CancelKind> {
        if !self.token.is_cancelled() {
            return None;
        }

        let mut state = Some(self.state.as_ref());
        while let Some(current) = state {
            if let Some(kind) = current.reason.get() {
                return Some(*kind);
            }
            state = current.parent.as_deref();
        }

        // Cancelled through the raw token linkage before any reason
        // became visible; treat as a plain cancel.
        Some(CancelKind::Cancelled)
    }

    /// The error a worker should return when it stops because this scope
    /// was cancelled.
    ///
    /// Falls back to [`ConfluxError::Cancelled`] if called while the
    /// scope is still active.
    #[must_use]
    pub fn cancel_error(&self) -> ConfluxError {
        match self.cancel_kind() {
            Some(CancelKind::DeadlineElapsed) => ConfluxError::DeadlineElapsed,
            _ => ConfluxError::Cancelled,
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
