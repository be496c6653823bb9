// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types shared by the conflux primitives.
//!
//! The race combinator never manufactures errors of its own: it relays
//! whatever its workers produce. This module provides the standard
//! taxonomy for workers that do not bring their own error type, plus the
//! two cancellation outcomes a [`Scope`](crate::Scope) can report.

/// Standard error type for conflux workers.
///
/// Workers racing under a [`Scope`](crate::Scope) either fail on their
/// own terms ([`Worker`](Self::Worker)) or bail out because the scope
/// asked them to stop ([`Cancelled`](Self::Cancelled),
/// [`DeadlineElapsed`](Self::DeadlineElapsed)).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfluxError {
    /// A worker failed while performing its own work.
    #[error("worker failed: {context}")]
    Worker {
        /// Description of what went wrong inside the worker
        context: String,
    },

    /// The scope was cancelled explicitly.
    #[error("scope cancelled")]
    Cancelled,

    /// The scope's deadline elapsed before the work completed.
    #[error("deadline elapsed")]
    DeadlineElapsed,
}

impl ConfluxError {
    /// Create a worker failure with the given context.
    pub fn worker(context: impl Into<String>) -> Self {
        Self::Worker {
            context: context.into(),
        }
    }

    /// Whether this error was caused by scope cancellation rather than
    /// by the worker's own logic.
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineElapsed)
    }
}

/// Specialized Result type for conflux operations.
pub type Result<T> = std::result::Result<T, ConfluxError>;
