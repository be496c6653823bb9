// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Conflux
//!
//! Two small, independent concurrency building blocks for async Rust:
//!
//! - **Sorted merge** ([`sorted_merge`]): combine two streams that each
//!   emit values in non-decreasing order into one sorted stream, without
//!   buffering more than one pending value per input and without knowing
//!   the lengths in advance.
//! - **Race** ([`race`]): dispatch one request to N workers running
//!   concurrently under a shared cancellation [`Scope`], commit to the
//!   first success, tell the rest to stand down, and return only once
//!   every worker has been accounted for.
//!
//! Both build directly on tokio tasks and channels. They are independent
//! of each other and usable in isolation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use conflux_rx::prelude::*;
//! use futures::stream;
//!
//! #[tokio::main]
//! async fn main() {
//!     let merged = sorted_merge(stream::iter(vec![1, 3]), stream::iter(vec![2, 4]));
//!     // consume `merged` like any other stream
//! }
//! ```

// Re-export core types
pub use conflux_core::{CancelKind, ConfluxError, Result, Scope};

// Re-export the two primitives
pub use conflux_merge::{sorted_merge, SortedMerge, SortedMergeExt};
pub use conflux_race::{race, RaceExt, WorkFn};

/// Prelude module for convenient imports
pub mod prelude {
    pub use conflux_core::{ConfluxError, Scope};
    pub use conflux_merge::{sorted_merge, SortedMergeExt};
    pub use conflux_race::{race, RaceExt, WorkFn};
}
