// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
mod sorted_merge;

pub use sorted_merge::{sorted_merge, SortedMerge, SortedMergeExt};
