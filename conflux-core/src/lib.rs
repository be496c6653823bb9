// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
pub mod error;
pub mod scope;

pub use self::error::{ConfluxError, Result};
pub use self::scope::{CancelKind, Scope};
