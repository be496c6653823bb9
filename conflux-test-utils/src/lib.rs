// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
pub mod helpers;
pub mod test_channel;
pub mod workers;

pub use test_channel::{TestChannel, TestChannels};
pub use workers::{work_err, work_ok};
