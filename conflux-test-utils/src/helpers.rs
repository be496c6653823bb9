// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;
use std::time::Duration;

use futures::stream::{Stream, StreamExt};
use tokio::time::sleep;

pub async fn expect_next<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = T> + Unpin,
    T: PartialEq + Debug,
{
    let item = stream.next().await.expect("expected next item");
    assert_eq!(item, expected);
}

pub async fn expect_end<S, T>(stream: &mut S)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    let item = stream.next().await;
    assert!(item.is_none(), "expected end of stream, got {item:?}");
}

pub async fn collect_all<S, T>(stream: S) -> Vec<T>
where
    S: Stream<Item = T>,
{
    stream.collect().await
}

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected item emitted, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}
