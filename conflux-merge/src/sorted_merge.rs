// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Two-way sorted stream merge.
//!
//! [`sorted_merge`] combines two streams that each emit their items in
//! non-decreasing order into a single stream emitting the multiset union
//! of both, still in non-decreasing order. The inputs are trusted to be
//! sorted; they are passed through, never re-sorted.
//!
//! The merge runs on its own tokio task, concurrently with whatever
//! consumes the output, and holds at most one pending value per input.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{Stream, StreamExt};
use pin_project::pin_project;
use tokio::sync::mpsc::{self, Sender};
use tokio_stream::wrappers::ReceiverStream;

type InputStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

// Enough slack for both held values to be emitted back to back without
// a round-trip stall; any capacity is correct, this one is just faster.
const OUTPUT_BUFFER: usize = 2;

/// The output of [`sorted_merge`]: a single-pass, non-restartable stream.
///
/// Terminates exactly when both inputs are exhausted. A stream that never
/// terminates keeps the merge alive forever; there is no error channel
/// and no built-in cancellation. Callers that need early stop should wrap
/// the *inputs* with their own cancellation-aware adapters — dropping the
/// output does not stop the merge from consuming both inputs in full.
#[pin_project]
pub struct SortedMerge<T> {
    #[pin]
    output: ReceiverStream<T>,
}

impl<T> Stream for SortedMerge<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().output.poll_next(cx)
    }
}

/// Merges two sorted streams into one sorted stream.
///
/// Returns immediately; the merge itself runs on a spawned task. On equal
/// values the item from `first` is emitted before the item from `second`,
/// so the output is deterministic even with duplicates across inputs.
///
/// Must be called from within a tokio runtime.
///
/// # Example
///
/// ```
/// use conflux_merge::sorted_merge;
/// use futures::stream::{self, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let merged = sorted_merge(stream::iter(vec![1, 3, 5]), stream::iter(vec![2, 4]));
/// let values: Vec<i32> = merged.collect().await;
/// assert_eq!(values, vec![1, 2, 3, 4, 5]);
/// # }
/// ```
pub fn sorted_merge<A, B, T>(first: A, second: B) -> SortedMerge<T>
where
    A: Stream<Item = T> + Send + 'static,
    B: Stream<Item = T> + Send + 'static,
    T: Ord + Send + 'static,
{
    let (sink, output) = mpsc::channel(OUTPUT_BUFFER);

    let first: InputStream<T> = Box::pin(first);
    let second: InputStream<T> = Box::pin(second);
    tokio::spawn(run_merge(first, second, sink));

    SortedMerge {
        output: ReceiverStream::new(output),
    }
}

async fn run_merge<T>(mut first: InputStream<T>, mut second: InputStream<T>, sink: Sender<T>)
where
    T: Ord + Send + 'static,
{
    // One held value per input; `None` means "not yet fetched", which is
    // distinct from the input being exhausted (that ends the loop).
    let mut held_first: Option<T> = None;
    let mut held_second: Option<T> = None;

    loop {
        if held_first.is_none() {
            match first.next().await {
                Some(value) => held_first = Some(value),
                None => {
                    // First input exhausted: flush the other side's held
                    // value, then pass its remainder through untouched.
                    if let Some(value) = held_second.take() {
                        if sink.send(value).await.is_err() {
                            drain(second).await;
                            return;
                        }
                    }
                    pour(second, sink).await;
                    return;
                }
            }
        }

        if held_second.is_none() {
            match second.next().await {
                Some(value) => held_second = Some(value),
                None => {
                    if let Some(value) = held_first.take() {
                        if sink.send(value).await.is_err() {
                            drain(first).await;
                            return;
                        }
                    }
                    pour(first, sink).await;
                    return;
                }
            }
        }

        // Both slots are filled here. Ties favour the first input.
        let value = if held_first <= held_second {
            held_first.take().unwrap()
        } else {
            held_second.take().unwrap()
        };

        if sink.send(value).await.is_err() {
            drain(first).await;
            drain(second).await;
            return;
        }
    }
}

/// Forwards the rest of `src` without further comparison.
async fn pour<T>(mut src: InputStream<T>, sink: Sender<T>) {
    while let Some(value) = src.next().await {
        if sink.send(value).await.is_err() {
            drain(src).await;
            return;
        }
    }
}

/// Consumes `src` to exhaustion, discarding its values. The output was
/// abandoned but the inputs are still read exactly once, in full.
async fn drain<T>(mut src: InputStream<T>) {
    while src.next().await.is_some() {}
}

/// Extension trait for merging a sorted stream with another one.
pub trait SortedMergeExt: Stream + Sized {
    /// Merges this sorted stream with `other`, emitting the multiset
    /// union of both in non-decreasing order. See [`sorted_merge`].
    fn sorted_merge_with<S>(self, other: S) -> SortedMerge<Self::Item>
    where
        Self: Send + 'static,
        S: Stream<Item = Self::Item> + Send + 'static,
        Self::Item: Ord + Send + 'static;
}

impl<A> SortedMergeExt for A
where
    A: Stream + Sized,
{
    fn sorted_merge_with<S>(self, other: S) -> SortedMerge<Self::Item>
    where
        Self: Send + 'static,
        S: Stream<Item = Self::Item> + Send + 'static,
        Self::Item: Ord + Send + 'static,
    {
        sorted_merge(self, other)
    }
}
