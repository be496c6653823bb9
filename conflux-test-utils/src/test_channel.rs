// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-style test channels.
//!
//! A [`TestChannel`] pairs an unbounded sender with the receiving end
//! exposed as a stream, so tests can feed a merge or a worker while the
//! primitive under test is already consuming.

use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tokio_stream::wrappers::UnboundedReceiverStream;

pub struct TestChannel<T> {
    pub sender: UnboundedSender<T>,
    pub stream: UnboundedReceiverStream<T>,
}

impl<T> TestChannel<T> {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded_channel();
        let stream = UnboundedReceiverStream::new(receiver);
        Self { sender, stream }
    }

    /// A channel pre-loaded with `values` and already closed: its stream
    /// yields exactly `values` and then ends.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let channel = Self::new();
        for value in values {
            channel.push(value);
        }

        let (closed_sender, _) = unbounded_channel();
        Self {
            sender: closed_sender,
            stream: channel.stream,
        }
    }

    pub fn push(&self, value: T) {
        self.sender.send(value).expect("receiver dropped");
    }

    pub fn close(self) {
        drop(self.sender);
    }
}

impl<T> Default for TestChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create multiple test channels at once.
pub struct TestChannels;

impl TestChannels {
    /// Creates two test channels.
    pub fn two<T>() -> (TestChannel<T>, TestChannel<T>) {
        (TestChannel::new(), TestChannel::new())
    }
}
