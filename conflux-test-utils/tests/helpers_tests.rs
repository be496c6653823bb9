// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use conflux_test_utils::helpers::{assert_no_element_emitted, collect_all, expect_end, expect_next};
use conflux_test_utils::TestChannel;

#[tokio::test]
async fn test_channel_delivers_pushed_values() {
    // Arrange
    let mut channel = TestChannel::new();

    // Act
    channel.push(1);
    channel.push(2);

    // Assert
    expect_next(&mut channel.stream, 1).await;
    expect_next(&mut channel.stream, 2).await;
}

#[tokio::test]
async fn test_channel_ends_after_close() {
    // Arrange
    let TestChannel { sender, mut stream } = TestChannel::new();
    sender.send(7).expect("receiver dropped");

    // Act
    drop(sender);

    // Assert
    expect_next(&mut stream, 7).await;
    expect_end(&mut stream).await;
}

#[tokio::test]
async fn test_channel_from_values_is_preloaded_and_closed() {
    // Arrange
    let channel = TestChannel::from_values(vec![1, 2, 3]);

    // Assert
    assert_eq!(collect_all(channel.stream).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_assert_no_element_emitted_on_quiet_stream() {
    // Arrange
    let mut channel = TestChannel::<i32>::new();

    // Assert
    assert_no_element_emitted(&mut channel.stream, 20).await;
}
