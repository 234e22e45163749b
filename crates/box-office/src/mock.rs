//! # Mock Helpers
//!
//! Test utilities for exercising [`BoxOfficeClient`](crate::client::BoxOfficeClient)
//! logic without spawning the real actor. The mock client sends requests to
//! a channel the test controls, so the test can assert on the request and
//! respond with whatever success or failure it wants to simulate.

use tokio::sync::mpsc;

use crate::client::BoxOfficeClient;
use crate::message::BoxOfficeRequest;

/// Creates a client wired to a receiver the test holds instead of an actor.
pub fn create_mock_client(buffer_size: usize) -> (BoxOfficeClient, mpsc::Receiver<BoxOfficeRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (BoxOfficeClient::new(sender), receiver)
}

/// Receives the next request, panicking if the channel closed first.
pub async fn expect_request(receiver: &mut mpsc::Receiver<BoxOfficeRequest>) -> BoxOfficeRequest {
    receiver
        .recv()
        .await
        .expect("expected a request, channel closed")
}
