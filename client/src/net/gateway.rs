//! Remote boundary for listing and sending conversation messages.
//!
//! DESIGN
//! ======
//! The conversation view only depends on this trait. The browser build uses
//! [`crate::net::api::HttpMessageGateway`]; tests drive the same flows with
//! in-memory fakes. Futures are not required to be `Send` because everything
//! runs on the single-threaded UI loop.

use std::future::Future;

use super::types::Message;

/// Why a gateway call did not produce a result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// The two opaque remote operations the conversation view needs.
pub trait MessageGateway {
    /// Fetch the ordered transcript, oldest first.
    fn list_messages(&self) -> impl Future<Output = Result<Vec<Message>, GatewayError>>;

    /// Send a trimmed, non-empty body. The returned message's id and role
    /// are authoritative.
    fn send_message(&self, body: &str) -> impl Future<Output = Result<Message, GatewayError>>;
}
