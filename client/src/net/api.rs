//! REST helpers for the conversation endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`GatewayError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{GatewayError, MessageGateway};
use super::types::Message;
#[cfg(feature = "hydrate")]
use super::types::SendMessageBody;

/// Collection endpoint for the active conversation.
pub const MESSAGES_ENDPOINT: &str = "/api/conversations/messages";

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> Result<(), GatewayError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(GatewayError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(err: impl std::fmt::Display) -> GatewayError {
    GatewayError::Decode(err.to_string())
}

/// Gateway backed by the host server's JSON endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpMessageGateway;

impl MessageGateway for HttpMessageGateway {
    /// `GET /api/conversations/messages`.
    async fn list_messages(&self) -> Result<Vec<Message>, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(MESSAGES_ENDPOINT)
                .send()
                .await
                .map_err(transport_error)?;
            status_error(resp.status())?;
            resp.json::<Vec<Message>>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(GatewayError::Unavailable)
        }
    }

    /// `POST /api/conversations/messages` with `{"text": body}`.
    async fn send_message(&self, body: &str) -> Result<Message, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = SendMessageBody { text: body.to_owned() };
            let resp = gloo_net::http::Request::post(MESSAGES_ENDPOINT)
                .json(&payload)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            status_error(resp.status())?;
            resp.json::<Message>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(GatewayError::Unavailable)
        }
    }
}
