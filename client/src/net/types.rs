//! Wire DTOs shared by the client, the host server, and the gateway.
//!
//! DESIGN
//! ======
//! Field names follow the JSON the conversation endpoints exchange
//! (`{"id": 1, "from": "agent", "text": "hi"}`) so serde round-trips stay
//! lossless on both sides of the boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Stable message identifier assigned by the gateway.
pub type MessageId = u64;

/// Who authored a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person using this view.
    #[default]
    User,
    /// The assistant on the other side of the conversation.
    Agent,
}

impl Sender {
    /// Lowercase wire name, also used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Agent => "agent",
        }
    }
}

/// One immutable conversation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Gateway-assigned identifier; authoritative, never invented locally.
    pub id: MessageId,
    /// Author role.
    pub from: Sender,
    /// Body text, rendered verbatim.
    pub text: String,
}

/// Request body for `POST /api/conversations/messages`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageBody {
    pub text: String,
}
