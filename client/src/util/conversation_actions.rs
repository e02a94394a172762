//! Async load/send flows connecting the gateway to conversation state.
//!
//! DESIGN
//! ======
//! Each flow reads what it needs in one state update, awaits the gateway
//! without holding any borrow, then applies the result in a second update.
//! Updates go through [`ConversationCell`] so a disposed signal (view
//! unmounted mid-flight) turns the late completion into a no-op.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and recovered locally; nothing is surfaced as a
//! blocking error and nothing is retried.

#[cfg(test)]
#[path = "conversation_actions_test.rs"]
mod conversation_actions_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::gateway::MessageGateway;
use crate::state::conversation::{ConversationError, ConversationState};

/// Something that can apply a transition to conversation state, unless the
/// owner has gone away.
pub trait ConversationCell {
    fn try_apply<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R>;
}

impl ConversationCell for RwSignal<ConversationState> {
    fn try_apply<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Populate the transcript once when the view becomes active.
pub async fn load_transcript<G, C>(gateway: &G, cell: &C)
where
    G: MessageGateway,
    C: ConversationCell,
{
    if cell.try_apply(ConversationState::begin_load) != Some(true) {
        return;
    }

    let result = gateway.list_messages().await;
    if let Some(Err(err)) = cell.try_apply(|state| state.finish_load(result)) {
        leptos::logging::error!("{err}");
    }
}

/// Send the trimmed draft and apply the acknowledgement.
///
/// Returns `true` when the gateway accepted the message.
pub async fn submit_draft<G, C>(gateway: &G, cell: &C) -> bool
where
    G: MessageGateway,
    C: ConversationCell,
{
    let Some(body) = cell.try_apply(ConversationState::begin_send).flatten() else {
        return false;
    };

    match gateway.send_message(&body).await {
        Ok(message) => {
            cell.try_apply(|state| state.send_succeeded(message));
            true
        }
        Err(err) => {
            let err = cell
                .try_apply(|state| state.send_failed(err.clone()))
                .unwrap_or(ConversationError::SendFailed(err));
            leptos::logging::error!("{err}");
            false
        }
    }
}
