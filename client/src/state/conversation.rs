//! Conversation view state: transcript, composer, and scroll follower.
//!
//! DESIGN
//! ======
//! The whole view lives in one `ConversationState` held by a single signal,
//! so every transition (load result, edit, send result) is applied in one
//! update and handlers never observe a half-applied change. Timers and DOM
//! access stay outside; this module only hands out tickets and answers
//! "should I act" questions, which keeps it testable without a browser.
//!
//! LIFECYCLE
//! =========
//! `Idle -> Loading -> Ready` on mount, `Ready -> Ready` on every append.
//! After `teardown` every late async completion is ignored.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::net::gateway::GatewayError;
use crate::net::types::Message;

/// Quiet period after the last edit before the typing indicator clears.
pub const TYPING_QUIET_PERIOD_MS: u32 = 1500;

/// Character cap the composer's input surface enforces (`maxlength`).
pub const DRAFT_MAX_CHARS: usize = 300;

/// Failures the view recovers from locally.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConversationError {
    #[error("failed to load messages: {0}")]
    LoadFailed(GatewayError),
    #[error("failed to send message: {0}")]
    SendFailed(GatewayError),
}

/// Page lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
}

// =============================================================================
// TRANSCRIPT
// =============================================================================

/// Append-only ordered message list, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Install the initial list. Only valid while nothing has been appended.
    fn install(&mut self, messages: Vec<Message>) {
        debug_assert!(self.messages.is_empty(), "transcript installed after appends");
        self.messages = messages;
    }

    fn append(&mut self, message: Message) {
        self.messages.push(message);
    }
}

// =============================================================================
// COMPOSER
// =============================================================================

/// Handle for one scheduled "clear typing indicator" callback.
///
/// Only the ticket from the most recent edit can clear the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTicket(u64);

/// Draft text, typing indicator, and send bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
    typing: bool,
    edit_seq: u64,
    sending: bool,
}

impl Composer {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Trimmed draft, or `None` when there is nothing worth sending.
    pub fn sendable_body(&self) -> Option<&str> {
        let trimmed = self.draft.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Replace the draft verbatim.
    ///
    /// Returns the ticket the caller should schedule for
    /// [`TYPING_QUIET_PERIOD_MS`], or `None` when the trimmed draft is empty
    /// and the indicator was cleared immediately. Any earlier ticket is
    /// invalidated either way.
    pub fn edit(&mut self, text: String) -> Option<TypingTicket> {
        self.draft = text;
        self.edit_seq += 1;
        if self.draft.trim().is_empty() {
            self.typing = false;
            return None;
        }
        self.typing = true;
        Some(TypingTicket(self.edit_seq))
    }

    /// Quiet period elapsed for `ticket`. Returns `true` if it cleared the
    /// indicator; stale tickets are ignored.
    pub fn quiet_period_elapsed(&mut self, ticket: TypingTicket) -> bool {
        if ticket.0 != self.edit_seq || !self.typing {
            return false;
        }
        self.typing = false;
        true
    }

    fn clear_after_send(&mut self) {
        self.draft.clear();
        self.typing = false;
        self.edit_seq += 1;
    }

    fn stop_typing(&mut self) {
        self.typing = false;
        self.edit_seq += 1;
    }
}

/// `Enter` without shift submits; everything else belongs to the input.
pub fn is_submit_key(key: &str, shift_held: bool) -> bool {
    key == "Enter" && !shift_held
}

// =============================================================================
// SCROLL FOLLOWER
// =============================================================================

/// Decides when the newest message should be scrolled into view.
///
/// Fires once per transcript size change and stays quiet when re-run with
/// a size it has already seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFollower {
    seen_len: usize,
}

impl ScrollFollower {
    pub fn observe(&mut self, len: usize) -> bool {
        if len == self.seen_len {
            return false;
        }
        self.seen_len = len;
        len > 0
    }
}

// =============================================================================
// CONVERSATION STATE
// =============================================================================

/// Everything the conversations page renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationState {
    phase: LoadPhase,
    transcript: Transcript,
    composer: Composer,
    torn_down: bool,
}

impl ConversationState {
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    #[cfg(test)]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether a submit right now would reach the gateway.
    pub fn can_submit(&self) -> bool {
        !self.torn_down
            && self.phase == LoadPhase::Ready
            && !self.composer.sending
            && self.composer.sendable_body().is_some()
    }

    /// `Idle -> Loading`. Returns `false` if the load already ran.
    pub fn begin_load(&mut self) -> bool {
        if self.torn_down || self.phase != LoadPhase::Idle {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// `Loading -> Ready`. A failed list degrades to an empty transcript.
    pub fn finish_load(&mut self, result: Result<Vec<Message>, GatewayError>) -> Result<(), ConversationError> {
        if self.torn_down || self.phase != LoadPhase::Loading {
            return Ok(());
        }
        self.phase = LoadPhase::Ready;
        match result {
            Ok(messages) => {
                self.transcript.install(messages);
                Ok(())
            }
            Err(err) => Err(ConversationError::LoadFailed(err)),
        }
    }

    pub fn edit_draft(&mut self, text: String) -> Option<TypingTicket> {
        if self.torn_down {
            return None;
        }
        self.composer.edit(text)
    }

    pub fn quiet_period_elapsed(&mut self, ticket: TypingTicket) -> bool {
        !self.torn_down && self.composer.quiet_period_elapsed(ticket)
    }

    /// Claim the single send slot and return the trimmed body to send.
    ///
    /// `None` leaves the state untouched: nothing to send, not ready yet, a
    /// send already in flight, or the view is gone.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let body = self.composer.sendable_body()?.to_owned();
        self.composer.sending = true;
        Some(body)
    }

    /// Apply the gateway's acknowledgement: append, clear draft, stop typing.
    pub fn send_succeeded(&mut self, message: Message) {
        if self.torn_down {
            return;
        }
        self.composer.sending = false;
        self.transcript.append(message);
        self.composer.clear_after_send();
    }

    /// Release the send slot; the draft stays as the user left it.
    pub fn send_failed(&mut self, err: GatewayError) -> ConversationError {
        self.composer.sending = false;
        ConversationError::SendFailed(err)
    }

    /// View unmounted: drop the indicator and ignore every late completion.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.composer.stop_typing();
        self.composer.sending = false;
    }
}
