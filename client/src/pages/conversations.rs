//! Conversations page: transcript, typing hint, and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `ConversationState` signal for its lifetime. It loads
//! the transcript on mount, keeps the newest message in view, drives the
//! typing debounce timer, and sends drafts through the HTTP gateway. On
//! unmount the state is torn down so in-flight completions become no-ops.

#[cfg(test)]
#[path = "conversations_test.rs"]
mod conversations_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::header::Header;
use crate::components::message_row::MessageRow;
use crate::components::typing_indicator::TypingIndicator;
use crate::net::types::{MessageId, Sender};
use crate::state::conversation::{
    ConversationState, DRAFT_MAX_CHARS, LoadPhase, ScrollFollower, Transcript, is_submit_key,
};
#[cfg(feature = "hydrate")]
use crate::state::conversation::TYPING_QUIET_PERIOD_MS;
use crate::state::notifications::NotificationHub;
use crate::util::scroll::follow_newest;

/// Agent messages newer than `after`, as `(newest id, summary)`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn agent_activity_summary(transcript: &Transcript, after: Option<MessageId>) -> Option<(MessageId, String)> {
    let fresh = || {
        transcript
            .messages()
            .iter()
            .filter(move |m| m.from == Sender::Agent && after.is_none_or(|mark| m.id > mark))
    };
    let newest = fresh().map(|m| m.id).max()?;
    let summary = match fresh().count() {
        1 => "1 message from your agent".to_owned(),
        n => format!("{n} messages from your agent"),
    };
    Some((newest, summary))
}

/// Post one "New messages" notification for agent messages the hub has not
/// announced yet. Remounting the page over the same transcript posts nothing.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn announce_agent_activity(hub: &NotificationHub, transcript: &Transcript) -> Option<u64> {
    let (through, summary) = agent_activity_summary(transcript, hub.announced_through())?;
    hub.publish_activity(through, "New messages", summary)
}

#[component]
pub fn ConversationsPage() -> impl IntoView {
    let hub = expect_context::<NotificationHub>();
    let conversation = RwSignal::new(ConversationState::default());
    let end_ref = NodeRef::<leptos::html::Div>::new();
    let follower = StoredValue::new(ScrollFollower::default());

    #[cfg(feature = "hydrate")]
    let typing_timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

    // Initial load; runs once per mount.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::conversation_actions::load_transcript(&crate::net::api::HttpMessageGateway, &conversation)
            .await;
        conversation.try_with_untracked(|c| announce_agent_activity(&hub, c.transcript()));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = hub;

    on_cleanup(move || {
        conversation.try_update(ConversationState::teardown);
        #[cfg(feature = "hydrate")]
        typing_timer.try_update_value(|timer| {
            timer.take();
        });
    });

    // Bring the newest message into view once per transcript size change.
    let transcript_len = Memo::new(move |_| conversation.with(|c| c.transcript().len()));
    Effect::new(move || {
        let len = transcript_len.get();
        if follower.try_update_value(|f| f.observe(len)) == Some(true) {
            follow_newest(end_ref);
        }
    });

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let ticket = conversation.try_update(|c| c.edit_draft(text)).flatten();

        #[cfg(feature = "hydrate")]
        {
            // Replacing the stored handle drops, and so cancels, the previous timer.
            let next = ticket.map(|ticket| {
                gloo_timers::callback::Timeout::new(TYPING_QUIET_PERIOD_MS, move || {
                    conversation.try_update(|c| c.quiet_period_elapsed(ticket));
                })
            });
            typing_timer.try_update_value(|timer| *timer = next);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    };

    let do_send = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let sent =
                crate::util::conversation_actions::submit_draft(&crate::net::api::HttpMessageGateway, &conversation)
                    .await;
            if sent {
                typing_timer.try_update_value(|timer| {
                    timer.take();
                });
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let phase = move || conversation.with(ConversationState::phase);
    let is_typing = move || conversation.with(|c| c.composer().is_typing());
    let can_send = move || conversation.with(ConversationState::can_submit);
    let draft = move || conversation.with(|c| c.composer().draft().to_owned());

    view! {
        <Title text="Conversations - Cadence"/>
        <Meta name="description" content="View and manage all of your conversations on Cadence."/>

        <div class="conversations-page">
            <Header/>

            <main class="conversations-page__main">
                <h1 class="conversations-page__title">"My Conversations"</h1>

                <div class="conversations-page__messages chat-messages-container">
                    {move || {
                        let status = match phase() {
                            LoadPhase::Idle | LoadPhase::Loading => Some("Loading messages..."),
                            LoadPhase::Ready if conversation.with(|c| c.transcript().is_empty()) => {
                                Some("No messages yet")
                            }
                            LoadPhase::Ready => None,
                        };
                        status.map(|text| view! { <p class="conversations-page__status">{text}</p> })
                    }}
                    <For
                        each=move || conversation.with(|c| c.transcript().messages().to_vec())
                        key=|message| message.id
                        children=|message| view! { <MessageRow message=message/> }
                    />
                    <div class="conversations-page__end" node_ref=end_ref></div>
                </div>

                <Show when=is_typing>
                    <TypingIndicator/>
                </Show>

                <div class="composer">
                    <textarea
                        class="composer__input input"
                        rows="1"
                        maxlength=DRAFT_MAX_CHARS.to_string()
                        placeholder="Write your message..."
                        aria-label="Write your message"
                        prop:value=draft
                        on:input=on_input
                        on:keydown=on_keydown
                    ></textarea>
                    <button
                        class="btn btn--primary composer__send"
                        aria-label="Send message"
                        on:click=move |_| do_send()
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </div>
            </main>
        </div>
    }
}
