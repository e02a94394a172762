//! One transcript entry: avatar plus speech bubble, aligned by sender.

#[cfg(test)]
#[path = "message_row_test.rs"]
mod message_row_test;

use leptos::prelude::*;

use crate::net::types::{Message, Sender};

/// Served from the site's `public/` assets directory.
const AGENT_AVATAR: &str = "/avatars/agent-avatar.svg";
const USER_AVATAR: &str = "/avatars/user-avatar.svg";

/// Agent messages sit on the left with the agent avatar; user messages on
/// the right with the user avatar. Body text is rendered verbatim.
#[component]
pub fn MessageRow(message: Message) -> impl IntoView {
    let from = message.from;
    let row_class = format!("message-row message-row--{}", from.as_str());

    view! {
        <div class=row_class>
            <Show when=move || from == Sender::Agent>
                <img class="message-row__avatar avatar" src=AGENT_AVATAR alt="Agent" loading="lazy"/>
            </Show>
            <div class="message-row__bubble" class:message-row__bubble--own=move || from == Sender::User>
                {message.text}
            </div>
            <Show when=move || from == Sender::User>
                <img class="message-row__avatar avatar" src=USER_AVATAR alt="User" loading="lazy"/>
            </Show>
        </div>
    }
}
