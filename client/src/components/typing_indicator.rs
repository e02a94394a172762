//! "User is typing..." hint shown above the composer.

use leptos::prelude::*;

#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="typing-indicator" aria-live="polite">
            <svg class="typing-indicator__pulse" viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="10"></circle>
            </svg>
            "User is typing..."
        </div>
    }
}
