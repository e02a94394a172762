//! Stack of transient toasts rendered in a corner of the viewport.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders every queued toast; clicking one dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toaster__toast" on:click=move |_| {
                            toasts.update(|t| {
                                t.dismiss(id);
                            });
                        }>
                            {toast.title}
                        </div>
                    }
                }
            />
        </div>
    }
}
