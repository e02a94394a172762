//! Dropdown listing activity notifications under the header bell.

use leptos::prelude::*;

use crate::state::notifications::NotificationHub;

/// Popup anchored to the bell. `unread` is the header's subscribed count;
/// reading it makes the list refresh whenever the hub changes.
#[component]
pub fn NotificationsPopup(visible: RwSignal<bool>, unread: ReadSignal<usize>) -> impl IntoView {
    let hub = expect_context::<NotificationHub>();

    let items = {
        let hub = hub.clone();
        move || {
            let _ = unread.get();
            hub.snapshot()
        }
    };

    let mark_read = move |_: leptos::ev::MouseEvent| hub.mark_all_read();

    view! {
        <Show when=move || visible.get()>
            <div class="notifications-popup">
                <div class="notifications-popup__header">
                    <span>"Notifications"</span>
                    <button class="btn btn--link" on:click=mark_read.clone() disabled=move || unread.get() == 0>
                        "Mark all as read"
                    </button>
                    <button class="btn btn--icon" on:click=move |_| visible.set(false) title="Close">
                        "\u{2715}"
                    </button>
                </div>
                {
                    let items = items.clone();
                    move || {
                        let list = items();
                        if list.is_empty() {
                            return view! {
                                <div class="notifications-popup__empty">"No notifications"</div>
                            }
                                .into_any();
                        }
                        list.into_iter()
                            .map(|n| {
                                view! {
                                    <div
                                        class="notifications-popup__item"
                                        class:notifications-popup__item--unread=!n.read
                                    >
                                        <div class="notifications-popup__title">{n.title}</div>
                                        <div class="notifications-popup__body">{n.body}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }
            </div>
        </Show>
    }
}
