//! Fixed top header: search, notifications bell, help, and the user menu.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notifications_popup::NotificationsPopup;
use crate::state::account::AccountState;
use crate::state::notifications::NotificationHub;
use crate::state::toast::{FEATURE_TOAST_MS, LOGOUT_TOAST_MS, NOT_IMPLEMENTED_TITLE, SIGNING_OUT_TITLE, ToastState};
use crate::util::toast::show_toast;

/// Dashboard header shown above every signed-in page.
///
/// Subscribes to the notification hub for the unread badge while mounted.
#[component]
pub fn Header() -> impl IntoView {
    let account = expect_context::<RwSignal<AccountState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let hub = expect_context::<NotificationHub>();
    let navigate = use_navigate();

    let (unread, set_unread) = signal(0_usize);
    let subscription = hub.subscribe(move |count| {
        let _ = set_unread.try_set(count);
    });
    on_cleanup(move || {
        hub.unsubscribe(subscription);
    });

    let show_notifications = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    let not_implemented = move || {
        show_toast(toasts, NOT_IMPLEMENTED_TITLE, FEATURE_TOAST_MS);
    };

    let on_profile = {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| {
            menu_open.set(false);
            navigate("/profile", leptos_router::NavigateOptions::default());
        }
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        show_toast(toasts, SIGNING_OUT_TITLE, LOGOUT_TOAST_MS);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            gloo_timers::callback::Timeout::new(LOGOUT_TOAST_MS, move || {
                navigate("/auth", leptos_router::NavigateOptions::default());
            })
            .forget();
        }
    };

    let user_name = move || account.with(|a| a.name.clone());
    let initials = move || account.with(AccountState::initials);
    let status_label = move || account.with(AccountState::status_label);
    let online = move || account.with(|a| a.online);
    let avatar_url = move || account.with(|a| a.avatar_url.clone());

    view! {
        <header class="header">
            <div class="header__search">
                <svg class="header__search-icon" viewBox="0 0 24 24" aria-hidden="true">
                    <circle cx="11" cy="11" r="7"></circle>
                    <line x1="16.5" y1="16.5" x2="21" y2="21"></line>
                </svg>
                <input
                    class="header__search-input input"
                    type="text"
                    placeholder="Search..."
                    readonly=true
                    on:click=move |_| not_implemented()
                />
            </div>

            <div class="header__actions">
                <div class="header__bell-wrap">
                    <button
                        class="header__icon-button header__bell"
                        title="Notifications"
                        on:click=move |_| show_notifications.update(|v| *v = !*v)
                    >
                        <svg viewBox="0 0 24 24" aria-hidden="true">
                            <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"></path>
                            <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"></path>
                        </svg>
                        <Show when=move || { unread.get() > 0 }>
                            <span class="header__badge">
                                <span class="header__badge-ping"></span>
                                <span class="header__badge-dot"></span>
                            </span>
                        </Show>
                    </button>
                    <NotificationsPopup visible=show_notifications unread=unread/>
                </div>

                <button class="header__icon-button" title="Help" on:click=move |_| not_implemented()>
                    "?"
                </button>

                <div class="header__menu">
                    <button class="header__user" on:click=move |_| menu_open.update(|v| *v = !*v)>
                        <span class="header__avatar">
                            {move || match avatar_url() {
                                Some(src) => view! { <img src=src alt=user_name()/> }.into_any(),
                                None => view! { <span class="header__avatar-fallback">{initials()}</span> }.into_any(),
                            }}
                        </span>
                        <span class="header__user-text">
                            <span class="header__user-name">{user_name}</span>
                            <span class="header__user-status">
                                <span class="header__status-dot" class:header__status-dot--online=online></span>
                                {status_label}
                            </span>
                        </span>
                        <span class="header__chevron">"\u{25BE}"</span>
                    </button>

                    <Show when=move || menu_open.get()>
                        <div class="header__dropdown" on:click=move |ev| ev.stop_propagation()>
                            <div class="header__dropdown-label">"My Account"</div>
                            <hr class="header__dropdown-separator"/>
                            <button class="header__dropdown-item" on:click=on_profile.clone()>
                                "Profile"
                            </button>
                            <button class="header__dropdown-item" on:click=move |_| {
                                menu_open.set(false);
                                not_implemented();
                            }>
                                "Settings"
                            </button>
                            <button class="header__dropdown-item" on:click=move |_| {
                                menu_open.set(false);
                                not_implemented();
                            }>
                                "Preferences"
                            </button>
                            <hr class="header__dropdown-separator"/>
                            <button class="header__dropdown-item" on:click=on_logout.clone()>
                                "Log out"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
