//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{auth::AuthPage, conversations::ConversationsPage, profile::ProfilePage};
use crate::state::{account::AccountState, notifications::NotificationHub, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let account = RwSignal::new(AccountState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(account);
    provide_context(toasts);
    provide_context(NotificationHub::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/cadence.css"/>
        <Title text="Cadence"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ConversationsPage/>
                <Route path=StaticSegment("conversations") view=ConversationsPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
