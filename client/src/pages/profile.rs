//! Profile page showing the signed-in account.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::header::Header;
use crate::state::account::AccountState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let account = expect_context::<RwSignal<AccountState>>();

    view! {
        <Title text="Profile - Cadence"/>
        <div class="profile-page">
            <Header/>
            <main class="profile-page__main">
                <div class="profile-page__avatar">{move || account.with(AccountState::initials)}</div>
                <h1 class="profile-page__name">{move || account.with(|a| a.name.clone())}</h1>
                <p class="profile-page__status">{move || account.with(AccountState::status_label)}</p>
                <a href="/conversations" class="btn btn--primary">"Back to conversations"</a>
            </main>
        </div>
    }
}
