//! Sign-in landing page reached after logging out.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <Title text="Sign in - Cadence"/>
        <div class="auth-page">
            <h1>"Cadence"</h1>
            <p>"You have been signed out."</p>
            <a href="/conversations" class="btn btn--primary">
                "Sign in again"
            </a>
        </div>
    }
}
