//! Toast helpers that pair a push with its timed dismissal.

use leptos::prelude::{RwSignal, Update};

use crate::state::toast::ToastState;

/// Show a toast and remove it after its duration.
pub fn show_toast(toasts: RwSignal<ToastState>, title: &str, duration_ms: u32) -> Option<u64> {
    let id = toasts.try_update(|t| t.push(title, duration_ms))?;

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(duration_ms, move || {
            toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }

    Some(id)
}
