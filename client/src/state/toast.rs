//! Transient toast messages shown over the page.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a "not implemented yet" toast stays up.
pub const FEATURE_TOAST_MS: u32 = 3000;

/// Logout confirmation duration; navigation waits for it.
pub const LOGOUT_TOAST_MS: u32 = 1500;

pub const NOT_IMPLEMENTED_TITLE: &str = "This feature isn't implemented yet";
pub const SIGNING_OUT_TITLE: &str = "Signing out...";

/// A single toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub duration_ms: u32,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id so the caller can schedule dismissal.
    pub fn push(&mut self, title: impl Into<String>, duration_ms: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, title: title.into(), duration_ms });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}
