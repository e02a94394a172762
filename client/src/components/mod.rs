//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and conversation pieces while reading/writing
//! shared state from Leptos context providers.

pub mod header;
pub mod message_row;
pub mod notifications_popup;
pub mod toaster;
pub mod typing_indicator;
