//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`conversation`, `notifications`, etc.) so
//! individual components can depend on small focused models.

pub mod account;
pub mod conversation;
pub mod notifications;
pub mod toast;
