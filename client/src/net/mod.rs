//! Networking modules for the conversation endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` defines the remote boundary the view depends on, `api` is its
//! HTTP implementation, and `types` defines the shared wire schema.

pub mod api;
pub mod gateway;
pub mod types;
