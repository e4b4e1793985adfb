//! Networking modules for the backend REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the auth REST calls; `types` defines the wire schema the
//! backend owns.

pub mod api;
pub mod types;
