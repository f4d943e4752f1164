//! Networking modules for the clinic REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and owns the attached bearer token; `types`
//! defines the wire schema shared by the session store and the screens.

pub mod api;
pub mod types;
