//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and routing policy from page and
//! component code so both can be tested natively.

pub mod auth;
pub mod dates;
pub mod storage;
