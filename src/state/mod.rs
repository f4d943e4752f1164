//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only process-wide state. Page-local data (patient
//! lists, form drafts) lives in signals owned by the page that renders it.

pub mod session;

use crate::net::api::ApiClient;
use crate::util::storage::LocalTokenStorage;

/// The session store as wired up in the browser.
pub type ClinicSession = session::SessionStore<LocalTokenStorage, ApiClient>;
