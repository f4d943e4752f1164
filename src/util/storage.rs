//! Browser `localStorage` persistence for the credential token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the session store touches this. Reads and writes are best-effort:
//! a missing or blocked storage area behaves like an empty one, and native
//! builds no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::session::TokenStorage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalTokenStorage {
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }
}

/// Log a failed storage call and report whether it succeeded.
///
/// A failed remove leaves the token in place, so the next load signs the
/// user back in.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn best_effort<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("localStorage {action} failed: {err:?}");
            false
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).ok().flatten().filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; credential will not survive reload");
                return;
            };
            best_effort("write", storage.set_item(&self.key, token));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                best_effort("remove", storage.remove_item(&self.key));
            }
        }
    }
}
