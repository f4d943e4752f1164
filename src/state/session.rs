//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created by the root `App` and provided through
//! context. It is the only writer of the persisted credential token and of
//! the session snapshot; screens and route guards only read the snapshot.
//!
//! DESIGN
//! ======
//! Readiness is a single tagged union (`Pending`, `Authenticated`,
//! `Unauthenticated`), so "still checking" can never be mistaken for "signed
//! out". Token storage and identity verification sit behind the
//! `TokenStorage` / `IdentityApi` traits so each test builds its own store.
//!
//! CONCURRENCY
//! ===========
//! Verification is the only await point. Every `initialize`, `login`, and
//! `logout` advances an epoch under the store lock, and a verification result
//! is applied only if its epoch is still current and the store has not been
//! detached from its view. A `logout` issued while a `login` is in flight
//! therefore always wins, and of two overlapping logins the later one wins.
//!
//! ERROR HANDLING
//! ==============
//! Verification failures of any kind (rejected token, transport error,
//! malformed body) purge the token and resolve to `Unauthenticated`. Nothing
//! here returns an error to the caller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::api::ApiError;
use crate::net::types::Identity;

/// Persisted home of the credential token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Identity verification against the auth service.
pub trait IdentityApi {
    /// Attach (`Some`) or remove (`None`) the bearer token on outgoing requests.
    fn authorize(&self, token: Option<&str>);

    /// Resolve the attached token into an identity.
    fn fetch_identity(&self) -> impl Future<Output = Result<Identity, ApiError>>;
}

/// Whether the session has reached a definitive answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    Resolved,
}

/// Point-in-time view of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionSnapshot {
    /// Verification has not settled; no access decision may be made yet.
    #[default]
    Pending,
    Authenticated(Identity),
    Unauthenticated,
}

impl SessionSnapshot {
    pub fn readiness(&self) -> Readiness {
        match self {
            Self::Pending => Readiness::Pending,
            Self::Authenticated(_) | Self::Unauthenticated => Readiness::Resolved,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Pending | Self::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

type Observer = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

struct Shared {
    snapshot: SessionSnapshot,
    epoch: u64,
    attached: bool,
    observers: Vec<Observer>,
    /// Snapshots not yet delivered to observers.
    outbox: VecDeque<SessionSnapshot>,
    /// An `update` is currently draining `outbox`.
    delivering: bool,
}

impl Shared {
    /// Start a verification attempt and return its epoch.
    fn begin_attempt(&mut self) -> u64 {
        self.epoch += 1;
        self.snapshot = SessionSnapshot::Pending;
        self.epoch
    }
}

struct Inner<S, A> {
    storage: S,
    api: A,
    shared: Mutex<Shared>,
}

/// Owner of the session snapshot and the persisted credential.
///
/// Cheap to clone; clones share the same state.
pub struct SessionStore<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Clone for SessionStore<S, A> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S: TokenStorage, A: IdentityApi> SessionStore<S, A> {
    /// Create a store in the `Pending` state. Call [`Self::initialize`] next.
    pub fn new(storage: S, api: A) -> Self {
        let shared = Shared {
            snapshot: SessionSnapshot::Pending,
            epoch: 0,
            attached: true,
            observers: Vec::new(),
            outbox: VecDeque::new(),
            delivering: false,
        };
        Self { inner: Arc::new(Inner { storage, api, shared: Mutex::new(shared) }) }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot.clone()
    }

    /// Register an observer called with every new snapshot.
    ///
    /// Observers run after the store lock is released, so they may read the
    /// store or call `logout` themselves. Snapshots are delivered to every
    /// observer in the order they were produced; a transition triggered from
    /// inside an observer is queued until the current round finishes.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        self.lock().observers.push(Arc::new(observer));
    }

    /// Resolve a persisted token (if any) into the initial session.
    pub async fn initialize(&self) {
        let Some(token) = self.inner.storage.load() else {
            self.update(|shared| {
                shared.epoch += 1;
                shared.snapshot = SessionSnapshot::Unauthenticated;
            });
            log::debug!("session: no persisted credential");
            return;
        };

        self.inner.api.authorize(Some(&token));
        let epoch = self.update(Shared::begin_attempt);
        log::debug!("session: verifying persisted credential");
        let outcome = self.inner.api.fetch_identity().await;
        self.settle(epoch, outcome);
    }

    /// Persist `token` and verify it.
    ///
    /// Completes only once the session is resolved. Returns the verified
    /// identity, or `None` when verification failed (the session is then
    /// signed out) or was overtaken by a later `login`/`logout`.
    pub async fn login(&self, token: &str) -> Option<Identity> {
        let epoch = self.update(|shared| {
            self.inner.storage.store(token);
            self.inner.api.authorize(Some(token));
            shared.begin_attempt()
        });
        log::debug!("session: verifying new credential");
        let outcome = self.inner.api.fetch_identity().await;
        self.settle(epoch, outcome)
    }

    /// Drop the credential and sign out. Idempotent.
    pub fn logout(&self) {
        self.update(|shared| {
            shared.epoch += 1;
            self.clear_credential();
            shared.snapshot = SessionSnapshot::Unauthenticated;
        });
        log::debug!("session: signed out");
    }

    /// Mark the owning view as torn down.
    ///
    /// Verification results that arrive afterwards are discarded.
    pub fn detach(&self) {
        self.lock().attached = false;
    }

    fn settle(&self, epoch: u64, outcome: Result<Identity, ApiError>) -> Option<Identity> {
        self.update(|shared| {
            if !shared.attached || shared.epoch != epoch {
                log::debug!("session: discarding stale verification result");
                return None;
            }
            match outcome {
                Ok(identity) => {
                    log::debug!("session: authenticated as {}", identity.role);
                    shared.snapshot = SessionSnapshot::Authenticated(identity.clone());
                    Some(identity)
                }
                Err(err) => {
                    log::warn!("session: credential verification failed: {err}");
                    self.clear_credential();
                    shared.snapshot = SessionSnapshot::Unauthenticated;
                    None
                }
            }
        })
    }

    fn clear_credential(&self) {
        self.inner.storage.clear();
        self.inner.api.authorize(None);
    }

    /// Apply `f` under the lock, then notify observers if the snapshot changed.
    ///
    /// Nested calls from inside an observer only enqueue; the outermost call
    /// drains the queue, so observers never see an older snapshot last.
    fn update<R>(&self, f: impl FnOnce(&mut Shared) -> R) -> R {
        let (result, drain) = {
            let mut shared = self.lock();
            let before = shared.snapshot.clone();
            let result = f(&mut shared);
            if shared.snapshot != before {
                let snapshot = shared.snapshot.clone();
                shared.outbox.push_back(snapshot);
            }
            let drain = !shared.delivering && !shared.outbox.is_empty();
            if drain {
                shared.delivering = true;
            }
            (result, drain)
        };
        if drain {
            self.deliver();
        }
        result
    }

    fn deliver(&self) {
        loop {
            let (snapshot, observers) = {
                let mut shared = self.lock();
                let Some(snapshot) = shared.outbox.pop_front() else {
                    shared.delivering = false;
                    return;
                };
                (snapshot, shared.observers.clone())
            };
            for observer in &observers {
                observer(&snapshot);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.inner.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
