//! Process-wide authentication session

use crate::{AuthConfig, CoreResult, Credential, PersistentStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Authentication state derived from the stored credential
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated(Credential),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(credential) => Some(credential),
        }
    }
}

/// Single access path to the stored credential.
///
/// The state is read through to the store on every call so that a credential
/// written before a page reload is still seen afterwards. Login success and a
/// rejected credential ([`Session::invalidate`]) are the only two transitions.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn PersistentStore>,
}

impl Session {
    /// Create a session over the given store
    pub fn new(store: Arc<dyn PersistentStore>) -> Self {
        Self { store }
    }

    /// Current state. A storage failure reads as anonymous.
    pub fn state(&self) -> AuthState {
        match self.store.get(AuthConfig::CREDENTIAL_STORAGE_KEY) {
            Ok(Some(value)) => match Credential::new(value) {
                Ok(credential) => AuthState::Authenticated(credential),
                Err(_) => AuthState::Anonymous,
            },
            Ok(None) => AuthState::Anonymous,
            Err(e) => {
                warn!("Failed to read stored credential: {e}");
                AuthState::Anonymous
            }
        }
    }

    /// The stored credential, if any
    pub fn credential(&self) -> Option<Credential> {
        match self.state() {
            AuthState::Authenticated(credential) => Some(credential),
            AuthState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// Persist a credential accepted by the server
    pub fn login(&self, credential: &Credential) -> CoreResult<()> {
        self.store
            .set(AuthConfig::CREDENTIAL_STORAGE_KEY, credential.as_str())?;
        debug!("Credential stored");
        Ok(())
    }

    /// Forget the stored credential at the user's request
    pub fn logout(&self) -> CoreResult<()> {
        self.store.remove(AuthConfig::CREDENTIAL_STORAGE_KEY)?;
        debug!("Credential cleared");
        Ok(())
    }

    /// Drop a credential the server rejected.
    ///
    /// Never fails: a storage error is logged and the session is left to read
    /// whatever the store reports next.
    pub fn invalidate(&self) {
        match self.store.remove(AuthConfig::CREDENTIAL_STORAGE_KEY) {
            Ok(()) => debug!("Rejected credential cleared"),
            Err(e) => warn!("Failed to clear rejected credential: {e}"),
        }
    }
}
