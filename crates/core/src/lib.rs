//! PayFlow core types shared by the HTTP client and the web frontend
//!
//! Everything that decides "is this user authenticated" lives here: the
//! credential, the storage seam it is persisted through, the session that
//! owns the single access path to it, and the route guard.

pub mod config;
pub mod credential;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod session;
pub mod store;

#[cfg(any(test, feature = "tests"))]
pub mod testing;

pub use config::AuthConfig;
pub use credential::Credential;
pub use error::{CoreError, CoreResult};
pub use guard::{before_each, GuardedRoute, Navigation};
pub use navigation::Navigator;
pub use session::{AuthState, Session};
pub use store::PersistentStore;
