pub mod auth;
pub mod client;
pub mod components;
pub mod navigation;
pub mod storage;

pub use auth::{use_auth, use_is_authenticated, AuthAction, AuthContext, AuthProvider};
pub use client::{api_client, session};
pub use components::{ErrorBanner, Spinner};
pub use navigation::BrowserNavigator;
pub use storage::LocalStore;
