//! Authentication configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Persistent storage key holding the raw credential.
    ///
    /// The login flow, the request interceptor and the route guard all go
    /// through [`crate::Session`], which is the only reader of this key.
    pub const CREDENTIAL_STORAGE_KEY: &'static str = "payflow-password";

    /// Path of the login route, the redirect target on missing or rejected credentials
    pub const LOGIN_PATH: &'static str = "/login";
}
