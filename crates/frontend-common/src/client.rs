//! Client configuration and initialization

use crate::navigation::BrowserNavigator;
use crate::storage::LocalStore;
use once_cell::sync::Lazy;
use payflow_core::Session;
pub use payflow_http::ClientError;
use payflow_http::PayflowClient;
use std::sync::{Arc, Mutex, PoisonError};
use web_sys::window;

/// The one session of this page, over `localStorage`
static SESSION: Lazy<Session> = Lazy::new(|| Session::new(Arc::new(LocalStore)));

/// Global client instance
static API_CLIENT: Lazy<Mutex<Option<PayflowClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Get the session shared by the client, the router guard and the views
pub fn session() -> Session {
    SESSION.clone()
}

/// Get the API client, creating it on first use
pub fn api_client() -> Result<PayflowClient, ClientError> {
    let mut client_lock = API_CLIENT.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = PayflowClient::builder()
        .base_url(get_base_url())
        .session(session())
        .navigator(Arc::new(BrowserNavigator))
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}
