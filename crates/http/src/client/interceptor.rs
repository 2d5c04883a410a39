//! Credential interceptor
//!
//! Wraps every request/response pair of [`super::PayflowClient`]. Outgoing
//! requests carry the stored credential in [`PASSWORD_HEADER`]; a 401 answer
//! clears it and sends the user to the login route. Nothing else is touched.

use super::PASSWORD_HEADER;
use payflow_core::{AuthConfig, Navigator, Session};
use reqwest::{RequestBuilder, StatusCode};
use std::sync::Arc;
use tracing::{debug, warn};

/// Request/response hooks around the HTTP client
#[derive(Clone)]
pub struct CredentialInterceptor {
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl CredentialInterceptor {
    pub fn new(session: Session, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// The session this interceptor reads from
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Attach the stored credential, if any, to an outgoing request.
    ///
    /// The value is sent raw. A value that is not a legal header value makes
    /// the request fail at send time with the HTTP client's own builder error.
    pub fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.credential() {
            Some(credential) => {
                debug!("Attaching {PASSWORD_HEADER} header");
                request.header(PASSWORD_HEADER, credential.as_str())
            }
            None => request,
        }
    }

    /// Inspect a completed response. Only 401 has an effect.
    pub fn on_response(&self, status: StatusCode) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }

        warn!("Credential rejected by server, returning to login");
        self.session.invalidate();
        self.navigator.navigate(AuthConfig::LOGIN_PATH);
    }
}
