//! PayFlow HTTP client

pub mod api;
pub mod error;
pub mod interceptor;

use error::ClientError;
use interceptor::CredentialInterceptor;
use payflow_core::{Navigator, Session};
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the raw stored credential
pub const PASSWORD_HEADER: &str = "x-app-password";

/// PayFlow API client
#[derive(Clone)]
pub struct PayflowClient {
    client: Client,
    base_url: String,
    interceptor: CredentialInterceptor,
}

impl PayflowClient {
    /// Create a new client builder
    pub fn builder() -> PayflowClientBuilder {
        PayflowClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session whose credential is attached to requests
    pub fn session(&self) -> &Session {
        self.interceptor.session()
    }

    /// Create a request builder for `path`.
    ///
    /// The credential is attached by [`Self::execute`], so the request must be
    /// sent through it rather than with `RequestBuilder::send`.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Send a request through the interceptor and decode a JSON answer.
    ///
    /// Every outcome is handed back as produced: a decoded body, the error
    /// mapped from the status, or the transport error.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let request = self.interceptor.on_request(request);
        let response = request.send().await?;
        let status = response.status();
        self.interceptor.on_response(status);

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for PayflowClient
#[derive(Default)]
pub struct PayflowClientBuilder {
    base_url: Option<String>,
    session: Option<Session>,
    navigator: Option<Arc<dyn Navigator>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PayflowClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the session the credential is read from and cleared in
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Set where the client sends the user when the credential is rejected
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Set the request timeout (ignored on WASM)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<PayflowClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let session = self
            .session
            .ok_or_else(|| ClientError::Configuration("session is required".into()))?;
        let navigator = self
            .navigator
            .ok_or_else(|| ClientError::Configuration("navigator is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("payflow-client/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(PayflowClient {
            client,
            base_url,
            interceptor: CredentialInterceptor::new(session, navigator),
        })
    }
}
