//! PayFlow HTTP client
//!
//! A typed client for the PayFlow API whose every request goes through the
//! credential interceptor in [`client::interceptor`].

pub mod client;
pub mod types;

pub use client::{error::ClientError, PayflowClient, PayflowClientBuilder, PASSWORD_HEADER};
