//! Auth Commands
//!
//! Register and log in against the backend.

use serde::Serialize;

use super::{ApiClient, ApiError, CallOptions, Transport};
use crate::models::TokenResponse;

#[derive(Serialize)]
struct CredentialsArgs<'a> {
    email: &'a str,
    password: &'a str,
}

impl<T: Transport> ApiClient<T> {
    /// Exchange credentials for a bearer token
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let options = CallOptions::post(None).json(&CredentialsArgs { email, password })?;
        let response: TokenResponse = self.fetch("/auth/login", options).await?;
        Ok(response.token)
    }

    /// Create an account; the created user record is not needed
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let options = CallOptions::post(None).json(&CredentialsArgs { email, password })?;
        self.call("/auth/register", options).await?;
        Ok(())
    }
}
