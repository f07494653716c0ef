//! Email Commands
//!
//! Draft generation and the stored email log of a purchase.

use serde::Serialize;

use super::{ApiClient, ApiError, CallOptions, Transport};
use crate::models::{EmailDraft, EmailMessage};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmailMessage<'a> {
    pub subject: &'a str,
    pub body: &'a str,
    pub direction: &'a str,
}

impl<T: Transport> ApiClient<T> {
    /// Ask the backend to compose a request-for-quote email (no body)
    pub async fn generate_email_draft(&self, token: &str, purchase_id: i64) -> Result<EmailDraft, ApiError> {
        let path = format!("/purchases/{}/email-draft", purchase_id);
        self.fetch(&path, CallOptions::post(Some(token))).await
    }

    pub async fn list_emails(&self, token: &str, purchase_id: i64) -> Result<Vec<EmailMessage>, ApiError> {
        let path = format!("/purchases/{}/emails", purchase_id);
        self.fetch(&path, CallOptions::get(Some(token))).await
    }

    pub async fn create_email(&self, token: &str, purchase_id: i64, message: &NewEmailMessage<'_>) -> Result<EmailMessage, ApiError> {
        let path = format!("/purchases/{}/emails", purchase_id);
        let options = CallOptions::post(Some(token)).json(message)?;
        self.fetch(&path, options).await
    }
}
