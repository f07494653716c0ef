//! Purchase Commands
//!
//! Bindings for purchase list, creation and editing.

use serde::Serialize;

use super::{ApiClient, ApiError, CallOptions, Transport};
use crate::models::Purchase;

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPurchase<'a> {
    pub custom_name: &'a str,
    pub terms_text: &'a str,
}

/// Partial update; absent fields stay untouched on the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PurchaseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nmck_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nmck_currency: Option<String>,
}

// ========================
// Commands
// ========================

impl<T: Transport> ApiClient<T> {
    pub async fn list_purchases(&self, token: &str) -> Result<Vec<Purchase>, ApiError> {
        self.fetch("/purchases", CallOptions::get(Some(token))).await
    }

    pub async fn create_purchase(&self, token: &str, purchase: &NewPurchase<'_>) -> Result<Purchase, ApiError> {
        let options = CallOptions::post(Some(token)).json(purchase)?;
        self.fetch("/purchases", options).await
    }

    pub async fn update_purchase(&self, token: &str, purchase_id: i64, update: &PurchaseUpdate) -> Result<Purchase, ApiError> {
        let options = CallOptions::patch(Some(token)).json(update)?;
        self.fetch(&format!("/purchases/{}", purchase_id), options).await
    }
}
