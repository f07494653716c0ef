//! Supplier Commands
//!
//! Bindings for suppliers of a purchase and their contacts.

use serde::Serialize;

use super::{ApiClient, ApiError, CallOptions, Transport};
use crate::models::{Contact, Supplier};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSupplier<'a> {
    pub company_name: &'a str,
    pub website_url: &'a str,
    pub reason: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewContact<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<&'a str>,
    pub is_selected_for_request: bool,
}

// ========================
// Commands
// ========================

impl<T: Transport> ApiClient<T> {
    pub async fn list_suppliers(&self, token: &str, purchase_id: i64) -> Result<Vec<Supplier>, ApiError> {
        let path = format!("/purchases/{}/suppliers", purchase_id);
        self.fetch(&path, CallOptions::get(Some(token))).await
    }

    pub async fn create_supplier(&self, token: &str, purchase_id: i64, supplier: &NewSupplier<'_>) -> Result<Supplier, ApiError> {
        let path = format!("/purchases/{}/suppliers", purchase_id);
        let options = CallOptions::post(Some(token)).json(supplier)?;
        self.fetch(&path, options).await
    }

    pub async fn list_contacts(&self, token: &str, supplier_id: i64) -> Result<Vec<Contact>, ApiError> {
        let path = format!("/suppliers/{}/contacts", supplier_id);
        self.fetch(&path, CallOptions::get(Some(token))).await
    }

    pub async fn create_contact(
        &self,
        token: &str,
        purchase_id: i64,
        supplier_id: i64,
        contact: &NewContact<'_>,
    ) -> Result<Contact, ApiError> {
        let path = format!("/purchases/{}/suppliers/{}/contacts", purchase_id, supplier_id);
        let options = CallOptions::post(Some(token)).json(contact)?;
        self.fetch(&path, options).await
    }
}
