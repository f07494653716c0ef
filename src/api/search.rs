//! Supplier Search Commands
//!
//! Starts (or reads back) the backend supplier-search task of a purchase.

use serde::Serialize;

use super::{ApiClient, ApiError, CallOptions, Transport};
use crate::models::SearchTaskState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest<'a> {
    pub terms_text: &'a str,
    pub hints: Vec<String>,
}

impl<T: Transport> ApiClient<T> {
    pub async fn search_suppliers(
        &self,
        token: &str,
        purchase_id: i64,
        request: &SearchRequest<'_>,
    ) -> Result<SearchTaskState, ApiError> {
        let path = format!("/purchases/{}/suppliers/search", purchase_id);
        let options = CallOptions::post(Some(token)).json(request)?;
        self.fetch(&path, options).await
    }
}
