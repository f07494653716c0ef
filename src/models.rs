//! Frontend Models
//!
//! Data structures matching backend entities. Optional fields default so
//! that partially filled records from the API still render.

use serde::{Deserialize, Serialize};

/// Authenticated session (bearer token + the email it was issued for)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
}

/// Login response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Purchase data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    #[serde(default)]
    pub auto_number: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub terms_text: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub nmck_value: Option<f64>,
    #[serde(default)]
    pub nmck_currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Purchase {
    /// Terms text, empty when the backend has none
    pub fn terms(&self) -> &str {
        self.terms_text.as_deref().unwrap_or_default()
    }

    /// Heading shown for the purchase
    pub fn title(&self) -> &str {
        if !self.full_name.is_empty() {
            &self.full_name
        } else {
            self.custom_name.as_deref().unwrap_or_default()
        }
    }
}

/// Supplier candidate of a purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Supplier {
    /// Company name, falling back to the website, then a placeholder
    pub fn display_name(&self) -> &str {
        non_blank(self.company_name.as_deref())
            .or_else(|| non_blank(self.website_url.as_deref()))
            .unwrap_or("Без названия")
    }

    pub fn reason_label(&self) -> &str {
        non_blank(self.reason.as_deref()).unwrap_or("Комментарий не указан")
    }
}

/// Supplier contact (email address)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub is_selected_for_request: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Contact {
    /// Where the contact came from
    pub fn source_label(&self) -> &'static str {
        if non_blank(self.source_url.as_deref()).is_some() {
            "Веб-поиск"
        } else {
            "Добавлено вручную"
        }
    }
}

/// Latest snapshot of the server-side supplier search task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTaskState {
    pub task_id: i64,
    pub status: String,
    #[serde(default)]
    pub tech_task_excerpt: Option<String>,
    #[serde(default)]
    pub queries: Option<Vec<String>>,
    #[serde(default)]
    pub note: Option<String>,
}

impl SearchTaskState {
    pub fn queries(&self) -> &[String] {
        self.queries.as_deref().unwrap_or_default()
    }
}

/// Generated request-for-quote email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

/// Stored email message of a purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub id: i64,
    #[serde(default)]
    pub supplier_contact_id: Option<i64>,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub price_value: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    pub direction: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
