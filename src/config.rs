//! Client Configuration
//!
//! Resolves the backend base URL once at startup.

/// Used when neither the build nor the page provides a base URL
pub const FALLBACK_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
}

impl AppConfig {
    /// Read `ZAKUPAI_API_URL` baked in at build time, else `<origin>/api`
    pub fn from_env() -> Self {
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());
        Self {
            api_url: resolve_api_url(option_env!("ZAKUPAI_API_URL"), origin.as_deref()),
        }
    }
}

pub fn resolve_api_url(configured: Option<&str>, origin: Option<&str>) -> String {
    let url = match (configured.map(str::trim), origin.map(str::trim)) {
        (Some(url), _) if !url.is_empty() => url.to_string(),
        (_, Some(origin)) if !origin.is_empty() && origin != "null" => format!("{}/api", origin.trim_end_matches('/')),
        _ => FALLBACK_API_URL.to_string(),
    };
    url.trim_end_matches('/').to_string()
}
