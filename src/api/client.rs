//! API Client
//!
//! Generic JSON call against the backend base URL. Domain bindings in the
//! sibling modules are thin wrappers over [`ApiClient::call`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::ApiError;

/// Per-call options: bearer token, method and optional JSON body
#[derive(Debug, Clone, Default)]
pub struct CallOptions<'a> {
    pub token: Option<&'a str>,
    pub method: Method,
    pub body: Option<Value>,
}

impl<'a> CallOptions<'a> {
    pub fn get(token: Option<&'a str>) -> Self {
        Self { token, method: Method::Get, body: None }
    }

    pub fn post(token: Option<&'a str>) -> Self {
        Self { token, method: Method::Post, body: None }
    }

    pub fn patch(token: Option<&'a str>) -> Self {
        Self { token, method: Method::Patch, body: None }
    }

    /// Attach a serializable JSON body
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::request(format!("Serialization error: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Backend client shared by every operation
pub struct ApiClient<T> {
    base_url: Arc<str>,
    transport: Arc<T>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: Arc::clone(&self.base_url),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: Arc::from(base_url),
            transport: Arc::new(transport),
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform one request. `Ok(None)` means `204 No Content`.
    pub async fn call(&self, path: &str, options: CallOptions<'_>) -> Result<Option<Value>, ApiError> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(token) = options.token.filter(|t| !t.is_empty()) {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body: options.body.map(|body| body.to_string()),
        };

        tracing::debug!(method = request.method.as_str(), path, "api request");
        let response = self.transport.send(request).await?;
        decode_response(response)
    }

    /// Perform one request and deserialize the JSON result
    pub async fn fetch<R: DeserializeOwned>(&self, path: &str, options: CallOptions<'_>) -> Result<R, ApiError> {
        let value = self.call(path, options).await?.unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| ApiError::request(format!("Response error: {}", e)))
    }
}

/// Map a raw response onto the call contract
pub fn decode_response(response: HttpResponse) -> Result<Option<Value>, ApiError> {
    if !(200..300).contains(&response.status) {
        return Err(ApiError::Request(error_message(response.status, &response.body)));
    }
    if response.status == 204 {
        return Ok(None);
    }
    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|e| ApiError::request(format!("Response error: {}", e)))
}

/// Message for a failed response: `detail`, then the raw body, then the status
pub fn error_message(status: u16, body: &str) -> String {
    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
            Some(detail) if is_truthy(detail) => detail.to_string(),
            _ => body.to_string(),
        },
        _ => body.to_string(),
    };

    if message.trim().is_empty() {
        status.to_string()
    } else {
        message
    }
}

/// Empty strings, `false`, zero and `null` carry no message
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct StaticTransport {
        response: HttpResponse,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl StaticTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: HttpResponse { status, body: body.to_string() },
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for StaticTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_error_uses_detail_field() {
        let err = decode_response(response(401, r#"{"detail": "Invalid credentials"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_error_falls_back_to_raw_body() {
        let err = decode_response(response(502, "Bad Gateway")).unwrap_err();
        assert_eq!(err.message(), "Bad Gateway");

        let err = decode_response(response(500, r#"{"error": "boom"}"#)).unwrap_err();
        assert_eq!(err.message(), r#"{"error": "boom"}"#);
    }

    #[test]
    fn test_error_falls_back_to_status() {
        let err = decode_response(response(503, "")).unwrap_err();
        assert_eq!(err.message(), "503");
        let err = decode_response(response(404, "  \n")).unwrap_err();
        assert_eq!(err.message(), "404");
    }

    #[test]
    fn test_structured_detail_is_rendered_as_json() {
        let msg = error_message(422, r#"{"detail": [{"msg": "field required"}]}"#);
        assert_eq!(msg, r#"[{"msg":"field required"}]"#);
    }

    #[test]
    fn test_empty_detail_falls_back_to_body() {
        assert_eq!(error_message(400, r#"{"detail": ""}"#), r#"{"detail": ""}"#);
        assert_eq!(error_message(400, r#"{"detail": false}"#), r#"{"detail": false}"#);
        assert_eq!(error_message(400, r#"{"detail": 0}"#), r#"{"detail": 0}"#);
        assert_eq!(error_message(400, r#"{"detail": null}"#), r#"{"detail": null}"#);
        assert_eq!(error_message(409, r#"{"detail": 7}"#), "7");
    }

    #[test]
    fn test_no_content_yields_nothing() {
        assert_eq!(decode_response(response(204, "")).unwrap(), None);
        assert_eq!(decode_response(response(204, r#"{"ignored": true}"#)).unwrap(), None);
    }

    #[test]
    fn test_success_parses_json() {
        let value = decode_response(response(201, r#"{"id": 1}"#)).unwrap();
        assert_eq!(value, Some(json!({"id": 1})));
    }

    #[tokio::test]
    async fn test_call_sets_headers_and_body() {
        let api = ApiClient::new("http://host/api", StaticTransport::new(200, "[]"));
        let options = CallOptions::post(Some("tok")).json(&json!({"a": 1})).unwrap();
        api.call("/purchases", options).await.unwrap();

        let seen = api.transport().seen.lock().unwrap();
        let request = &seen[0];
        assert_eq!(request.url, "http://host/api/purchases");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
        assert_eq!(request.body.as_deref(), Some(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn test_call_without_token_omits_authorization() {
        let api = ApiClient::new("http://host/api", StaticTransport::new(200, "{}"));
        api.call("/auth/login", CallOptions::get(None)).await.unwrap();
        api.call("/auth/login", CallOptions::get(Some(""))).await.unwrap();

        let seen = api.transport().seen.lock().unwrap();
        assert!(seen.iter().all(|r| r.header("Authorization").is_none()));
        assert!(seen.iter().all(|r| r.body.is_none()));
    }
}
