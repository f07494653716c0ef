//! HTTP Transport
//!
//! Seam between the API client and the browser `fetch`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::ApiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// Fully built outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

#[cfg(test)]
impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request; only network-level failures are errors here
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser transport backed by `window.fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());

        let headers = Headers::new().map_err(js_error)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(js_error)?;
        }
        opts.set_headers(&headers);

        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.url, &opts).map_err(js_error)?;
        let window = web_sys::window().ok_or_else(|| ApiError::request("no window"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error)?;
        let response: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::request("response is not a Response"))?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

fn js_error(value: JsValue) -> ApiError {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => ApiError::request(String::from(err.message())),
        None => ApiError::request(format!("{:?}", value)),
    }
}
