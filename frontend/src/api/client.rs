use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{
    header::{HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, RequestBuilder,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config};

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_hooks::{register_mock, MockResponse, TestResponder};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// A successful response. `payload` is `None` for empty or non-JSON bodies.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub payload: Option<Value>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        let status = response.status;
        serde_json::from_value(response.payload.unwrap_or(Value::Null))
            .map_err(|e| ApiError::decode(status, format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn request_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await.map(|_| ())
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let mut request = builder
            .build()
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        let headers = request.headers_mut();
        headers
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));
        headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static("application/json"));

        let method = request.method().clone();
        let url = request.url().to_string();
        log::debug!("{} {}", method, url);

        let (status, body) = self.dispatch(request).await?;
        let payload = parse_payload(&body);
        if (200..300).contains(&status) {
            Ok(ApiResponse { status, payload })
        } else {
            log::debug!("{} {} -> {}", method, url, status);
            Err(ApiError::http(status, payload))
        }
    }

    async fn dispatch(&self, request: reqwest::Request) -> Result<(u16, String), ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            if let Some(responder) = test_hooks::lookup(request.url().as_str()) {
                let response = responder.respond(&request)?;
                return Ok((response.status, response.body));
            }
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }
}

/// Empty and non-JSON bodies are treated as "no payload".
pub fn parse_payload(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str(body).ok()
}

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_hooks {
    use crate::api::types::ApiError;
    use std::sync::{Arc, Mutex, OnceLock};

    #[derive(Debug, Clone)]
    pub struct MockResponse {
        pub status: u16,
        pub body: String,
    }

    impl MockResponse {
        pub fn json(status: u16, body: serde_json::Value) -> Self {
            Self {
                status,
                body: body.to_string(),
            }
        }

        pub fn text(status: u16, body: impl Into<String>) -> Self {
            Self {
                status,
                body: body.into(),
            }
        }
    }

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        if let Ok(mut entries) = registry().lock() {
            entries.retain(|(base, _)| base != &base_url);
            entries.push((base_url, responder));
        }
    }

    pub(super) fn lookup(url: &str) -> Option<Arc<dyn TestResponder>> {
        let entries = registry().lock().ok()?;
        entries
            .iter()
            .rev()
            .find(|(base, _)| {
                url.strip_prefix(base.as_str())
                    .map(|rest| rest.is_empty() || rest.starts_with(['/', '?']))
                    .unwrap_or(false)
            })
            .map(|(_, responder)| responder.clone())
    }
}
