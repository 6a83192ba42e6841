//! HTTP client for commerce API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde_json::{Value, json};

/// HTTP client for making requests to the commerce service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the default bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the default token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build the authorization header value. A per-call token wins over the
    /// configured default. The commerce service expects the uppercase
    /// BEARER scheme.
    fn auth_header(&self, token: Option<&str>) -> Option<String> {
        token
            .or(self.token.as_deref())
            .map(|t| format!("BEARER {}", t))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str, token: Option<&str>) -> ClientResult<Value> {
        self.dispatch(self.client.get(self.url(path)), token).await
    }

    /// Make a POST request with JSON body
    pub async fn post<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ClientResult<Value> {
        self.dispatch(self.client.post(self.url(path)).json(body), token)
            .await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ClientResult<Value> {
        self.dispatch(self.client.patch(self.url(path)).json(body), token)
            .await
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> ClientResult<Value> {
        let mut request = request.header(reqwest::header::ACCEPT, "application/json");

        if let Some(auth) = self.auth_header(token) {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let request = request.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Commerce API request");

        let response = self.client.execute(request).await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();
        let text = response.text().await?;
        let body = interpret_body(&text);

        if status.as_u16() >= 400 {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        Ok(body)
    }
}

/// Parse a response body, wrapping non-JSON text as `{"message": <raw>}` so
/// every caller sees JSON.
fn interpret_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "message": text }))
}

fn rejection_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| "API error".to_string())
}
