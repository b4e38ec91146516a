//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, minting bearer tokens,
//! and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use spot_api::{create_app, create_app_state, serve};
use spot_common::{AppConfig, Claims};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Shared secret the test server verifies tokens against
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Audience the test server expects
pub const TEST_AUDIENCE: &str = "authenticated";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on a fresh in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(builder: RequestBuilder, token: Option<&str>) -> Result<Response> {
        let builder = match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        Ok(builder.send().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)), None).await
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)), Some(token)).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).json(body), None).await
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).json(body), Some(token)).await
    }

    /// Make a POST request with auth token and no body
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.post(self.url(path)), Some(token)).await
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Self::send(self.client.put(self.url(path)).json(body), Some(token)).await
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.delete(self.url(path)), Some(token)).await
    }
}

/// Configuration for the in-memory backend with generous rate limits
pub fn test_config() -> Result<AppConfig> {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("API_PORT", "0"),
        ("STORAGE_BACKEND", "memory"),
        ("AUTH_JWT_SECRET", TEST_JWT_SECRET),
        ("AUTH_JWT_AUDIENCE", TEST_AUDIENCE),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000"),
        ("RATE_LIMIT_BURST", "10000"),
    ]);

    AppConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()))
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// A signed-in test user
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

impl TestUser {
    /// Mint a valid token for a fresh user id
    pub fn new() -> Result<Self> {
        let id = Uuid::new_v4();
        let token = sign_token(&id.to_string(), TEST_AUDIENCE, 3600, TEST_JWT_SECRET)?;
        Ok(Self { id, token })
    }
}

/// Sign an HS256 token the way the identity provider does
pub fn sign_token(sub: &str, audience: &str, ttl_secs: i64, secret: &str) -> Result<String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        iat: now,
        exp: now + ttl_secs,
        aud: audience.to_string(),
        email: Some(format!("{sub}@example.com")),
        role: Some("authenticated".to_string()),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Assert response status and parse the `data` member of the envelope
pub async fn assert_data<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let body = assert_envelope(response, expected_status, true).await?;
    let data = body
        .get("data")
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Envelope has no data: {body}"))?;
    Ok(serde_json::from_value(data)?)
}

/// Assert an error envelope and return its message
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body = assert_envelope(response, expected_status, false).await?;
    body.get("error")
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("Envelope has no error: {body}"))
}

/// Assert a success envelope carrying a message
pub async fn assert_message(response: Response, expected_status: StatusCode) -> Result<String> {
    let body = assert_envelope(response, expected_status, true).await?;
    body.get("message")
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("Envelope has no message: {body}"))
}

/// Assert status and the envelope's `success` flag
pub async fn assert_envelope(
    response: Response,
    expected_status: StatusCode,
    success: bool,
) -> Result<Value> {
    let status = response.status();
    let text = response.text().await?;
    if status != expected_status {
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {text}");
    }

    let body: Value = serde_json::from_str(&text)?;
    if body.get("success").and_then(Value::as_bool) != Some(success) {
        anyhow::bail!("Expected success={success}. Body: {text}");
    }
    Ok(body)
}
