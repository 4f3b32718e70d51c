//! HTTP transport seam between the gateway and the network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::Client;
pub use reqwest::Method;
use thiserror::Error;

/// A fully prepared request: absolute URL, final headers, serialized body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as seen by the gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".into()),
            body: body.to_string(),
        }
    }

    #[must_use]
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8".into()),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.contains("application/json"))
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportError {
    /// The server could not be reached (refused, DNS, unreachable).
    #[error("connect failed: {0}")]
    Connect(String),
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request. Implementations must not retry.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when no HTTP response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Production transport over `reqwest`.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self.client.request(request.method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(map_reqwest_error)?;

        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

type Scripted = Result<ApiResponse, TransportError>;

#[derive(Default)]
struct ScriptState {
    routes: HashMap<(Method, String), Scripted>,
    fallback: Option<Scripted>,
    sent: Vec<ApiRequest>,
}

/// In-memory transport for testing and prototyping.
///
/// Responses are matched by method and URL suffix (the endpoint), so the same
/// script works against any base URL. Every request is recorded.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method endpoint` with `response` (replacing an earlier script).
    #[must_use]
    pub fn respond(self, method: Method, endpoint: &str, response: ApiResponse) -> Self {
        self.script(method, endpoint, Ok(response));
        self
    }

    /// Answer `GET endpoint` with a 200 JSON body.
    #[must_use]
    pub fn get_json(self, endpoint: &str, body: serde_json::Value) -> Self {
        self.respond(Method::GET, endpoint, ApiResponse::json(200, &body))
    }

    /// Answer `POST endpoint` with a 200 JSON body.
    #[must_use]
    pub fn post_json(self, endpoint: &str, body: serde_json::Value) -> Self {
        self.respond(Method::POST, endpoint, ApiResponse::json(200, &body))
    }

    /// Fail `method endpoint` at the transport level.
    #[must_use]
    pub fn fail(self, method: Method, endpoint: &str, error: TransportError) -> Self {
        self.script(method, endpoint, Err(error));
        self
    }

    /// Fail every unscripted request, e.g. to simulate an unreachable server.
    #[must_use]
    pub fn fail_unscripted(self, error: TransportError) -> Self {
        self.lock().fallback = Some(Err(error));
        self
    }

    /// Change a script after the transport has been handed out.
    pub fn script(&self, method: Method, endpoint: &str, outcome: Result<ApiResponse, TransportError>) {
        self.lock().routes.insert((method, endpoint.to_string()), outcome);
    }

    /// Requests sent so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().sent.clone()
    }

    /// Requests whose URL ends with `endpoint`.
    #[must_use]
    pub fn requests_to(&self, endpoint: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.url.ends_with(endpoint))
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut state = self.lock();
        let outcome = state
            .routes
            .iter()
            .filter(|((method, endpoint), _)| {
                *method == request.method && request.url.ends_with(endpoint.as_str())
            })
            .max_by_key(|((_, endpoint), _)| endpoint.len())
            .map(|(_, outcome)| outcome.clone())
            .or_else(|| state.fallback.clone())
            .unwrap_or_else(|| {
                Ok(ApiResponse::json(
                    404,
                    &serde_json::json!({ "detail": "Not Found" }),
                ))
            });
        state.sent.push(request);
        outcome
    }
}
