use std::sync::Arc;

use learnpath_core::model::ApiConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ApiError, NETWORK_ERROR, REQUEST_FAILED, UNKNOWN_ERROR};
use crate::router::PageRouter;
use crate::session::Session;
use crate::transport::{ApiRequest, HttpTransport, Method, TransportError};

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";

/// Per-call options: method, JSON body and extra headers.
#[derive(Clone, Debug)]
pub struct CallOptions {
    method: Method,
    body: Option<Value>,
    headers: Vec<(String, String)>,
}

impl CallOptions {
    #[must_use]
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}

impl Default for CallOptions {
    fn default() -> Self {
        Self::get()
    }
}

/// Single entry point to the learning API.
///
/// Attaches the session token, sends exactly one request, and turns every
/// outcome into either the JSON body or an `ApiError`. A 401 ends the session
/// and sends the router back to the login page.
#[derive(Clone)]
pub struct ApiGateway {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
    session: Session,
    router: PageRouter,
}

impl ApiGateway {
    #[must_use]
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn HttpTransport>,
        session: Session,
        router: PageRouter,
    ) -> Self {
        Self {
            config,
            transport,
            session,
            router,
        }
    }

    /// Call `endpoint` (relative to the base URL).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures, 401s, non-JSON bodies and
    /// non-success statuses.
    pub async fn call(&self, endpoint: &str, options: CallOptions) -> Result<Value, ApiError> {
        let request = self.prepare(endpoint, options);
        debug!(method = %request.method, url = %request.url, "api request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(TransportError::Connect(detail)) => {
                warn!(endpoint, %detail, "api unreachable");
                return Err(ApiError::CannotConnect {
                    origin: self.config.origin(),
                });
            }
            Err(TransportError::Other(detail)) => {
                warn!(endpoint, %detail, "api transport error");
                let message = if detail.is_empty() {
                    NETWORK_ERROR.to_string()
                } else {
                    detail
                };
                return Err(ApiError::Network(message));
            }
        };

        if response.status == 401 {
            warn!(endpoint, "api rejected session token");
            self.session.end().await;
            self.router.force_login();
            return Err(ApiError::Unauthorized);
        }

        if !response.is_json() {
            let text = if response.body.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                response.body
            };
            return Err(ApiError::NonJson(text));
        }

        let data: Value = serde_json::from_str(&response.body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        if !response.is_success() {
            debug!(endpoint, status = response.status, "api error response");
            return Err(ApiError::Rejected {
                status: response.status,
                message: error_message(&data),
            });
        }

        Ok(data)
    }

    /// `GET endpoint`, decoded into `T`.
    ///
    /// # Errors
    ///
    /// As `call`, plus `ApiError::Decode` when the body has the wrong shape.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let value = self.call(endpoint, CallOptions::get()).await?;
        decode(value)
    }

    /// `POST endpoint` with a JSON body, decoded into `T`.
    ///
    /// # Errors
    ///
    /// As `call`, plus `ApiError::Decode` when either body cannot be converted.
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))?;
        let value = self.call(endpoint, CallOptions::post(body)).await?;
        decode(value)
    }

    fn prepare(&self, endpoint: &str, options: CallOptions) -> ApiRequest {
        let mut headers = vec![(CONTENT_TYPE.to_string(), "application/json".to_string())];
        for (key, value) in options.headers {
            set_header(&mut headers, key, value);
        }
        match self.session.token() {
            Some(token) => set_header(&mut headers, AUTHORIZATION.to_string(), token.bearer()),
            None => headers.retain(|(key, _)| !key.eq_ignore_ascii_case(AUTHORIZATION)),
        }

        ApiRequest {
            method: options.method,
            url: self.config.endpoint_url(endpoint),
            headers,
            body: options.body.map(|body| body.to_string()),
        }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, key: String, value: String) {
    headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&key));
    headers.push((key, value));
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Message for a JSON error body: `detail`, else `message`, else a fallback.
fn error_message(data: &Value) -> String {
    match data.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => return detail.clone(),
        // Validation failures arrive as a list of `{loc, msg, type}`.
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return joined;
            }
        }
        _ => {}
    }
    match data.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        _ => REQUEST_FAILED.to_string(),
    }
}
