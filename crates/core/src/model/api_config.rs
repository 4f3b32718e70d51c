use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Where the learning API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiConfigError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiConfig {
    /// Validate and normalise a base URL (http/https, no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns `ApiConfigError::InvalidBaseUrl` for unparsable or non-http URLs.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let parsed =
            Url::parse(trimmed).map_err(|_| ApiConfigError::InvalidBaseUrl(raw.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ApiConfigError::InvalidBaseUrl(raw));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Scheme, host and port of the base URL, for user-facing messages.
    #[must_use]
    pub fn origin(&self) -> String {
        Url::parse(&self.base_url)
            .map(|url| url.origin().ascii_serialization())
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Absolute URL for an endpoint such as `/courses/`.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(
            config.endpoint_url("/courses/"),
            "http://localhost:8000/api/courses/"
        );
        assert_eq!(config.origin(), "http://localhost:8000");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("https://learn.example.com/api/").unwrap();
        assert_eq!(config.base_url(), "https://learn.example.com/api");
        assert_eq!(
            config.endpoint_url("quizzes/submit"),
            "https://learn.example.com/api/quizzes/submit"
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(ApiConfig::new("ftp://example.com").is_err());
        assert!(ApiConfig::new("not a url").is_err());
    }
}
