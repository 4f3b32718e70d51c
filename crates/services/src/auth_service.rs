use learnpath_core::model::{LoginDraft, Page, SignupDraft, TokenResponse, UserProfile};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{ApiError, AuthError};
use crate::gateway::{ApiGateway, CallOptions};
use crate::router::PageRouter;
use crate::session::Session;

/// Login, signup and logout against `/auth/*`.
#[derive(Clone)]
pub struct AuthService {
    gateway: ApiGateway,
    session: Session,
    router: PageRouter,
}

impl AuthService {
    #[must_use]
    pub fn new(gateway: ApiGateway, session: Session, router: PageRouter) -> Self {
        Self {
            gateway,
            session,
            router,
        }
    }

    /// Exchange credentials for a token, store it and show the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` when a field is empty (nothing is sent),
    /// `AuthError::Api` when the call fails, and
    /// `AuthError::InvalidCredentials` when the reply carries no token.
    pub async fn login(&self, draft: LoginDraft) -> Result<(), AuthError> {
        let request = draft.validate()?;
        let body = serde_json::to_value(&request).map_err(|err| ApiError::Decode(err.to_string()))?;
        let reply = self
            .gateway
            .call("/auth/login", CallOptions::post(body))
            .await?;

        let Ok(tokens) = serde_json::from_value::<TokenResponse>(reply) else {
            return Err(AuthError::InvalidCredentials);
        };
        if tokens.access_token.as_str().is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        if let Err(err) = self.session.set_token(tokens.access_token).await {
            warn!(error = %err, "failed to persist token");
        }
        info!(username = %request.username, "logged in");
        self.router.show(Page::Dashboard);
        Ok(())
    }

    /// Register a new account. The caller switches to the login tab.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` for missing fields or a malformed
    /// email (nothing is sent), `AuthError::Api` when the call fails, and
    /// `AuthError::SignupFailed` when the reply is not a user.
    pub async fn signup(&self, draft: SignupDraft) -> Result<UserProfile, AuthError> {
        let request = draft.validate()?;
        let body = serde_json::to_value(&request).map_err(|err| ApiError::Decode(err.to_string()))?;
        let reply = self
            .gateway
            .call("/auth/signup", CallOptions::post(body))
            .await?;

        if reply.get("id").is_none_or(Value::is_null) {
            return Err(AuthError::SignupFailed);
        }
        let profile =
            serde_json::from_value::<UserProfile>(reply).map_err(|_| AuthError::SignupFailed)?;
        info!(username = %profile.username, "account created");
        Ok(profile)
    }

    /// Forget the token and return to the login page.
    pub async fn logout(&self) {
        self.session.end().await;
        self.router.show(Page::Login);
        info!("logged out");
    }

    /// The signed-in user (`GET /auth/me`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails or the body is not a user.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.gateway.get("/auth/me").await
    }
}
