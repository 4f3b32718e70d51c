use std::sync::{Arc, PoisonError, RwLock};

use learnpath_core::model::AuthToken;
use storage::repository::TokenRepository;
use tracing::warn;

use crate::error::SessionError;

/// The authenticated session: the current bearer token, mirrored to storage.
///
/// Cloning yields another handle to the same session. Every service that needs
/// the token receives one of these explicitly.
#[derive(Clone)]
pub struct Session {
    token: Arc<RwLock<Option<AuthToken>>>,
    store: Arc<dyn TokenRepository>,
}

impl Session {
    /// An empty session backed by `store`. Nothing is read from the store.
    #[must_use]
    pub fn new(store: Arc<dyn TokenRepository>) -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
            store,
        }
    }

    /// Build a session from whatever token `store` already holds.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the store cannot be read.
    pub async fn restore(store: Arc<dyn TokenRepository>) -> Result<Self, SessionError> {
        let token = store.load_token().await?;
        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            store,
        })
    }

    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replace the token in memory, then persist it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if persisting fails. The in-memory token is
    /// updated either way.
    pub async fn set_token(&self, token: AuthToken) -> Result<(), SessionError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
        self.store.save_token(&token).await?;
        Ok(())
    }

    /// Drop the token from memory and storage.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the stored token cannot be removed. The
    /// in-memory token is cleared either way.
    pub async fn clear(&self) -> Result<(), SessionError> {
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.store.clear_token().await?;
        Ok(())
    }

    /// `clear`, logging instead of returning a storage failure.
    pub async fn end(&self) {
        if let Err(err) = self.clear().await {
            warn!(error = %err, "failed to remove persisted token");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn restore_picks_up_persisted_token() {
        let repo = InMemoryRepository::with_token(AuthToken::new("saved"));
        let session = Session::restore(Arc::new(repo)).await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some(AuthToken::new("saved")));
    }

    #[tokio::test]
    async fn set_and_clear_mirror_to_storage() {
        let repo = InMemoryRepository::new();
        let session = Session::new(Arc::new(repo.clone()));

        session.set_token(AuthToken::new("t1")).await.unwrap();
        assert_eq!(repo.load_token().await.unwrap(), Some(AuthToken::new("t1")));

        let other_handle = session.clone();
        other_handle.clear().await.unwrap();
        assert!(!session.is_authenticated());
        assert!(repo.load_token().await.unwrap().is_none());
    }
}
