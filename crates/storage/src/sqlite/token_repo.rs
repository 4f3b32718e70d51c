use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{StorageError, TokenRepository};
use learnpath_core::model::AuthToken;

use super::SqliteRepository;

#[async_trait]
impl TokenRepository for SqliteRepository {
    async fn load_token(&self) -> Result<Option<AuthToken>, StorageError> {
        let row = sqlx::query("SELECT access_token FROM auth_session WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row
            .try_get("access_token")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(AuthToken::new(raw)))
    }

    async fn save_token(&self, token: &AuthToken) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO auth_session (id, access_token, saved_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                access_token = excluded.access_token,
                saved_at = excluded.saved_at
            ",
        )
        .bind(1_i64)
        .bind(token.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM auth_session WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
