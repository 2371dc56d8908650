//! MySQL implementation of the SessionRepository trait.
//!
//! Sessions are stored one row per user with the rotation history held in a
//! JSON column, so that the compare-and-swap rotation can run as a single
//! conditional UPDATE with no read-modify-write window.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rp_core::domain::entities::session::Session;
use rp_core::errors::DomainError;
use rp_core::repositories::SessionRepository;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Session entity
    fn row_to_session(row: &sqlx::mysql::MySqlRow) -> Result<Session, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        let used: Json<Vec<String>> =
            row.try_get("used_refresh_tokens")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get used_refresh_tokens: {}", e),
                })?;

        Ok(Session {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid session UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            current_refresh_token: row.try_get("current_refresh_token").map_err(|e| {
                DomainError::Internal {
                    message: format!("Failed to get current_refresh_token: {}", e),
                }
            })?,
            used_refresh_tokens: used.0,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    async fn find_one(
        &self,
        query: &str,
        bind: &str,
    ) -> Result<Option<Session>, DomainError> {
        let result = sqlx::query(query)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to query session: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_session(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn upsert(&self, user_id: Uuid, refresh_token: &str) -> Result<Session, DomainError> {
        let session = Session::new(user_id, refresh_token.to_string());

        // The unique key on user_id makes this replace any existing session,
        // resetting the rotation history along with the record identity.
        let query = r#"
            INSERT INTO sessions (
                id, user_id, current_refresh_token, used_refresh_tokens,
                created_at, updated_at
            ) VALUES (?, ?, ?, JSON_ARRAY(), ?, ?)
            ON DUPLICATE KEY UPDATE
                id = VALUES(id),
                current_refresh_token = VALUES(current_refresh_token),
                used_refresh_tokens = JSON_ARRAY(),
                created_at = VALUES(created_at),
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(session.id.to_string())
            .bind(session.user_id.to_string())
            .bind(&session.current_refresh_token)
            .bind(session.created_at)
            .bind(session.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to upsert session: {}", e),
            })?;

        Ok(session)
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, current_refresh_token, used_refresh_tokens,
                   created_at, updated_at
            FROM sessions
            WHERE user_id = ?
            LIMIT 1
        "#;

        self.find_one(query, &user_id.to_string()).await
    }

    async fn find_by_current_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, current_refresh_token, used_refresh_tokens,
                   created_at, updated_at
            FROM sessions
            WHERE current_refresh_token = ?
            LIMIT 1
        "#;

        self.find_one(query, token).await
    }

    async fn find_by_used_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, current_refresh_token, used_refresh_tokens,
                   created_at, updated_at
            FROM sessions
            WHERE JSON_CONTAINS(used_refresh_tokens, JSON_QUOTE(?))
            LIMIT 1
        "#;

        self.find_one(query, token).await
    }

    async fn delete_by_id(&self, session_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(session_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete session: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete user sessions: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn rotate_token(
        &self,
        session_id: Uuid,
        new_token: &str,
        retired_token: &str,
    ) -> Result<bool, DomainError> {
        // Single conditional UPDATE: the WHERE clause is the compare half of
        // the compare-and-swap, so concurrent rotations with the same retired
        // token cannot both succeed. The JSON_CONTAINS guard keeps the
        // history free of duplicates.
        let query = r#"
            UPDATE sessions
            SET used_refresh_tokens = IF(
                    JSON_CONTAINS(used_refresh_tokens, JSON_QUOTE(?)),
                    used_refresh_tokens,
                    JSON_ARRAY_APPEND(used_refresh_tokens, '$', ?)
                ),
                current_refresh_token = ?,
                updated_at = ?
            WHERE id = ? AND current_refresh_token = ?
        "#;

        let result = sqlx::query(query)
            .bind(retired_token)
            .bind(retired_token)
            .bind(new_token)
            .bind(Utc::now())
            .bind(session_id.to_string())
            .bind(retired_token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to rotate refresh token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
