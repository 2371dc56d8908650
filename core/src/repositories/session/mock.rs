//! Mock implementation of SessionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

use super::r#trait::SessionRepository;

/// Mock session repository for testing, keyed by user id
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl MockSessionRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn upsert(&self, user_id: Uuid, refresh_token: &str) -> Result<Session, DomainError> {
        let mut sessions = self.sessions.write().await;
        let session = Session::new(user_id, refresh_token);
        sessions.insert(user_id, session.clone());
        Ok(session)
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&user_id).cloned())
    }

    async fn find_by_current_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .values()
            .find(|s| s.current_refresh_token == token)
            .cloned())
    }

    async fn find_by_used_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.values().find(|s| s.has_used(token)).cloned())
    }

    async fn delete_by_id(&self, session_id: Uuid) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        let owner = sessions
            .values()
            .find(|s| s.id == session_id)
            .map(|s| s.user_id);

        match owner {
            Some(user_id) => Ok(sessions.remove(&user_id).is_some()),
            None => Ok(false),
        }
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(&user_id).is_some())
    }

    async fn rotate_token(
        &self,
        session_id: Uuid,
        new_token: &str,
        retired_token: &str,
    ) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.values_mut().find(|s| s.id == session_id);

        match session {
            Some(session) if session.current_refresh_token == retired_token => {
                session.rotate(new_token, retired_token);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
