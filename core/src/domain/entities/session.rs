//! Session entity tracking the single active refresh-token chain per user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Refresh-token session for one user
///
/// At most one session exists per user. `current_refresh_token` is the only
/// refresh token accepted for rotation; every token rotated out is appended
/// to `used_refresh_tokens`, and a presented token found in that history is
/// treated as a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for the session record
    pub id: Uuid,

    /// User this session belongs to (unique per user)
    pub user_id: Uuid,

    /// The one refresh token currently valid for this user
    pub current_refresh_token: String,

    /// Refresh tokens already consumed by rotation, kept for replay detection
    pub used_refresh_tokens: Vec<String>,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the session was last rotated
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session with an empty rotation history
    pub fn new(user_id: Uuid, refresh_token: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            current_refresh_token: refresh_token.into(),
            used_refresh_tokens: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given token appears in the rotation history
    pub fn has_used(&self, token: &str) -> bool {
        self.used_refresh_tokens.iter().any(|t| t == token)
    }

    /// Rotates the session in place: the retired token joins the history
    /// (set-union semantics) and the new token becomes current.
    pub fn rotate(&mut self, new_token: impl Into<String>, retired_token: &str) {
        if !self.has_used(retired_token) {
            self.used_refresh_tokens.push(retired_token.to_string());
        }
        self.current_refresh_token = new_token.into();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_empty_history() {
        let session = Session::new(Uuid::new_v4(), "token-1");

        assert_eq!(session.current_refresh_token, "token-1");
        assert!(session.used_refresh_tokens.is_empty());
    }

    #[test]
    fn test_rotate_retires_current_token() {
        let mut session = Session::new(Uuid::new_v4(), "token-1");

        session.rotate("token-2", "token-1");

        assert_eq!(session.current_refresh_token, "token-2");
        assert_eq!(session.used_refresh_tokens, vec!["token-1".to_string()]);
        assert!(session.has_used("token-1"));
        assert!(!session.has_used("token-2"));
    }

    #[test]
    fn test_rotate_history_is_a_set() {
        let mut session = Session::new(Uuid::new_v4(), "token-1");

        session.rotate("token-2", "token-1");
        session.rotate("token-3", "token-1");

        assert_eq!(session.used_refresh_tokens.len(), 1);
    }

    #[test]
    fn test_history_grows_by_one_per_rotation() {
        let mut session = Session::new(Uuid::new_v4(), "token-1");

        for i in 1..=5 {
            let current = session.current_refresh_token.clone();
            session.rotate(format!("token-{}", i + 1), &current);
            assert_eq!(session.used_refresh_tokens.len(), i);
            assert_eq!(session.used_refresh_tokens.last().unwrap(), &current);
        }
    }
}
