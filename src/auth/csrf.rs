use sqlx::SqlitePool;

use crate::auth::{generate_token, session::hash_token};
use crate::error::{AppError, Result};

/// API request header carrying the token. HTML forms send it as the
/// `csrf_token` field instead.
pub const CSRF_HEADER: &str = "x-csrf-token";

pub struct CsrfService {
    pool: SqlitePool,
}

impl CsrfService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Generate a new CSRF token for a session, replacing any previous one.
    pub async fn generate_token(&self, session_id: &str) -> Result<String> {
        let token = generate_token();
        let token_hash = hash_token(&token);

        sqlx::query(
            r#"
            INSERT INTO csrf_tokens (session_id, token_hash, created_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(session_id) DO UPDATE SET
                token_hash = excluded.token_hash,
                created_at = CURRENT_TIMESTAMP
            "#
        )
        .bind(session_id)
        .bind(&token_hash)
        .execute(&self.pool)
        .await?;

        Ok(token)
    }

    pub async fn validate_token(&self, session_id: &str, token: &str) -> Result<bool> {
        let token_hash = hash_token(token);

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM csrf_tokens WHERE session_id = ? AND token_hash = ?"
        )
        .bind(session_id)
        .bind(&token_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Fails with `Forbidden` unless `token` belongs to the session.
    pub async fn verify(&self, session_id: &str, token: &str) -> Result<()> {
        if token.is_empty() || !self.validate_token(session_id, token).await? {
            tracing::warn!("Rejected request with invalid CSRF token for session {}", session_id);
            return Err(AppError::Forbidden);
        }
        Ok(())
    }

    /// Delete the CSRF token for a session (called on logout)
    pub async fn delete_token(&self, session_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM csrf_tokens WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_generation() {
        let token = generate_token();
        assert_eq!(token.len(), 64); // 32 bytes = 64 hex chars
        assert_ne!(token, generate_token());
    }

    #[test]
    fn test_token_hashing() {
        let token = "test_token";
        let hash1 = hash_token(token);
        let hash2 = hash_token(token);
        assert_eq!(hash1, hash2);
        assert_ne!(hash1, token);
    }
}
