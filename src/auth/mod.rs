use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use cookie::{Cookie, SameSite};
use sqlx::{FromRow, SqlitePool};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::{
    domain::AdminUser,
    error::{AppError, Result},
};

pub mod csrf;
pub mod session;

pub use csrf::CsrfService;
use session::{Session, SessionStore};

pub const SESSION_COOKIE: &str = "session";

/// Where a request stands with respect to admin identity.
#[derive(Debug, Clone)]
pub enum SessionState {
    SignedOut,
    SignedIn { admin: AdminUser, session: Session },
}

/// Sign-in and sign-out notifications for subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn { admin_id: String, email: String },
    SignedOut { admin_id: String },
}

#[derive(FromRow)]
struct AdminRow {
    id: String,
    email: String,
    password_hash: String,
    created_at: NaiveDateTime,
}

impl AdminRow {
    fn into_admin(self) -> AdminUser {
        AdminUser {
            id: self.id,
            email: self.email,
            created_at: DateTime::from_naive_utc_and_offset(self.created_at, Utc),
        }
    }
}

pub struct AuthService {
    pool: SqlitePool,
    session_store: SessionStore,
    session_duration_hours: i64,
    secure_cookies: bool,
    events: broadcast::Sender<AuthEvent>,
}

impl AuthService {
    pub fn new(pool: SqlitePool, session_duration_hours: i64, secure_cookies: bool) -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            session_store: SessionStore::new(pool.clone()),
            pool,
            session_duration_hours,
            secure_cookies,
            events,
        }
    }

    pub async fn verify_password(password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        let argon2 = Argon2::default();

        Ok(argon2.verify_password(password.as_bytes(), &parsed_hash).is_ok())
    }

    pub async fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        Ok(password_hash.to_string())
    }

    pub async fn create_admin(&self, email: &str, password: &str) -> Result<AdminUser> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation("A valid email address is required".to_string()));
        }
        if password.len() < 8 {
            return Err(AppError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        let id = Uuid::new_v4().to_string();
        let password_hash = Self::hash_password(password).await?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO admins (id, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            "#
        )
        .bind(&id)
        .bind(&email)
        .bind(&password_hash)
        .bind(now.naive_utc())
        .execute(&self.pool)
        .await?;

        tracing::info!("Created admin account {}", email);

        Ok(AdminUser {
            id,
            email,
            created_at: now,
        })
    }

    pub async fn has_admin(&self) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminRow>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, password_hash, created_at FROM admins WHERE email = ?"
        )
        .bind(email.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_admin_by_id(&self, id: &str) -> Result<Option<AdminUser>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, password_hash, created_at FROM admins WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(AdminRow::into_admin))
    }

    /// Checks the credentials and opens a session. Every failure, whatever
    /// its cause, is reported as `Unauthorized`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(Session, String, AdminUser)> {
        let row = self
            .find_admin_by_email(email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !Self::verify_password(password, &row.password_hash).await? {
            tracing::warn!("Failed login attempt for {}", row.email);
            return Err(AppError::Unauthorized);
        }

        let admin = row.into_admin();
        let token = generate_token();
        let expires_at = Utc::now() + Duration::hours(self.session_duration_hours);
        let session = self.session_store.create(&admin.id, &token, expires_at).await?;

        let _ = self.events.send(AuthEvent::SignedIn {
            admin_id: admin.id.clone(),
            email: admin.email.clone(),
        });

        Ok((session, token, admin))
    }

    pub async fn logout(&self, token: &str) -> Result<()> {
        if let Some(session) = self.session_store.find_by_token(token).await? {
            self.session_store.delete_by_token(token).await?;
            let _ = self.events.send(AuthEvent::SignedOut {
                admin_id: session.admin_id,
            });
        }
        Ok(())
    }

    /// Resolves the session cookie value (if any) to a session state.
    pub async fn session_state(&self, token: Option<&str>) -> Result<SessionState> {
        let Some(token) = token else {
            return Ok(SessionState::SignedOut);
        };

        let Some(session) = self.session_store.find_by_token(token).await? else {
            return Ok(SessionState::SignedOut);
        };

        match self.find_admin_by_id(&session.admin_id).await? {
            Some(admin) => Ok(SessionState::SignedIn { admin, session }),
            None => Ok(SessionState::SignedOut),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    pub async fn cleanup_expired_sessions(&self) -> Result<u64> {
        self.session_store.cleanup_expired().await
    }

    pub fn create_session_cookie(&self, token: &str) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, token.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(self.secure_cookies)
            .max_age(cookie::time::Duration::hours(self.session_duration_hours))
            .build()
    }

    pub fn create_logout_cookie() -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .max_age(cookie::time::Duration::seconds(0))
            .build()
    }
}

pub(crate) fn generate_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
