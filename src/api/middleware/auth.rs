use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    api::state::AppState,
    auth::{csrf::CSRF_HEADER, SessionState, SESSION_COOKIE},
    domain::AdminUser,
    error::{AppError, Result},
};

pub const LOGIN_PATH: &str = "/admin/login";

/// The signed-in administrator, inserted by the guards below.
#[derive(Clone)]
pub struct CurrentUser {
    pub admin: AdminUser,
}

#[derive(Clone)]
pub struct SessionInfo {
    pub session_id: String,
}

pub async fn resolve_session(state: &AppState, jar: &CookieJar) -> Result<SessionState> {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value());
    state
        .service_context
        .auth_service
        .session_state(token)
        .await
}

fn attach(request: &mut Request, session_state: SessionState) -> bool {
    match session_state {
        SessionState::SignedIn { admin, session } => {
            request.extensions_mut().insert(CurrentUser { admin });
            request.extensions_mut().insert(SessionInfo {
                session_id: session.id,
            });
            true
        }
        SessionState::SignedOut => false,
    }
}

/// API guard: 401 when signed out; state-changing requests must also carry
/// the session's CSRF token in `X-CSRF-Token`.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let session_state = resolve_session(&state, &jar).await?;
    let session_id = match &session_state {
        SessionState::SignedIn { session, .. } => session.id.clone(),
        SessionState::SignedOut => return Err(AppError::Unauthorized),
    };

    let safe = matches!(*request.method(), Method::GET | Method::HEAD | Method::OPTIONS);
    if !safe {
        let token = request
            .headers()
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        state
            .service_context
            .csrf_service
            .verify(&session_id, token)
            .await?;
    }

    attach(&mut request, session_state);
    Ok(next.run(request).await)
}

/// Page guard: sends signed-out visitors to the login page.
pub async fn require_auth_redirect(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let session_state = match resolve_session(&state, &jar).await {
        Ok(session_state) => session_state,
        Err(e) => {
            tracing::error!("Failed to resolve admin session: {}", e);
            SessionState::SignedOut
        }
    };

    if !attach(&mut request, session_state) {
        return Redirect::to(LOGIN_PATH).into_response();
    }

    next.run(request).await
}
