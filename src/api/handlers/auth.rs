use axum::{
    extract::State,
    http::StatusCode,
    Extension,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    auth::{self, SessionState, SESSION_COOKIE},
    domain::AdminUser,
    error::Result,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    /// Send back as `X-CSRF-Token` on state-changing admin requests.
    pub csrf_token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; session cookie set", body = LoginResponse),
        (status = 401, description = "Login failed")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>)> {
    let auth_service = &state.service_context.auth_service;
    let (session, token, _admin) = auth_service.login(&req.email, &req.password).await?;

    let csrf_token = state.service_context.csrf_service
        .generate_token(&session.id)
        .await?;

    let cookie = auth_service.create_session_cookie(&token);

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            message: "Login successful".to_string(),
            csrf_token,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses((status = 204, description = "Signed out; session cookie cleared"))
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode)> {
    sign_out(&state, &jar).await;
    let jar = jar.add(auth::AuthService::create_logout_cookie());
    Ok((jar, StatusCode::NO_CONTENT))
}

/// Ends the session named by the cookie, if any. Failures are logged only:
/// the cookie is cleared either way.
pub async fn sign_out(state: &AppState, jar: &CookieJar) {
    let Some(session_cookie) = jar.get(SESSION_COOKIE) else {
        return;
    };
    let auth_service = &state.service_context.auth_service;

    if let Ok(SessionState::SignedIn { session, .. }) =
        auth_service.session_state(Some(session_cookie.value())).await
    {
        if let Err(e) = state.service_context.csrf_service.delete_token(&session.id).await {
            tracing::warn!("Failed to delete CSRF token on logout: {}", e);
        }
    }

    if let Err(e) = auth_service.logout(session_cookie.value()).await {
        tracing::error!("Failed to logout: {}", e);
    }
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "The signed-in administrator", body = AdminUser),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<AdminUser> {
    Json(user.admin)
}
