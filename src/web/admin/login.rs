use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    api::{
        handlers::auth::sign_out,
        middleware::auth::{resolve_session, LOGIN_PATH},
        state::AppState,
    },
    auth::{AuthService, SessionState},
    web::templates::HtmlTemplate,
};

use super::DASHBOARD_PATH;

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// GET /admin/login
pub async fn login_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Ok(SessionState::SignedIn { .. }) = resolve_session(&state, &jar).await {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }

    HtmlTemplate(LoginTemplate {
        email: String::new(),
        error: None,
    })
    .into_response()
}

// POST /admin/login
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth_service = &state.service_context.auth_service;

    match auth_service.login(form.email.trim(), &form.password).await {
        Ok((_session, token, _admin)) => {
            let jar = jar.add(auth_service.create_session_cookie(&token));
            (jar, Redirect::to(DASHBOARD_PATH)).into_response()
        }
        Err(_) => HtmlTemplate(LoginTemplate {
            email: form.email,
            error: Some("Failed to login. Please check your credentials.".to_string()),
        })
        .into_response(),
    }
}

// POST /admin/logout
pub async fn logout_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    sign_out(&state, &jar).await;
    let jar = jar.add(AuthService::create_logout_cookie());
    (jar, Redirect::to(LOGIN_PATH)).into_response()
}
