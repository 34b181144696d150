use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Extension, Form,
};
use serde::Deserialize;

use crate::{
    api::{
        middleware::auth::{CurrentUser, SessionInfo},
        state::AppState,
    },
    domain::{ContactMessage, ContactStatus},
    web::templates::{redirect_error, redirect_notice, HtmlTemplate},
};

use super::{failure_message, form_token, form_token_valid, CsrfForm, EXPIRED_FORM};

const PAGE: &str = "/admin/contacts";

#[derive(Template)]
#[template(path = "admin/contacts.html")]
pub struct AdminContactsTemplate {
    pub admin_email: String,
    pub csrf_token: String,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub messages: Vec<AdminMessageInfo>,
    pub selected: Option<AdminMessageDetail>,
}

pub struct AdminMessageInfo {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub preview: String,
    pub status: &'static str,
    pub received: String,
    pub is_selected: bool,
}

pub struct AdminMessageDetail {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: &'static str,
    pub received: String,
    pub can_mark_read: bool,
    pub can_mark_replied: bool,
}

impl From<&ContactMessage> for AdminMessageDetail {
    fn from(m: &ContactMessage) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            email: m.email.clone(),
            subject: m.subject.clone(),
            message: m.message.clone(),
            status: m.status.as_str(),
            received: m.created_at.format("%b %-d, %Y %H:%M").to_string(),
            can_mark_read: m.status != ContactStatus::Read,
            can_mark_replied: m.status != ContactStatus::Replied,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminContactsQuery {
    pub selected: Option<String>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub csrf_token: String,
    pub status: ContactStatus,
}

// GET /admin/contacts
pub async fn admin_contacts_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Extension(session_info): Extension<SessionInfo>,
    Query(query): Query<AdminContactsQuery>,
) -> impl IntoResponse {
    let csrf_token = form_token(&state, &session_info).await;
    let mut error = query.error;

    let messages = match state.service_context.contact_service.get_all().await {
        Ok(messages) => messages,
        Err(e) => {
            tracing::error!("Error loading messages: {}", e);
            error = Some("Failed to load messages".to_string());
            Vec::new()
        }
    };

    let selected_id = query.selected.unwrap_or_default();
    let selected = messages
        .iter()
        .find(|m| m.id == selected_id)
        .map(AdminMessageDetail::from);

    let messages = messages
        .iter()
        .map(|m| AdminMessageInfo {
            id: m.id.clone(),
            name: m.name.clone(),
            subject: m.subject.clone(),
            preview: m.preview(),
            status: m.status.as_str(),
            received: m.created_at.format("%b %-d, %Y").to_string(),
            is_selected: m.id == selected_id,
        })
        .collect();

    HtmlTemplate(AdminContactsTemplate {
        admin_email: current_user.admin.email,
        csrf_token,
        notice: query.notice,
        error,
        messages,
        selected,
    })
}

// POST /admin/contacts/:id/status
pub async fn admin_update_contact_status(
    State(state): State<AppState>,
    Extension(session_info): Extension<SessionInfo>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Response {
    let back = format!("{}?selected={}", PAGE, urlencoding::encode(&id));
    if !form_token_valid(&state, &session_info, &form.csrf_token).await {
        return redirect_error(PAGE, EXPIRED_FORM).into_response();
    }

    match state
        .service_context
        .contact_service
        .update_status(&id, form.status)
        .await
    {
        Ok(()) => redirect_notice_with(&back, &format!("Marked as {}", form.status.as_str())),
        Err(e) => {
            tracing::error!("Error updating status of message {}: {}", id, e);
            redirect_error(PAGE, &failure_message("update status", &e)).into_response()
        }
    }
}

// The detail view keeps its `selected` query, so the notice is appended.
fn redirect_notice_with(back: &str, message: &str) -> Response {
    axum::response::Redirect::to(&format!("{}&notice={}", back, urlencoding::encode(message)))
        .into_response()
}

// POST /admin/contacts/:id/delete
pub async fn admin_delete_contact(
    State(state): State<AppState>,
    Extension(session_info): Extension<SessionInfo>,
    Path(id): Path<String>,
    Form(form): Form<CsrfForm>,
) -> Response {
    if !form_token_valid(&state, &session_info, &form.csrf_token).await {
        return redirect_error(PAGE, EXPIRED_FORM).into_response();
    }

    match state.service_context.contact_service.delete(&id).await {
        Ok(()) => redirect_notice(PAGE, "Message deleted!").into_response(),
        Err(e) => {
            tracing::error!("Error deleting message {}: {}", id, e);
            redirect_error(PAGE, "Failed to delete message").into_response()
        }
    }
}
