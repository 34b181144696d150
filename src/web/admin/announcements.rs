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
    domain::{Announcement, AnnouncementType, AnnouncementUpdate, NewAnnouncement},
    web::templates::{redirect_error, redirect_notice, HtmlTemplate, SelectOption},
};

use super::{failure_message, form_token, form_token_valid, CsrfForm, EXPIRED_FORM};

const PAGE: &str = "/admin/announcements";

#[derive(Template)]
#[template(path = "admin/announcements.html")]
pub struct AdminAnnouncementsTemplate {
    pub admin_email: String,
    pub csrf_token: String,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub announcements: Vec<AdminAnnouncementInfo>,
    pub form: AnnouncementFormView,
}

pub struct AdminAnnouncementInfo {
    pub id: String,
    pub title: String,
    pub date: String,
    pub type_class: &'static str,
    pub type_label: &'static str,
    pub paragraphs: Vec<String>,
}

/// The create/edit form, pre-filled when editing.
pub struct AnnouncementFormView {
    pub action: String,
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub editing: bool,
    pub title: String,
    pub date: String,
    pub content: String,
    pub types: Vec<SelectOption>,
}

impl AnnouncementFormView {
    fn new_announcement() -> Self {
        Self {
            action: PAGE.to_string(),
            heading: "New Announcement",
            submit_label: "Create Announcement",
            editing: false,
            title: String::new(),
            date: String::new(),
            content: String::new(),
            types: type_options(AnnouncementType::default()),
        }
    }

    fn edit(announcement: &Announcement) -> Self {
        Self {
            action: format!("{}/{}", PAGE, announcement.id),
            heading: "Edit Announcement",
            submit_label: "Update Announcement",
            editing: true,
            title: announcement.title.clone(),
            date: announcement.date.clone(),
            content: announcement.content.join("\n"),
            types: type_options(announcement.announcement_type),
        }
    }
}

fn type_options(selected: AnnouncementType) -> Vec<SelectOption> {
    AnnouncementType::ALL
        .iter()
        .map(|t| SelectOption {
            value: t.as_str(),
            label: t.label(),
            selected: *t == selected,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct AdminAnnouncementsQuery {
    pub edit: Option<String>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// Form post for both create and update. Paragraphs are one per line.
#[derive(Debug, Deserialize)]
pub struct AnnouncementForm {
    pub csrf_token: String,
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub announcement_type: AnnouncementType,
    pub content: String,
}

impl AnnouncementForm {
    fn paragraphs(&self) -> Vec<String> {
        self.content.lines().map(str::to_string).collect()
    }
}

// GET /admin/announcements
pub async fn admin_announcements_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Extension(session_info): Extension<SessionInfo>,
    Query(query): Query<AdminAnnouncementsQuery>,
) -> impl IntoResponse {
    let csrf_token = form_token(&state, &session_info).await;
    let mut error = query.error;

    let announcements = match state.service_context.announcement_service.get_all().await {
        Ok(announcements) => announcements,
        Err(e) => {
            tracing::error!("Error loading announcements: {}", e);
            error = Some("Failed to load announcements".to_string());
            Vec::new()
        }
    };

    let form = query
        .edit
        .as_deref()
        .and_then(|id| announcements.iter().find(|a| a.id == id))
        .map(AnnouncementFormView::edit)
        .unwrap_or_else(AnnouncementFormView::new_announcement);

    let announcements = announcements
        .into_iter()
        .map(|a| AdminAnnouncementInfo {
            type_class: a.announcement_type.as_str(),
            type_label: a.announcement_type.label(),
            id: a.id,
            title: a.title,
            date: a.date,
            paragraphs: a.content,
        })
        .collect();

    HtmlTemplate(AdminAnnouncementsTemplate {
        admin_email: current_user.admin.email,
        csrf_token,
        notice: query.notice,
        error,
        announcements,
        form,
    })
}

// POST /admin/announcements
pub async fn admin_create_announcement(
    State(state): State<AppState>,
    Extension(session_info): Extension<SessionInfo>,
    Form(form): Form<AnnouncementForm>,
) -> Response {
    if !form_token_valid(&state, &session_info, &form.csrf_token).await {
        return redirect_error(PAGE, EXPIRED_FORM).into_response();
    }

    let announcement = NewAnnouncement {
        content: form.paragraphs(),
        title: form.title,
        date: form.date,
        announcement_type: form.announcement_type,
    };

    match state.service_context.announcement_service.create(announcement).await {
        Ok(_) => redirect_notice(PAGE, "Announcement created!").into_response(),
        Err(e) => {
            tracing::error!("Error saving announcement: {}", e);
            redirect_error(PAGE, &failure_message("save announcement", &e)).into_response()
        }
    }
}

// POST /admin/announcements/:id
pub async fn admin_update_announcement(
    State(state): State<AppState>,
    Extension(session_info): Extension<SessionInfo>,
    Path(id): Path<String>,
    Form(form): Form<AnnouncementForm>,
) -> Response {
    if !form_token_valid(&state, &session_info, &form.csrf_token).await {
        return redirect_error(PAGE, EXPIRED_FORM).into_response();
    }

    let update = AnnouncementUpdate {
        content: Some(form.paragraphs()),
        title: Some(form.title),
        date: Some(form.date),
        announcement_type: Some(form.announcement_type),
    };

    match state.service_context.announcement_service.update(&id, update).await {
        Ok(()) => redirect_notice(PAGE, "Announcement updated!").into_response(),
        Err(e) => {
            tracing::error!("Error saving announcement {}: {}", id, e);
            redirect_error(PAGE, &failure_message("save announcement", &e)).into_response()
        }
    }
}

// POST /admin/announcements/:id/delete
pub async fn admin_delete_announcement(
    State(state): State<AppState>,
    Extension(session_info): Extension<SessionInfo>,
    Path(id): Path<String>,
    Form(form): Form<CsrfForm>,
) -> Response {
    if !form_token_valid(&state, &session_info, &form.csrf_token).await {
        return redirect_error(PAGE, EXPIRED_FORM).into_response();
    }

    match state.service_context.announcement_service.delete(&id).await {
        Ok(()) => redirect_notice(PAGE, "Announcement deleted!").into_response(),
        Err(e) => {
            tracing::error!("Error deleting announcement {}: {}", id, e);
            redirect_error(PAGE, "Failed to delete announcement").into_response()
        }
    }
}
