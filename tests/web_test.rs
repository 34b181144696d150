mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
};
use citsite::domain::{
    AnnouncementType, ContactStatus, EventCategory, EventType, NewAnnouncement, NewEvent,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_text(response: Response) -> anyhow::Result<String> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap_or_default()
}

/// `name=value` of the session cookie set by a login response.
fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|c| c.starts_with("session="))
        .and_then(|c| c.split(';').next())
        .unwrap_or_default()
        .to_string()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).expect("valid request")
}

#[tokio::test]
async fn test_public_pages_render() -> anyhow::Result<()> {
    let (app, services) = common::test_app().await?;

    services
        .announcement_service
        .create(NewAnnouncement {
            title: "Finals Week".to_string(),
            date: "December 1, 2025".to_string(),
            content: vec!["Exams start Monday.".to_string()],
            announcement_type: AnnouncementType::Important,
        })
        .await?;

    for path in ["/", "/about", "/programs", "/announcements", "/hall-of-fame", "/events", "/contacts"] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", path);
    }

    let response = app
        .clone()
        .oneshot(Request::get("/announcements").body(Body::empty())?)
        .await?;
    let html = body_text(response).await?;
    assert!(html.contains("Finals Week"));
    assert!(html.contains("Exams start Monday."));

    Ok(())
}

#[tokio::test]
async fn test_empty_listings_show_empty_state() -> anyhow::Result<()> {
    let (app, _services) = common::test_app().await?;

    let response = app
        .oneshot(Request::get("/events").body(Body::empty())?)
        .await?;
    let html = body_text(response).await?;
    assert!(html.contains("No events available at this time"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_page_is_not_found() -> anyhow::Result<()> {
    let (app, _services) = common::test_app().await?;

    let response = app
        .clone()
        .oneshot(Request::get("/no-such-page").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(Request::get("/events/missing/register").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_admin_pages_redirect_to_login() -> anyhow::Result<()> {
    let (app, _services) = common::test_app().await?;

    for path in ["/admin", "/admin/dashboard", "/admin/announcements", "/admin/registrations"] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {}", path);
        assert_eq!(location(&response), "/admin/login");
    }

    let response = app
        .oneshot(Request::get("/admin/login").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_contact_form_submission() -> anyhow::Result<()> {
    let (app, services) = common::test_app().await?;

    let response = app
        .oneshot(form_request(
            "/contacts",
            "name=Ana&email=ana%40example.com&subject=Enrollment&message=How+do+I+enroll%3F",
            None,
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/contacts?notice="));

    let messages = services.contact_service.get_all().await?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].subject, "Enrollment");
    assert_eq!(messages[0].message, "How do I enroll?");
    assert_eq!(messages[0].status, ContactStatus::New);

    Ok(())
}

#[tokio::test]
async fn test_event_registration_form() -> anyhow::Result<()> {
    let (app, services) = common::test_app().await?;

    let event_id = services
        .event_service
        .create(NewEvent {
            title: "Hack Night".to_string(),
            date: "2025-12-01".to_string(),
            time: "6:00 PM".to_string(),
            location: "CIT Lab 2".to_string(),
            description: "Build something".to_string(),
            attendees: None,
            event_type: EventType::Upcoming,
            category: EventCategory::Competition,
        })
        .await?;

    let uri = format!("/events/{}/register", event_id);
    let response = app
        .clone()
        .oneshot(Request::get(uri.as_str()).body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(form_request(&uri, "name=Jo&email=jo%40x.com&phone=", None))
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/events?notice="));

    let registrations = services.registration_service.get_by_event(&event_id).await?;
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].event_title, "Hack Night");
    assert_eq!(registrations[0].phone, None);

    Ok(())
}

#[tokio::test]
async fn test_api_contact_ignores_client_status() -> anyhow::Result<()> {
    let (app, services) = common::test_app().await?;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/contacts",
            json!({
                "name": "Ana",
                "email": "ana@example.com",
                "subject": "Hello",
                "message": "Hi there",
                "status": "replied"
            }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let messages = services.contact_service.get_all().await?;
    assert_eq!(messages[0].status, ContactStatus::New);

    Ok(())
}

#[tokio::test]
async fn test_api_mutations_require_login() -> anyhow::Result<()> {
    let (app, _services) = common::test_app().await?;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/announcements",
            json!({ "title": "x", "date": "y", "content": ["z"], "type": "event" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(Request::get("/api/contacts").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Public reads need no session
    let response = app
        .oneshot(Request::get("/api/announcements").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_api_login_then_create() -> anyhow::Result<()> {
    let (app, services) = common::test_app().await?;
    services
        .auth_service
        .create_admin(common::ADMIN_EMAIL, common::ADMIN_PASSWORD)
        .await?;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": common::ADMIN_EMAIL, "password": common::ADMIN_PASSWORD }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    assert!(!cookie.is_empty());
    let body: Value = serde_json::from_str(&body_text(response).await?)?;
    let csrf_token = body["csrf_token"].as_str().unwrap_or_default().to_string();

    let announcement = json!({
        "title": "Finals Week",
        "date": "December 1, 2025",
        "content": ["Exams start Monday.", "", "Good luck!"],
        "type": "important"
    });

    // Missing CSRF header
    let mut request = json_request("POST", "/api/announcements", announcement.clone());
    request.headers_mut().insert(header::COOKIE, cookie.parse()?);
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let mut request = json_request("POST", "/api/announcements", announcement);
    request.headers_mut().insert(header::COOKIE, cookie.parse()?);
    request.headers_mut().insert("x-csrf-token", csrf_token.parse()?);
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = services.announcement_service.get_all().await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].content, vec!["Exams start Monday.", "Good luck!"]);

    // Reads only need the session
    let mut request = Request::get("/api/auth/me").body(Body::empty())?;
    request.headers_mut().insert(header::COOKIE, cookie.parse()?);
    let response = app.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let me: Value = serde_json::from_str(&body_text(response).await?)?;
    assert_eq!(me["email"], common::ADMIN_EMAIL);

    Ok(())
}

#[tokio::test]
async fn test_admin_form_login_and_dashboard() -> anyhow::Result<()> {
    let (app, services) = common::test_app().await?;
    services
        .auth_service
        .create_admin(common::ADMIN_EMAIL, common::ADMIN_PASSWORD)
        .await?;

    let response = app
        .clone()
        .oneshot(form_request(
            "/admin/login",
            "email=admin%40cit.edu.ph&password=wrong-password",
            None,
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await?.contains("Failed to login"));

    let response = app
        .clone()
        .oneshot(form_request(
            "/admin/login",
            "email=admin%40cit.edu.ph&password=correct-horse-battery",
            None,
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard");
    let cookie = session_cookie(&response);

    let mut request = Request::get("/admin/dashboard").body(Body::empty())?;
    request.headers_mut().insert(header::COOKIE, cookie.parse()?);
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await?.contains(common::ADMIN_EMAIL));

    // A form post without the page's token is turned away
    let response = app
        .clone()
        .oneshot(form_request(
            "/admin/events",
            "csrf_token=forged&title=T&date=D&time=X&location=L&description=Desc&attendees=&type=upcoming&category=seminar",
            Some(&cookie),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/admin/events?error="));
    assert!(services.event_service.get_all().await?.is_empty());

    // Logging out ends the session
    let response = app
        .clone()
        .oneshot(form_request("/admin/logout", "", Some(&cookie)))
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let mut request = Request::get("/admin/dashboard").body(Body::empty())?;
    request.headers_mut().insert(header::COOKIE, cookie.parse()?);
    let response = app.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}
