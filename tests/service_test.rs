mod common;

use citsite::{
    domain::{
        AnnouncementType, AnnouncementUpdate, ContactStatus, EventCategory, EventType,
        EventUpdate, NewAnnouncement, NewContactMessage, NewEvent, RegistrationForm,
    },
    error::AppError,
};

fn announcement(title: &str, content: &[&str]) -> NewAnnouncement {
    NewAnnouncement {
        title: title.to_string(),
        date: "December 1, 2025".to_string(),
        content: content.iter().map(|s| s.to_string()).collect(),
        announcement_type: AnnouncementType::Important,
    }
}

fn event(title: &str, date: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        date: date.to_string(),
        time: "6:00 PM".to_string(),
        location: "CIT Lab 2".to_string(),
        description: "An evening of building things".to_string(),
        attendees: Some(50),
        event_type: EventType::Upcoming,
        category: EventCategory::Competition,
    }
}

fn form(name: &str, email: &str) -> RegistrationForm {
    RegistrationForm {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
    }
}

#[tokio::test]
async fn test_announcement_blank_lines_are_dropped() -> anyhow::Result<()> {
    let services = common::test_services().await?;
    let announcements = &services.announcement_service;

    announcements
        .create(announcement(
            "Finals Week",
            &["Exams start Monday.", "", "   ", "Good luck!"],
        ))
        .await?;

    let all = announcements.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Finals Week");
    assert_eq!(all[0].content, vec!["Exams start Monday.", "Good luck!"]);
    assert_eq!(all[0].announcement_type, AnnouncementType::Important);

    Ok(())
}

#[tokio::test]
async fn test_announcement_requires_content() -> anyhow::Result<()> {
    let services = common::test_services().await?;

    let result = services
        .announcement_service
        .create(announcement("Empty", &["", "  "]))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(services.announcement_service.get_all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_announcements_newest_first() -> anyhow::Result<()> {
    let services = common::test_services().await?;
    let announcements = &services.announcement_service;

    for title in ["First", "Second", "Third", "Fourth"] {
        announcements.create(announcement(title, &["Body"])).await?;
    }

    let titles: Vec<_> = announcements
        .get_all()
        .await?
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, vec!["Fourth", "Third", "Second", "First"]);

    let recent = announcements.recent(3).await?;
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].title, "Fourth");

    Ok(())
}

#[tokio::test]
async fn test_announcement_update_is_partial() -> anyhow::Result<()> {
    let services = common::test_services().await?;
    let announcements = &services.announcement_service;

    let id = announcements
        .create(announcement("Lab Closure", &["Closed Friday."]))
        .await?;
    let before = announcements.get_all().await?.remove(0);

    announcements
        .update(
            &id,
            AnnouncementUpdate {
                announcement_type: Some(AnnouncementType::Facility),
                ..Default::default()
            },
        )
        .await?;

    let after = announcements.get_all().await?.remove(0);
    assert_eq!(after.title, "Lab Closure");
    assert_eq!(after.content, vec!["Closed Friday."]);
    assert_eq!(after.announcement_type, AnnouncementType::Facility);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);

    let missing = announcements
        .update("no-such-id", AnnouncementUpdate::default())
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn test_contact_status_always_starts_new() -> anyhow::Result<()> {
    let services = common::test_services().await?;
    let contacts = &services.contact_service;

    // A client-supplied status is not part of the create payload at all
    let message: NewContactMessage = serde_json::from_value(serde_json::json!({
        "name": "Ana",
        "email": "ana@example.com",
        "subject": "Enrollment",
        "message": "How do I enroll?",
        "status": "replied"
    }))?;
    let id = contacts.create(message).await?;

    let all = contacts.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, ContactStatus::New);

    contacts.update_status(&id, ContactStatus::Read).await?;
    assert_eq!(contacts.get_all().await?[0].status, ContactStatus::Read);

    contacts.delete(&id).await?;
    assert!(contacts.get_all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_contact_requires_valid_email() -> anyhow::Result<()> {
    let services = common::test_services().await?;

    let result = services
        .contact_service
        .create(NewContactMessage {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

#[tokio::test]
async fn test_events_ordered_by_date_text() -> anyhow::Result<()> {
    let services = common::test_services().await?;
    let events = &services.event_service;

    events.create(event("Later", "2025-12-15")).await?;
    events.create(event("Sooner", "2025-11-02")).await?;
    events.create(event("Middle", "2025-12-01")).await?;

    let titles: Vec<_> = events.get_all().await?.into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["Sooner", "Middle", "Later"]);

    Ok(())
}

#[tokio::test]
async fn test_event_update_can_clear_attendees() -> anyhow::Result<()> {
    let services = common::test_services().await?;
    let events = &services.event_service;

    let id = events.create(event("Hack Night", "2025-12-01")).await?;
    events
        .update(
            &id,
            EventUpdate {
                attendees: Some(None),
                ..Default::default()
            },
        )
        .await?;

    let stored = events.get(&id).await?.expect("event exists");
    assert_eq!(stored.attendees, None);
    assert_eq!(stored.title, "Hack Night");

    Ok(())
}

#[tokio::test]
async fn test_registration_keeps_title_snapshot() -> anyhow::Result<()> {
    let services = common::test_services().await?;

    let event_id = services
        .event_service
        .create(event("Hack Night", "2025-12-01"))
        .await?;
    let stored = services.event_service.get(&event_id).await?.expect("event exists");

    services
        .registration_service
        .register(&stored, form("Jo", "jo@x.com"))
        .await?;

    services
        .event_service
        .update(
            &event_id,
            EventUpdate {
                title: Some("Hack Night 2.0".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let registrations = services.registration_service.get_by_event(&event_id).await?;
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].event_title, "Hack Night");
    assert_eq!(registrations[0].name, "Jo");
    assert_eq!(registrations[0].phone, None);

    Ok(())
}

#[tokio::test]
async fn test_registrations_by_event() -> anyhow::Result<()> {
    let services = common::test_services().await?;

    let a = services.event_service.create(event("Seminar A", "2025-11-01")).await?;
    let b = services.event_service.create(event("Seminar B", "2025-11-02")).await?;
    let event_a = services.event_service.get(&a).await?.expect("event exists");
    let event_b = services.event_service.get(&b).await?.expect("event exists");

    let registrations = &services.registration_service;
    registrations.register(&event_a, form("First", "first@x.com")).await?;
    registrations.register(&event_b, form("Other", "other@x.com")).await?;
    registrations.register(&event_a, form("Second", "second@x.com")).await?;

    let for_a: Vec<_> = registrations
        .get_by_event(&a)
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(for_a, vec!["Second", "First"]);
    assert_eq!(registrations.get_all().await?.len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_event_delete_leaves_registrations() -> anyhow::Result<()> {
    let services = common::test_services().await?;

    let id = services.event_service.create(event("Career Fair", "2025-10-10")).await?;
    let stored = services.event_service.get(&id).await?.expect("event exists");
    services
        .registration_service
        .register(&stored, form("Jo", "jo@x.com"))
        .await?;

    services.event_service.delete(&id).await?;

    assert!(services.event_service.get(&id).await?.is_none());
    let orphaned = services.registration_service.get_by_event(&id).await?;
    assert_eq!(orphaned.len(), 1);
    assert_eq!(orphaned[0].event_title, "Career Fair");

    Ok(())
}
