use citsite::{
    config::Settings,
    domain::{
        AnnouncementType, ContactStatus, EventCategory, EventType, NewAnnouncement,
        NewContactMessage, NewEvent, RegistrationForm,
    },
    service::ServiceContext,
};
use clap::{Parser, Subcommand};
use fake::{
    faker::{
        internet::en::SafeEmail,
        lorem::en::{Paragraph, Sentence},
        name::en::Name,
        phone_number::en::PhoneNumber,
    },
    Fake,
};
use sqlx::sqlite::SqlitePoolOptions;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Create admin accounts and demo content for the CIT website", long_about = None)]
struct Cli {
    /// Overrides the configured database URL.
    #[arg(long)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    Admin {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Fill the store with sample announcements, events, messages and registrations
    Demo {
        /// Registrations created per event
        #[arg(short, long, default_value = "3")]
        registrations: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::new().unwrap_or_default();
    let database_url = cli
        .database_url
        .unwrap_or_else(|| settings.database.url.clone());

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    println!("📋 Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await?;

    let services = ServiceContext::new(db_pool, &settings.auth);

    match cli.command {
        Commands::Admin { email, password } => {
            let admin = services.auth_service.create_admin(&email, &password).await?;
            println!("  ✅ Created admin {}", admin.email);
        }
        Commands::Demo { registrations } => seed_demo(&services, registrations).await?,
    }

    Ok(())
}

async fn seed_demo(services: &ServiceContext, registrations_per_event: usize) -> anyhow::Result<()> {
    println!("📢 Creating announcements...");
    let announcements = [
        ("Finals Week Schedule", "December 1, 2025", AnnouncementType::Important),
        ("CIT Wins Regional Hackathon", "November 20, 2025", AnnouncementType::Achievement),
        ("IT Week Celebration", "November 10, 2025", AnnouncementType::Event),
        ("New Networking Laboratory", "October 28, 2025", AnnouncementType::Facility),
    ];
    for (title, date, announcement_type) in announcements {
        let content: Vec<String> = (0..2).map(|_| Paragraph(2..4).fake()).collect();
        services
            .announcement_service
            .create(NewAnnouncement {
                title: title.to_string(),
                date: date.to_string(),
                content,
                announcement_type,
            })
            .await?;
    }
    println!("  ✅ Created {} announcements", announcements.len());

    println!("📅 Creating events...");
    let events = [
        ("Cybersecurity Awareness Seminar", "December 5, 2025", "1:00 PM - 4:00 PM", EventCategory::Seminar),
        ("Flutter Mobile Workshop", "December 12, 2025", "9:00 AM - 3:00 PM", EventCategory::Workshop),
        ("Hack Night", "January 16, 2026", "6:00 PM - 6:00 AM", EventCategory::Competition),
        ("Philippine IT Educators Conference", "February 6, 2026", "8:00 AM - 5:00 PM", EventCategory::Conference),
    ];
    for (title, date, time, category) in events {
        let id = services
            .event_service
            .create(NewEvent {
                title: title.to_string(),
                date: date.to_string(),
                time: time.to_string(),
                location: "CIT Building, University of the Assumption".to_string(),
                description: Sentence(10..18).fake(),
                attendees: Some((40u32..200).fake::<u32>()),
                event_type: EventType::Upcoming,
                category,
            })
            .await?;

        let Some(event) = services.event_service.get(&id).await? else {
            continue;
        };
        for _ in 0..registrations_per_event {
            services
                .registration_service
                .register(
                    &event,
                    RegistrationForm {
                        name: Name().fake(),
                        email: SafeEmail().fake(),
                        phone: Some(PhoneNumber().fake()),
                    },
                )
                .await?;
        }
    }
    println!(
        "  ✅ Created {} events with {} registrations each",
        events.len(),
        registrations_per_event
    );

    println!("✉️  Creating contact messages...");
    let statuses = [ContactStatus::New, ContactStatus::Read, ContactStatus::Replied];
    for status in statuses {
        let id = services
            .contact_service
            .create(NewContactMessage {
                name: Name().fake(),
                email: SafeEmail().fake(),
                subject: Sentence(3..6).fake(),
                message: Paragraph(2..4).fake(),
            })
            .await?;
        if status != ContactStatus::New {
            services.contact_service.update_status(&id, status).await?;
        }
    }
    println!("  ✅ Created {} contact messages", statuses.len());

    println!("🌱 Demo content ready");
    Ok(())
}
