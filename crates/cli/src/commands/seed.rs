//! Seed the database with development data.
//!
//! Provisions a default admin account and inserts a handful of sample lead
//! applications in various statuses. Intended for local development only;
//! running it twice inserts the sample leads again.

use clearwell_core::ApplicationStatus;
use clearwell_site::db::ApplicationRepository;
use clearwell_site::db::applications::NewApplication;
use clearwell_site::services::SetupService;

use super::CommandError;

const SAMPLE_LEADS: &[(&str, &str, &str, ApplicationStatus)] = &[
    (
        "Иван Петров",
        "+7 (999) 123-45-67",
        "Нужна скважина для полива участка 6 соток",
        ApplicationStatus::Pending,
    ),
    (
        "Мария Сидорова",
        "+7 (999) 234-56-78",
        "Требуется вода для дома и бани",
        ApplicationStatus::InProgress,
    ),
    (
        "Алексей Козлов",
        "+7 (999) 345-67-89",
        "Скважина на песок, участок в деревне",
        ApplicationStatus::Completed,
    ),
];

/// Seed the database: default admin plus sample leads.
///
/// # Errors
///
/// Returns an error if the database is unreachable or any insert fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    let setup = SetupService::new(&pool);
    let admin = setup
        .provision_admin("Администратор", "admin@example.com", "admin123")
        .await?;
    tracing::info!("Seeded admin: {} (id {})", admin.email, admin.id);

    let applications = ApplicationRepository::new(&pool);
    for &(name, phone, comment, status) in SAMPLE_LEADS {
        let created = applications
            .create(NewApplication {
                name,
                phone,
                comment: Some(comment),
                user_id: None,
            })
            .await?;

        // create() always inserts as PENDING, so bump the non-pending samples
        if status != ApplicationStatus::Pending {
            applications.update_status(created.id, status).await?;
        }

        tracing::info!("Seeded lead: {} ({})", name, status);
    }

    tracing::info!("Seed complete!");
    Ok(())
}
