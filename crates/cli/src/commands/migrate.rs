//! Database migration command.
//!
//! Runs the embedded site migrations against `SITE_DATABASE_URL`.
//! Migrations live in `crates/site/migrations/` and are compiled into the
//! binary, so this works without the source tree present.

use super::CommandError;

/// Run site database migrations.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    tracing::info!("Running site migrations...");
    clearwell_site::db::MIGRATOR.run(&pool).await?;

    tracing::info!("Site migrations complete!");
    Ok(())
}
