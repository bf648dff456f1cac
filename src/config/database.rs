use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Connect to the application database and run pending migrations.
pub async fn connect_and_migrate(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations complete");

    Ok(db)
}
