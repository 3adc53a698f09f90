#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with the store schema applied.
/// Each call yields an isolated database.
pub async fn memory_db() -> Result<DatabaseConnection, anyhow::Error> {
    memory_db_with(DatabaseConfig::default()).await
}

/// Like [`memory_db`] but keeps the caller's pool settings.
pub async fn memory_db_with(cfg: DatabaseConfig) -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..cfg };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
