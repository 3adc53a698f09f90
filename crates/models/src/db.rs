use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Lifetime used for the single `sqlite::memory:` connection. The database lives
/// only as long as its connection, so that connection must never be recycled.
const PINNED_CONNECTION_LIFETIME: Duration = Duration::from_secs(u32::MAX as u64);

/// Translate pool settings into SeaORM connect options.
///
/// Every connection to `sqlite::memory:` opens a private database, so such URLs
/// are pinned to a single pooled connection that is never retired.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if is_memory_url(&cfg.url) {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(PINNED_CONNECTION_LIFETIME)
            .max_lifetime(PINNED_CONNECTION_LIFETIME);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opt
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:")
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sqlite_is_single_connection() {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_max_connections(), Some(1));
        assert_eq!(opt.get_min_connections(), Some(1));
    }

    #[test]
    fn pool_bounds_follow_config() {
        let cfg = DatabaseConfig {
            url: "postgres://localhost/project_store".into(),
            max_connections: 7,
            min_connections: 3,
            ..DatabaseConfig::default()
        };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_max_connections(), Some(7));
        assert_eq!(opt.get_min_connections(), Some(3));
        assert_eq!(opt.get_url(), "postgres://localhost/project_store");
    }
}
