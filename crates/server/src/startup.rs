use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::store::{InMemoryStoreRepository, RepositoryStoreService, SeaOrmStoreRepository, StoreService};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the config file when present, otherwise build the config from env vars.
/// A config file that exists but does not validate is a startup error.
pub fn load_config() -> Result<AppConfig, StartupError> {
    load_config_from(&configs::config_path())
}

pub fn load_config_from(path: &str) -> Result<AppConfig, StartupError> {
    if Path::new(path).exists() {
        let mut cfg = configs::load_from_file(path)
            .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?;
        cfg.normalize_and_validate()
            .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?;
        Ok(cfg)
    } else {
        AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
    }
}

/// Pick the store backend: SeaORM when a database URL is configured, in-memory otherwise.
pub async fn build_store_service(cfg: &DatabaseConfig) -> anyhow::Result<Arc<dyn StoreService>> {
    if cfg.is_in_memory() {
        warn!("no database url configured; stores are kept in memory and lost on restart");
        let repo = Arc::new(InMemoryStoreRepository::new());
        return Ok(Arc::new(RepositoryStoreService::new(repo)));
    }
    let db = models::db::connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");
    let repo = Arc::new(SeaOrmStoreRepository::new(db));
    Ok(Arc::new(RepositoryStoreService::new(repo)))
}

/// Assemble the router for the given service.
pub fn build_app(stores: Arc<dyn StoreService>) -> Router {
    routes::build_router(AppState::new(stores), build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let stores = build_store_service(&cfg.database).await?;
    let app = build_app(stores);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, "starting store server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("project_store_{}_{name}.toml", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn invalid_config_file_is_reported() {
        let path = write_config("invalid", "[server]\nport = 0\n");
        let err = load_config_from(path.to_str().unwrap()).unwrap_err();
        std::fs::remove_file(&path).ok();
        let StartupError::InvalidConfig(msg) = err;
        assert!(msg.contains("server.port"), "{msg}");
    }

    #[test]
    fn unparsable_config_file_is_reported() {
        let path = write_config("unparsable", "[server\nport = \"x\"");
        let err = load_config_from(path.to_str().unwrap()).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, StartupError::InvalidConfig(_)));
    }

    #[test]
    fn valid_config_file_is_loaded() {
        let path = write_config("valid", "[server]\nhost = \"0.0.0.0\"\nport = 9090\n\n[database]\nurl = \"sqlite::memory:\"\n");
        let cfg = load_config_from(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9090");
        assert!(!cfg.database.is_in_memory());
    }
}
