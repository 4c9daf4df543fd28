use std::{future::Future, path::Path, sync::Arc};

use axum::Router;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::{AppConfig, StorageBackend};
use service::etudiant::{
    repo::seaorm::SeaOrmEtudiantRepository, repository::memory::InMemoryEtudiantRepository, EtudiantRepository,
};

use crate::{errors::StartupError, routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `$CONFIG_PATH`); without a file, fall back to env vars.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let cfg = if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        info!(%path, "no config file; using environment");
        AppConfig::from_env()
    };
    cfg.map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Pick the student store named by `storage.backend`.
pub async fn build_repository(cfg: &AppConfig) -> Result<Arc<dyn EtudiantRepository>, StartupError> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("in-memory storage selected; records are lost on restart");
            Ok(Arc::new(InMemoryEtudiantRepository::new()))
        }
        StorageBackend::Postgres => {
            let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
            let db = models::db::connect_with_config(&db_cfg)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            info!("database migrations applied");
            Ok(Arc::new(SeaOrmEtudiantRepository::new(db)))
        }
    }
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and serve until the process is killed.
pub async fn run() -> anyhow::Result<()> {
    run_until(std::future::pending::<()>()).await
}

/// Build the app and serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();

    let cfg = load_config()?;
    let repo = build_repository(&cfg).await?;
    let app = build_app(ServerState::new(repo));

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, backend = ?cfg.storage.backend, "starting server crate");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server drained");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_builds_without_database() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let repo = build_repository(&cfg).await.expect("memory repository");
        assert!(repo.find_all().await.expect("list").is_empty());
    }
}
