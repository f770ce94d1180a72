use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use groups_api::{build_router, AppState, CorsPolicy};
use groups_core::{GroupRepository, NamePolicy};
use groups_infrastructure::{create_pool, InMemoryGroupRepository, PgGroupRepository};
use groups_shared::config::{AppConfig, NamePolicyKind, StoreBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    groups_shared::telemetry::init_telemetry()?;

    info!("Groups server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let groups = build_repository(&config).await?;
    let state = AppState::new(groups, CorsPolicy::new(config.cors.allowed_origins.clone()));
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn GroupRepository>> {
    let policy = |default: NamePolicy| match config.store.name_policy {
        Some(NamePolicyKind::Strict) => NamePolicy::Strict,
        Some(NamePolicyKind::Permissive) => NamePolicy::Permissive,
        None => default,
    };

    match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory group store");
            Ok(Arc::new(
                InMemoryGroupRepository::new().with_policy(policy(NamePolicy::Permissive)),
            ))
        }
        StoreBackend::Postgres => {
            info!("Connecting to database at {}...", config.database.url);
            let pool = create_pool(
                &config.database.url,
                config.database.pool_max_size,
                Duration::from_secs(config.database.connect_timeout_seconds),
            )
            .await?;
            info!("Database connection established.");
            Ok(Arc::new(
                PgGroupRepository::new(pool).with_policy(policy(NamePolicy::Strict)),
            ))
        }
    }
}
