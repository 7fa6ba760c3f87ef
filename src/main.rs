use std::sync::Arc;

use portfolio_api::app::app;
use portfolio_api::config;
use portfolio_api::database;
use portfolio_api::incc::{EscalationEngine, IndexSeriesStore};
use portfolio_api::services::seed;
use portfolio_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting portfolio API in {:?} mode", config.environment);

    // The index series loads once; a bad data file must abort startup,
    // otherwise every valuation would be silently wrong.
    let store = IndexSeriesStore::from_path(&config.index.data_path)
        .unwrap_or_else(|e| panic!("failed to load index data: {}", e));
    let engine = EscalationEngine::new(Arc::new(store));

    let pool = database::connect()
        .await
        .unwrap_or_else(|e| panic!("failed to connect database: {}", e));

    if config.security.seed_default_users {
        if let Err(e) = seed::ensure_default_users(&pool).await {
            tracing::warn!("User seeding failed: {}", e);
        }
    }

    let state = AppState { pool, engine };
    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Portfolio API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
