//! Router assembly, shared by the binary and the route-level tests.

use axum::http::HeaderValue;
use axum::{middleware as axum_middleware, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{self, Environment};
use crate::database;
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Protected API (JWT required)
        .merge(api_routes())
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    let config = config::config();
    if config.environment == Environment::Development {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

fn public_routes() -> Router<AppState> {
    use axum::routing::post;

    Router::new().route("/api/login", post(public::auth::login))
}

fn api_routes() -> Router<AppState> {
    use protected::{addresses, assessments, auth, ledger, managers, owners, properties};

    Router::new()
        .route("/api/me", get(auth::me))
        .route("/api/owners", get(owners::list).post(owners::create))
        .route(
            "/api/owners/:id",
            get(owners::show).put(owners::update).delete(owners::destroy),
        )
        .route("/api/managers", get(managers::list).post(managers::create))
        .route(
            "/api/managers/:id",
            get(managers::show)
                .put(managers::update)
                .delete(managers::destroy),
        )
        .route(
            "/api/addresses",
            get(addresses::list).post(addresses::create),
        )
        .route(
            "/api/addresses/:id",
            get(addresses::show)
                .put(addresses::update)
                .delete(addresses::destroy),
        )
        .route(
            "/api/properties",
            get(properties::list).post(properties::create),
        )
        .route(
            "/api/properties/:id",
            get(properties::show)
                .put(properties::update)
                .delete(properties::destroy),
        )
        .route("/api/properties/:id/details", get(properties::details))
        .route(
            "/api/assessments",
            get(assessments::list).post(assessments::create),
        )
        .route(
            "/api/assessments/:id",
            get(assessments::show)
                .put(assessments::update)
                .delete(assessments::destroy),
        )
        .route(
            "/api/expenses",
            get(ledger::expenses::list).post(ledger::expenses::create),
        )
        .route(
            "/api/expenses/:id",
            get(ledger::expenses::show)
                .put(ledger::expenses::update)
                .delete(ledger::expenses::destroy),
        )
        .route(
            "/api/taxes",
            get(ledger::taxes::list).post(ledger::taxes::create),
        )
        .route(
            "/api/taxes/:id",
            get(ledger::taxes::show)
                .put(ledger::taxes::update)
                .delete(ledger::taxes::destroy),
        )
        .route(
            "/api/incomes",
            get(ledger::incomes::list).post(ledger::incomes::create),
        )
        .route(
            "/api/incomes/:id",
            get(ledger::incomes::show)
                .put(ledger::incomes::update)
                .delete(ledger::incomes::destroy),
        )
        .layer(axum_middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Portfolio API",
            "version": version,
            "description": "Property-portfolio management backend with INCC value escalation",
            "endpoints": {
                "home": "/ (public)",
                "login": "/api/login (public - token acquisition)",
                "me": "/api/me (protected)",
                "owners": "/api/owners[/:id] (protected)",
                "managers": "/api/managers[/:id] (protected)",
                "addresses": "/api/addresses[/:id] (protected)",
                "properties": "/api/properties[/:id] (protected)",
                "valuation": "/api/properties/:id/details (protected)",
                "assessments": "/api/assessments[/:id] (protected)",
                "expenses": "/api/expenses[/:id] (protected)",
                "taxes": "/api/taxes[/:id] (protected)",
                "incomes": "/api/incomes[/:id] (protected)",
            }
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
