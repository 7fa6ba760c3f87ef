use sqlx::PgPool;

use crate::incc::EscalationEngine;

/// Shared application state: the connection pool and the escalation
/// engine (which carries the immutable index store). Both are cheap
/// to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub engine: EscalationEngine,
}
