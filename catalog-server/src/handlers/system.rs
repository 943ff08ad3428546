use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::AppState;
use crate::infra::errors::{AppError, AppResult};

pub async fn ping_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Reports `503` when the database does not answer a trivial query.
pub async fn health_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    state.postgres.ping().await.map_err(AppError::from)?;

    let pool = state.postgres.pool_stats();
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "database": {
                "status": "healthy",
                "pool_size": pool.size,
                "idle_connections": pool.idle,
                "max_connections": pool.max_size,
            }
        }
    })))
}
