use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"` when the course store answers, `"unavailable"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
}

impl HealthReport {
    /// Build the report and HTTP status for a database probe result.
    /// A failed probe maps to 503.
    pub fn from_probe(database: bool) -> (StatusCode, Self) {
        let (code, status) = if database {
            (StatusCode::OK, "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        };
        (
            code,
            Self {
                status,
                version: env!("CARGO_PKG_VERSION"),
                database,
            },
        )
    }
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database = match rocklms_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            false
        }
    };
    let (code, report) = HealthReport::from_probe(database);
    (code, Json(report))
}

/// `/health`, mounted at the root rather than under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_database_is_ok() {
        let (code, report) = HealthReport::from_probe(true);
        assert_eq!(code, StatusCode::OK);
        assert_eq!(report.status, "ok");
        assert!(report.database);
    }

    #[test]
    fn unreachable_database_is_service_unavailable() {
        let (code, report) = HealthReport::from_probe(false);
        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(report.status, "unavailable");
        assert!(!report.database);
    }
}
