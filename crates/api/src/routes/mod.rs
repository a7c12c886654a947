pub mod course;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /courses                    list, create
/// /courses/{id}               get, update, delete
/// /courses/{id}/publish       publish
/// /courses/{id}/archive       archive
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/courses", course::router())
}
