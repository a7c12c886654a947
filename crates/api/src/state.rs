use std::sync::Arc;

use rocklms_core::course_service::CourseService;
use rocklms_db::repositories::PgCourseRepository;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; everything shared sits behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rocklms_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Course lifecycle operations.
    pub courses: Arc<CourseService<PgCourseRepository>>,
}

impl AppState {
    /// Wire the services on top of `pool`.
    pub fn new(pool: rocklms_db::DbPool, config: ServerConfig) -> Self {
        let courses = CourseService::new(PgCourseRepository::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            courses: Arc::new(courses),
        }
    }
}
