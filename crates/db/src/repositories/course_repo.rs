//! Repository for the `courses` table.

use async_trait::async_trait;
use rocklms_core::course::{Course, CourseStatus, COURSE_ENTITY};
use rocklms_core::course_service::CourseRepository;
use rocklms_core::error::CoreError;
use rocklms_core::types::{DbId, StatusId};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::course::CourseRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, duration, status_id, published_at, created_at, updated_at";

/// sqlx-backed course repository. Every call runs on the caller's transaction.
#[derive(Debug, Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wrap an unexpected database error as `Internal`, keeping the driver
/// message for the log line written by the caller.
fn db_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("database error: {err}"))
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    type Tx = Transaction<'static, Postgres>;

    async fn begin(&self) -> Result<Self::Tx, CoreError> {
        self.pool.begin().await.map_err(db_error)
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), CoreError> {
        tx.commit().await.map_err(db_error)
    }

    /// List courses ordered by id. A `None` status returns every row.
    async fn find_all(
        &self,
        tx: &mut Self::Tx,
        status: Option<CourseStatus>,
    ) -> Result<Vec<Course>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE ($1::SMALLINT IS NULL OR status_id = $1)
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, CourseRow>(&query)
            .bind(status.map(StatusId::from))
            .fetch_all(&mut **tx)
            .await
            .map_err(db_error)?;
        rows.into_iter().map(Course::try_from).collect()
    }

    async fn find_by_id(&self, tx: &mut Self::Tx, id: DbId) -> Result<Option<Course>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(db_error)?
            .map(Course::try_from)
            .transpose()
    }

    /// Insert or fully overwrite a course, returning the stored row.
    ///
    /// Updating an id that no longer exists yields `NotFound`.
    async fn save(&self, tx: &mut Self::Tx, course: Course) -> Result<Course, CoreError> {
        let row = match course.id {
            None => {
                let query = format!(
                    "INSERT INTO courses (title, description, duration, status_id, published_at)
                     VALUES ($1, $2, $3, $4, $5)
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, CourseRow>(&query)
                    .bind(&course.title)
                    .bind(&course.description)
                    .bind(course.duration)
                    .bind(course.status.id())
                    .bind(course.published_at)
                    .fetch_one(&mut **tx)
                    .await
                    .map_err(db_error)?
            }
            Some(id) => {
                let query = format!(
                    "UPDATE courses SET
                        title = $2,
                        description = $3,
                        duration = $4,
                        status_id = $5,
                        published_at = $6
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, CourseRow>(&query)
                    .bind(id)
                    .bind(&course.title)
                    .bind(&course.description)
                    .bind(course.duration)
                    .bind(course.status.id())
                    .bind(course.published_at)
                    .fetch_optional(&mut **tx)
                    .await
                    .map_err(db_error)?
                    .ok_or(CoreError::NotFound {
                        entity: COURSE_ENTITY,
                        id,
                    })?
            }
        };
        Course::try_from(row)
    }

    async fn delete_by_id(&self, tx: &mut Self::Tx, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(db_error)?;
        tracing::debug!(course_id = id, rows = result.rows_affected(), "Deleted course rows");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn db_error_becomes_internal_with_driver_message() {
        let err = db_error(sqlx::Error::PoolTimedOut);
        assert_matches!(err, CoreError::Internal(ref msg) if msg.starts_with("database error: "));
        assert!(err.to_string().contains("timed out"));
    }
}
